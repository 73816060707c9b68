//! Cycle clock.
//!
//! Everything periodic in the control loop is expressed in cycles rather
//! than wall time: radar aggregation every N cycles, envelope wings every M.
//! The counter wraps at a common multiple of both so no cadence slips
//! across the wrap.
//!
//! ```text
//!   step: 0 1 2 … 19 20 … 9999 0 1 …
//!         ▲          ▲          ▲
//!         due(20)    due(20)    due(20)
//! ```

/// Monotonic cycle counter with wrap.
#[derive(Debug, Clone)]
pub struct CycleClock {
    step: u32,
    wrap: u32,
}

impl CycleClock {
    /// `wrap` of zero is treated as one (a clock that is always at 0).
    pub fn new(wrap: u32) -> Self {
        Self {
            step: 0,
            wrap: wrap.max(1),
        }
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Whether the current step lands on a multiple of `every`.
    pub fn is_due(&self, every: u32) -> bool {
        every != 0 && self.step % every == 0
    }

    pub fn advance(&mut self) {
        self.step = (self.step + 1) % self.wrap;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_back_to_zero() {
        let mut c = CycleClock::new(10_000);
        for _ in 0..10_000 {
            c.advance();
        }
        assert_eq!(c.step(), 0);
    }

    #[test]
    fn cadence_survives_the_wrap() {
        let mut c = CycleClock::new(100);
        let mut due = Vec::new();
        for i in 0..250u32 {
            if c.is_due(20) {
                due.push(i);
            }
            c.advance();
        }
        let gaps: Vec<u32> = due.windows(2).map(|w| w[1] - w[0]).collect();
        assert!(gaps.iter().all(|&g| g == 20), "{:?}", gaps);
    }

    #[test]
    fn zero_divisor_is_never_due() {
        assert!(!CycleClock::new(10).is_due(0));
    }
}
