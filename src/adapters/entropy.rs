//! Random draws for radar emulation.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: the hardware RNG via `esp_random`.
//! On host/test: `RandomState`-seeded hashing of a counter; fine for
//! emulation, not for anything that needs real entropy.

use crate::app::ports::EntropyPort;

#[cfg(target_os = "espidf")]
pub struct HardwareEntropy;

#[cfg(target_os = "espidf")]
impl HardwareEntropy {
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_os = "espidf")]
impl EntropyPort for HardwareEntropy {
    fn next_u32(&mut self) -> u32 {
        // SAFETY: esp_random reads the RNG register; no preconditions.
        unsafe { esp_idf_svc::sys::esp_random() }
    }
}

#[cfg(not(target_os = "espidf"))]
pub struct HardwareEntropy {
    seed: std::collections::hash_map::RandomState,
    counter: u64,
}

#[cfg(not(target_os = "espidf"))]
impl HardwareEntropy {
    pub fn new() -> Self {
        Self {
            seed: std::collections::hash_map::RandomState::new(),
            counter: 0,
        }
    }
}

#[cfg(not(target_os = "espidf"))]
impl EntropyPort for HardwareEntropy {
    fn next_u32(&mut self) -> u32 {
        use std::hash::{BuildHasher, Hasher};

        let mut h = self.seed.build_hasher();
        h.write_u64(self.counter);
        self.counter = self.counter.wrapping_add(1);
        h.finish() as u32
    }
}

impl Default for HardwareEntropy {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_respect_their_bounds() {
        let mut rng = HardwareEntropy::new();
        for _ in 0..1_000 {
            assert!(rng.random_below(100) < 100);
            let v = rng.random_range(1, 10);
            assert!((1..10).contains(&v));
        }
    }

    #[test]
    fn successive_draws_differ() {
        let mut rng = HardwareEntropy::new();
        let draws: Vec<u32> = (0..8).map(|_| rng.next_u32()).collect();
        assert!(draws.windows(2).any(|w| w[0] != w[1]));
    }
}
