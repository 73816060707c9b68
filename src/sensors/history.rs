//! Fixed-capacity sample history.
//!
//! Thin wrapper over [`heapless::HistoryBuffer`] that starts out full of
//! zeros, so "oldest retained sample" is always defined.  During the first
//! `N` cycles it is simply 0.

use heapless::HistoryBuffer;

pub struct SampleHistory<const N: usize> {
    buf: HistoryBuffer<u16, N>,
}

impl<const N: usize> SampleHistory<N> {
    pub fn new() -> Self {
        Self {
            buf: HistoryBuffer::new_with(0),
        }
    }

    /// Record the newest sample, evicting the oldest.
    pub fn push(&mut self, sample: u16) {
        self.buf.write(sample);
    }

    /// Oldest sample still retained.
    pub fn oldest(&self) -> u16 {
        self.buf.oldest_ordered().next().copied().unwrap_or(0)
    }

    /// Most recent sample.
    pub fn newest(&self) -> u16 {
        self.buf.recent().copied().unwrap_or(0)
    }

    /// Samples from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = u16> + '_ {
        self.buf.oldest_ordered().copied()
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for SampleHistory<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_is_zero_until_filled() {
        let mut h = SampleHistory::<4>::new();
        h.push(7);
        h.push(8);
        assert_eq!(h.oldest(), 0);
        assert_eq!(h.newest(), 8);
    }

    #[test]
    fn oldest_lags_newest_by_capacity_minus_one() {
        let mut h = SampleHistory::<4>::new();
        for v in 1..=6 {
            h.push(v);
        }
        assert_eq!(h.oldest(), 3);
        assert_eq!(h.iter().collect::<Vec<_>>(), vec![3, 4, 5, 6]);
    }
}
