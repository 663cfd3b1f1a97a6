/// Turns a continuous "is intersecting" signal into a single rising edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    fired: bool,
}

impl RevealLatch {
    /// Feeds one intersection sample. Returns `true` only for the first
    /// visible sample; everything after that is ignored.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if self.fired || !intersecting {
            return false;
        }
        self.fired = true;
        true
    }

    pub fn force(&mut self) {
        self.fired = true;
    }

    pub fn is_fired(&self) -> bool {
        self.fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stays_hidden_until_first_intersection() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.observe(false));
        assert!(!latch.is_fired());
        assert!(latch.observe(true));
        assert!(latch.is_fired());
    }

    #[test]
    fn fires_once_across_reentries() {
        let mut latch = RevealLatch::default();
        let samples = [true, false, true, true, false, true];
        let edges = samples.iter().filter(|&&s| latch.observe(s)).count();
        assert_eq!(edges, 1);
        assert!(latch.is_fired());
    }

    #[test]
    fn forced_latch_never_fires_again() {
        let mut latch = RevealLatch::default();
        latch.force();
        assert!(!latch.observe(true));
        assert!(latch.is_fired());
    }
}
