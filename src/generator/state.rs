//! Mutable generator state guarded by the per-instance lock

/// Last issued timestamp and the sequence value used with it
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct State {
    /// Unix milliseconds of the last issued ID; 0 until the first ID
    pub(crate) last_timestamp: u64,
    pub(crate) sequence: u32,
}

impl State {
    #[inline(always)]
    pub(crate) const fn new() -> Self {
        Self {
            last_timestamp: 0,
            sequence: 0,
        }
    }

    /// Advance the sequence modulo `mask + 1`, returning true when it wrapped to 0
    #[inline(always)]
    pub(crate) fn increment_sequence(&mut self, mask: u32) -> bool {
        self.sequence = self.sequence.wrapping_add(1) & mask;
        self.sequence == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_starts_at_sentinel() {
        let state = State::new();
        assert_eq!(state.last_timestamp, 0);
        assert_eq!(state.sequence, 0);
        assert_eq!(state, State::default());
    }

    #[test]
    fn test_increment_wraps_at_mask() {
        let mut state = State::new();
        let mask = (1 << 6) - 1;

        for expected in 1..=mask {
            assert!(!state.increment_sequence(mask));
            assert_eq!(state.sequence, expected);
        }
        assert!(state.increment_sequence(mask));
        assert_eq!(state.sequence, 0);
    }

    #[test]
    fn test_increment_with_widest_sequence() {
        let mask = (1 << 22) - 1;
        let mut state = State {
            last_timestamp: 7,
            sequence: mask - 1,
        };
        assert!(!state.increment_sequence(mask));
        assert!(state.increment_sequence(mask));
        assert_eq!(state.last_timestamp, 7);
    }
}
