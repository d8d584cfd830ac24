//! Transient "Copied!" label state for copy buttons
//!
//! Each copy button owns one [`CopyFeedback`]. Clicking arms the confirmed
//! label and schedules a revert; clicking again before the revert fires
//! must not let the stale timer flip the label back early. Rather than
//! cancelling browser timers, every activation takes a fresh generation
//! and a revert only applies if its generation is still the current one,
//! so the most recent activation always wins.

/// How long the confirmed label stays up before reverting, in milliseconds.
pub const REVERT_DELAY_MS: u32 = 500;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    generation: u32,
    confirmed: bool,
}

impl CopyFeedback {
    /// Mark the label confirmed and return the generation the caller's
    /// revert timer must present to take effect.
    pub fn arm(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        self.confirmed = true;
        self.generation
    }

    /// Restore the idle label, unless a newer activation superseded
    /// `generation` in the meantime.
    pub fn revert(&mut self, generation: u32) {
        if self.generation == generation {
            self.confirmed = false;
        }
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arm_confirms_immediately() {
        let mut feedback = CopyFeedback::default();
        assert!(!feedback.is_confirmed());
        feedback.arm();
        assert!(feedback.is_confirmed());
    }

    #[test]
    fn test_revert_restores_idle() {
        let mut feedback = CopyFeedback::default();
        let generation = feedback.arm();
        feedback.revert(generation);
        assert!(!feedback.is_confirmed());
    }

    #[test]
    fn test_stale_revert_is_ignored() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.arm();
        let second = feedback.arm();

        // First activation's timer fires after the second click: no-op.
        feedback.revert(first);
        assert!(feedback.is_confirmed());

        // Only the latest activation's timer settles the label.
        feedback.revert(second);
        assert!(!feedback.is_confirmed());
    }

    #[test]
    fn test_exactly_one_effective_revert() {
        let mut feedback = CopyFeedback::default();
        let first = feedback.arm();
        let second = feedback.arm();
        feedback.revert(second);
        assert!(!feedback.is_confirmed());

        // A re-arm after settling is unaffected by long-stale timers.
        let third = feedback.arm();
        feedback.revert(first);
        feedback.revert(second);
        assert!(feedback.is_confirmed());
        feedback.revert(third);
        assert!(!feedback.is_confirmed());
    }

    #[test]
    fn test_buttons_are_independent() {
        let mut a = CopyFeedback::default();
        let mut b = CopyFeedback::default();

        let gen_a = a.arm();
        assert!(a.is_confirmed());
        assert!(!b.is_confirmed());

        b.arm();
        a.revert(gen_a);
        assert!(!a.is_confirmed());
        assert!(b.is_confirmed());
    }
}
