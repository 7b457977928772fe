//! Best-effort vibration feedback.

use tracing::trace;

use crate::error::HapticsError;
use crate::game::Feedback;

/// A device that can vibrate.
pub trait Haptics {
    /// Plays a vibration pattern of alternating on/off durations in
    /// milliseconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot vibrate.
    fn vibrate(&mut self, pattern: &[u32]) -> Result<(), HapticsError>;
}

/// Haptics for devices without a vibration motor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoHaptics;

impl Haptics for NoHaptics {
    fn vibrate(&mut self, _pattern: &[u32]) -> Result<(), HapticsError> {
        Err(HapticsError::Unsupported)
    }
}

/// Plays the pattern for `feedback`, ignoring failures.
pub fn pulse<H: Haptics + ?Sized>(haptics: &mut H, feedback: Feedback) {
    if let Err(err) = haptics.vibrate(feedback.vibration_pattern()) {
        trace!(%err, "haptic pulse skipped");
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[derive(Default)]
    struct Recorder(Vec<Vec<u32>>);

    impl Haptics for Recorder {
        fn vibrate(&mut self, pattern: &[u32]) -> Result<(), HapticsError> {
            self.0.push(pattern.to_vec());
            Ok(())
        }
    }

    #[test]
    fn pulse_plays_outcome_pattern() {
        let mut recorder = Recorder::default();
        pulse(&mut recorder, Feedback::Correct);
        pulse(&mut recorder, Feedback::Incorrect);
        assert_eq!(recorder.0, [alloc::vec![30], alloc::vec![20, 30, 40]]);
    }

    #[test]
    fn pulse_swallows_failures() {
        pulse(&mut NoHaptics, Feedback::Incorrect);
    }
}
