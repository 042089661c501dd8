//! Reduced motion - startup gate over continuous effects
//!
//! The preference is read from the platform once per guard construction;
//! there is no live subscription to preference changes. Re-checking means
//! building a new guard.

use super::motion::DriftLoop;

/// The user's motion-reduction preference, sampled at construction.
#[derive(Debug, Clone, Copy)]
pub struct MotionPreference {
    reduced: bool,
}

impl MotionPreference {
    pub fn new(reduced: bool) -> Self {
        Self { reduced }
    }

    pub fn is_reduced(&self) -> bool {
        self.reduced
    }

    /// Stop a continuous-motion loop if reduction is preferred. Returns
    /// whether the gate applied.
    pub fn apply(&self, drift: &mut DriftLoop) -> bool {
        if self.reduced {
            drift.stop();
        }
        self.reduced
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_preference_stops_active_drift() {
        let mut drift = DriftLoop::new();
        drift.start();

        let pref = MotionPreference::new(true);
        assert!(pref.apply(&mut drift));
        assert!(!drift.is_running());
    }

    #[test]
    fn unreduced_preference_leaves_drift_alone() {
        let mut drift = DriftLoop::new();
        drift.start();

        let pref = MotionPreference::new(false);
        assert!(!pref.apply(&mut drift));
        assert!(drift.is_running());
    }
}
