//! Visibility - threshold-crossing trackers behind the observer glue
//!
//! The DOM layer feeds intersection ratios in; these types decide whether
//! a callback is due. One-shot triggers disengage after firing, the
//! continuous variant reports every enter/exit transition so drift loops
//! can pause while off-screen.

/// A transition across the visibility threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Crossing {
    Entered,
    Exited,
}

/// Fires exactly once, the first time the visible fraction reaches the
/// threshold.
#[derive(Debug)]
pub struct OneShotVisibility {
    threshold: f64,
    fired: bool,
}

impl OneShotVisibility {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, fired: false }
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    /// Returns true exactly once, when `ratio` first reaches the threshold.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.fired || ratio < self.threshold {
            return false;
        }
        self.fired = true;
        true
    }
}

/// Reports every transition into and out of visibility; repeats unbounded.
#[derive(Debug)]
pub struct ContinuousVisibility {
    threshold: f64,
    visible: bool,
}

impl ContinuousVisibility {
    pub fn new(threshold: f64) -> Self {
        Self { threshold, visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn observe(&mut self, ratio: f64) -> Option<Crossing> {
        let now_visible = ratio >= self.threshold;
        if now_visible == self.visible {
            return None;
        }
        self.visible = now_visible;
        Some(if now_visible {
            Crossing::Entered
        } else {
            Crossing::Exited
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_shot_fires_once_then_disengages() {
        let mut v = OneShotVisibility::new(0.5);
        assert!(!v.observe(0.2));
        assert!(v.observe(0.6));
        assert!(v.has_fired());
        assert!(!v.observe(0.9));
        assert!(!v.observe(0.0));
    }

    #[test]
    fn one_shot_fires_at_exact_threshold() {
        let mut v = OneShotVisibility::new(0.1);
        assert!(v.observe(0.1));
    }

    #[test]
    fn continuous_reports_each_transition() {
        let mut v = ContinuousVisibility::new(0.1);
        assert_eq!(v.observe(0.5), Some(Crossing::Entered));
        assert_eq!(v.observe(0.8), None);
        assert_eq!(v.observe(0.05), Some(Crossing::Exited));
        assert_eq!(v.observe(0.0), None);
        assert_eq!(v.observe(0.2), Some(Crossing::Entered));
    }

    #[test]
    fn continuous_starts_hidden() {
        let mut v = ContinuousVisibility::new(0.1);
        assert!(!v.is_visible());
        assert_eq!(v.observe(0.0), None);
    }
}
