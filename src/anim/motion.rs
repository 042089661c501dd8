//! Drift motion - continuous floating offsets for polaroid frames
//!
//! Each frame is a pure function of wall-clock time and the element's
//! index, with no stored velocity. Stopping and restarting the loop can
//! never cause a jump: the position for a given instant is always the
//! same whether or not the loop ran in between.

use super::surface::Surface;

/// Phase separation between adjacent elements, in radians.
const PHASE_STEP: f64 = 0.5;
const X_AMPLITUDE: f64 = 5.0;
const Y_AMPLITUDE: f64 = 3.0;
const TILT_AMPLITUDE: f64 = 2.0;

/// Positional offsets for one element at one instant. Ephemeral; computed
/// per tick and never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionFrame {
    pub x: f64,
    pub y: f64,
    pub rotation: f64,
}

impl MotionFrame {
    /// Sample the drift at `t_seconds` (wall clock) for the element at
    /// `index`.
    pub fn at(t_seconds: f64, index: usize) -> Self {
        let phase = index as f64 * PHASE_STEP;
        Self {
            x: (t_seconds + phase).sin() * X_AMPLITUDE,
            y: (t_seconds + phase).cos() * Y_AMPLITUDE,
            rotation: (t_seconds + phase).sin() * TILT_AMPLITUDE,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "translate({:.2}px, {:.2}px) rotate({:.2}deg)",
            self.x, self.y, self.rotation
        )
    }
}

/// The per-frame loop over a set of surfaces. Holds only the running flag;
/// the driver owns the timer and the current time.
#[derive(Debug, Default)]
pub struct DriftLoop {
    running: bool,
}

impl DriftLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Idempotent; starting a running loop changes nothing.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Idempotent; safe before `start` and after the driver has wound down.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Write the transform for each surface at `t_seconds`. No-op while
    /// stopped, so a stray tick after `stop` does nothing.
    pub fn apply<S: Surface>(&self, t_seconds: f64, surfaces: &mut [S]) {
        if !self.running {
            return;
        }
        for (i, surface) in surfaces.iter_mut().enumerate() {
            surface.set_transform(&MotionFrame::at(t_seconds, i).to_css());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anim::surface::RecordingSurface;

    #[test]
    fn frame_is_pure_in_time_and_index() {
        let a = MotionFrame::at(12.5, 3);
        let b = MotionFrame::at(12.5, 3);
        assert_eq!(a, b);

        let phase = 3.0 * PHASE_STEP;
        assert!((a.x - (12.5f64 + phase).sin() * 5.0).abs() < 1e-9);
        assert!((a.y - (12.5f64 + phase).cos() * 3.0).abs() < 1e-9);
        assert!((a.rotation - (12.5f64 + phase).sin() * 2.0).abs() < 1e-9);
    }

    #[test]
    fn adjacent_indices_are_out_of_phase() {
        let a = MotionFrame::at(1.0, 0);
        let b = MotionFrame::at(1.0, 1);
        assert_ne!(a, b);
        // Index i at time t equals index i+1 at time t - PHASE_STEP.
        let shifted = MotionFrame::at(1.0 - PHASE_STEP, 1);
        assert!((a.x - shifted.x).abs() < 1e-9);
        assert!((a.y - shifted.y).abs() < 1e-9);
    }

    #[test]
    fn frame_css_shape() {
        let css = MotionFrame { x: 1.0, y: -2.5, rotation: 0.75 }.to_css();
        assert_eq!(css, "translate(1.00px, -2.50px) rotate(0.75deg)");
    }

    #[test]
    fn stop_then_start_resumes_without_residual_state() {
        let mut surfaces = vec![RecordingSurface::new()];
        let mut drift = DriftLoop::new();

        drift.start();
        drift.apply(10.0, &mut surfaces);
        let before = surfaces[0].transform.clone();

        drift.stop();
        drift.start();
        drift.apply(10.0, &mut surfaces);
        // Same instant, same transform: no velocity carried across restarts.
        assert_eq!(surfaces[0].transform, before);
    }

    #[test]
    fn apply_is_inert_while_stopped() {
        let mut surfaces = vec![RecordingSurface::new()];
        let drift = DriftLoop::new();
        drift.apply(5.0, &mut surfaces);
        assert!(surfaces[0].transform.is_empty());
    }

    #[test]
    fn start_and_stop_are_idempotent() {
        let mut drift = DriftLoop::new();
        drift.stop();
        assert!(!drift.is_running());
        drift.start();
        drift.start();
        assert!(drift.is_running());
        drift.stop();
        drift.stop();
        assert!(!drift.is_running());
    }
}
