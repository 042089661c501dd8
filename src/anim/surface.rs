//! Surface - the rendering seam between the animation core and the DOM
//!
//! Effects never touch elements directly; they write text, transforms and
//! visual states through this trait. The DOM implementation lives in
//! `crate::dom::surface`, tests use `RecordingSurface`.

/// Discrete visual states an effect can put a surface into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualState {
    /// Typing caret shown at the end of the text.
    Caret,
    /// Caret removed (typing finished or abandoned).
    NoCaret,
}

/// A mutable visual target. Exactly one effect may drive a surface at a time;
/// callers guarantee exclusivity.
pub trait Surface {
    fn set_text(&mut self, text: &str);
    fn set_transform(&mut self, css: &str);
    fn set_visual_state(&mut self, state: VisualState);
}

/// Test double that records every mutation in order.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub text: String,
    pub transform: String,
    pub states: Vec<VisualState>,
}

#[cfg(test)]
impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_state(&self) -> Option<VisualState> {
        self.states.last().copied()
    }
}

#[cfg(test)]
impl Surface for RecordingSurface {
    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
    }

    fn set_transform(&mut self, css: &str) {
        self.transform = css.to_string();
    }

    fn set_visual_state(&mut self, state: VisualState) {
        self.states.push(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_tracks_mutations() {
        let mut s = RecordingSurface::new();
        s.set_text("hello");
        s.set_transform("translate(1px, 2px)");
        s.set_visual_state(VisualState::Caret);
        s.set_visual_state(VisualState::NoCaret);

        assert_eq!(s.text, "hello");
        assert_eq!(s.transform, "translate(1px, 2px)");
        assert_eq!(s.states, vec![VisualState::Caret, VisualState::NoCaret]);
        assert_eq!(s.last_state(), Some(VisualState::NoCaret));
    }
}
