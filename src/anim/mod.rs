//! Animation core - visibility triggers, typewriter, drift motion, stagger
//!
//! Every effect here is an explicit state machine driven by external ticks,
//! so the whole module runs under plain `cargo test` with injected time and
//! a recording surface. The browser glue in `crate::dom` owns the actual
//! timers and elements.

pub mod motion;
pub mod reduced;
pub mod stagger;
pub mod surface;
pub mod typewriter;
pub mod visibility;

pub use motion::{DriftLoop, MotionFrame};
pub use reduced::MotionPreference;
pub use stagger::StaggerSequencer;
pub use surface::{Surface, VisualState};
pub use typewriter::{Tick, Typewriter};
pub use visibility::{ContinuousVisibility, Crossing, OneShotVisibility};
