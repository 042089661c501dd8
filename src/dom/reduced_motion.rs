//! Reduced-motion preference, read from matchMedia
//!
//! One-time read at startup; `crate::anim::reduced` holds the gate itself.

use crate::anim::MotionPreference;

/// Sample `prefers-reduced-motion` once. Any platform failure reads as
/// "not reduced".
pub fn read_preference() -> MotionPreference {
    let reduced = web_sys::window()
        .and_then(|w| w.match_media("(prefers-reduced-motion: reduce)").ok())
        .flatten()
        .map(|mql| mql.matches())
        .unwrap_or(false);
    MotionPreference::new(reduced)
}

/// Mark the document so stylesheet rules can flatten animations.
pub fn mark_document_reduced() {
    if let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.class_list().add_1("reduce-motion");
        log::debug!("reduced motion preference active");
    }
}
