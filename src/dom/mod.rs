//! Browser glue - everything that touches web-sys lives here
//!
//! Per the error model, a missing element or absent platform capability
//! degrades to a no-op or an immediate-apply fallback; nothing in this
//! module panics or propagates errors to callers.

pub mod observer;
pub mod reduced_motion;
pub mod styles;
pub mod surface;

pub use observer::{watch_continuous, watch_once, ObserverHandle};
pub use surface::DomSurface;

/// Look up an element; `None` short-circuits the effect that wanted it.
pub fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Wall-clock seconds, the time base for drift motion.
pub fn now_seconds() -> f64 {
    js_sys::Date::now() / 1000.0
}

/// Wall-clock milliseconds, the time base for the timing registry.
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
