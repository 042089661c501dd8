//! IntersectionObserver wrappers
//!
//! The observer is configured with the caller's threshold, so the browser
//! decides when a crossing happens; the pure trackers in
//! `crate::anim::visibility` then enforce once-only and enter/exit
//! bookkeeping. Without IntersectionObserver support the effect is applied
//! immediately as the degraded fallback.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::anim::{ContinuousVisibility, Crossing, OneShotVisibility};

/// Keeps the observer and its callback alive; disconnects on drop.
pub struct ObserverHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

pub fn supports_intersection_observer() -> bool {
    web_sys::window()
        .map(|w| js_sys::Reflect::has(&w, &JsValue::from_str("IntersectionObserver")).unwrap_or(false))
        .unwrap_or(false)
}

fn make_observer(
    callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
    threshold: f64,
    root_margin: Option<&str>,
    target: &Element,
) -> Option<ObserverHandle> {
    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        init.set_root_margin(margin);
    }
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
    observer.observe(target);
    Some(ObserverHandle { observer, _callback: callback })
}

/// Fire `on_visible` the first time `element` reaches `threshold`
/// visibility, then disengage. Returns `None` when the fallback already
/// ran (no observer support or construction failure).
pub fn watch_once(
    element: &Element,
    threshold: f64,
    root_margin: Option<&str>,
    mut on_visible: impl FnMut() + 'static,
) -> Option<ObserverHandle> {
    if !supports_intersection_observer() {
        log::warn!("IntersectionObserver unavailable; applying effect immediately");
        on_visible();
        return None;
    }

    let mut tracker = OneShotVisibility::new(threshold);
    let callback = Closure::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            // The observer already applied the threshold; collapse to a
            // binary ratio for the tracker.
            let ratio = if entry.is_intersecting() { 1.0 } else { 0.0 };
            if tracker.observe(ratio) {
                observer.unobserve(&entry.target());
                observer.disconnect();
                on_visible();
            }
        }
    });

    let handle = make_observer(callback, threshold, root_margin, element);
    if handle.is_none() {
        log::warn!("IntersectionObserver construction failed; applying effect immediately");
    }
    handle
}

/// Report every enter/exit transition of `element` across `threshold`,
/// unbounded. Without observer support, `on_enter` runs once immediately.
pub fn watch_continuous(
    element: &Element,
    threshold: f64,
    mut on_enter: impl FnMut() + 'static,
    mut on_exit: impl FnMut() + 'static,
) -> Option<ObserverHandle> {
    if !supports_intersection_observer() {
        log::warn!("IntersectionObserver unavailable; treating element as always visible");
        on_enter();
        return None;
    }

    let mut tracker = ContinuousVisibility::new(threshold);
    let callback = Closure::new(move |entries: js_sys::Array, _observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let ratio = if entry.is_intersecting() { 1.0 } else { 0.0 };
            match tracker.observe(ratio) {
                Some(Crossing::Entered) => on_enter(),
                Some(Crossing::Exited) => on_exit(),
                None => {}
            }
        }
    });

    make_observer(callback, threshold, None, element)
}
