//! Loading indicator - context-owned show/hide primitive
//!
//! Constructed by the composition root and passed down via context; any
//! component may signal loading, none of them owns a global.

use dioxus::prelude::*;

/// Shared visible/hidden state for the page-level spinner.
#[derive(Clone, Copy, PartialEq)]
pub struct LoadingState {
    visible: Signal<bool>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self { visible: Signal::new(false) }
    }

    pub fn show(mut self) {
        self.visible.set(true);
    }

    pub fn hide(mut self) {
        self.visible.set(false);
    }

    pub fn is_visible(&self) -> bool {
        *self.visible.read()
    }
}

#[component]
pub fn LoadingSpinner() -> Element {
    let state = use_context::<LoadingState>();
    if !state.is_visible() {
        return rsx! {};
    }

    rsx! {
        div {
            id: "loading-spinner",
            style: "position: fixed; inset: 0; display: flex; align-items: center; justify-content: center; background: rgba(26, 26, 26, 0.6); z-index: 2000;",
            div {
                class: "shimmer-effect",
                style: "width: 64px; height: 64px; border-radius: 50%; border: 4px solid rgba(255,255,255,0.2); border-top-color: #f5f0e8;",
            }
        }
    }
}
