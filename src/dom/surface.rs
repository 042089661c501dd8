//! DomSurface - `Surface` over a real element
//!
//! Wraps an `Option<Element>` so a surface whose element never mounted is
//! a silent no-op, matching the missing-target error model.

use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};

use crate::anim::{Surface, VisualState};

pub struct DomSurface {
    element: Option<Element>,
}

impl DomSurface {
    pub fn new(element: Element) -> Self {
        Self { element: Some(element) }
    }

    /// Resolve by element id; a missing element yields a no-op surface.
    pub fn by_id(id: &str) -> Self {
        let element = super::element_by_id(id);
        if element.is_none() {
            log::debug!("surface target #{id} not found; effect becomes a no-op");
        }
        Self { element }
    }

    fn style_of(&self) -> Option<web_sys::CssStyleDeclaration> {
        self.element
            .as_ref()
            .and_then(|el| el.dyn_ref::<HtmlElement>())
            .map(|el| el.style())
    }
}

impl Surface for DomSurface {
    fn set_text(&mut self, text: &str) {
        if let Some(el) = &self.element {
            el.set_text_content(Some(text));
        }
    }

    fn set_transform(&mut self, css: &str) {
        if let Some(style) = self.style_of() {
            let _ = style.set_property("transform", css);
        }
    }

    fn set_visual_state(&mut self, state: VisualState) {
        let Some(style) = self.style_of() else { return };
        match state {
            VisualState::Caret => {
                let _ = style.set_property("border-right", "2px solid var(--off-white)");
            }
            VisualState::NoCaret => {
                let _ = style.set_property("border-right", "none");
            }
        }
    }
}
