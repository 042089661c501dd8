//! Nav shell - fixed navigation with scrolled styling around every page

use dioxus::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::Route;
use super::LoadingSpinner;

/// Layout wrapper: nav bar, routed page, shared spinner overlay.
#[component]
pub fn SiteShell() -> Element {
    rsx! {
        NavBar {}
        main {
            style: "padding-top: 72px; background: #1a1a1a; min-height: 100vh; color: #f5f0e8; font-family: Georgia, 'Times New Roman', serif;",
            Outlet::<Route> {}
        }
        LoadingSpinner {}
    }
}

#[component]
fn NavBar() -> Element {
    let mut scrolled = use_signal(|| false);

    // Installed once; the shell wraps every route so this never remounts.
    use_effect(move || {
        let Some(window) = web_sys::window() else { return };
        let callback = Closure::<dyn FnMut()>::new(move || {
            let top = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.document_element())
                .map(|e| e.scroll_top())
                .unwrap_or(0);
            scrolled.set(top > 50);
        });
        let _ = window
            .add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref());
        callback.forget();
    });

    let background = if scrolled() {
        "rgba(26, 26, 26, 0.98)"
    } else {
        "rgba(26, 26, 26, 0.95)"
    };

    let link_style = "color: #f5f0e8; text-decoration: none; padding: 8px 14px; font-size: 15px; letter-spacing: 1px;";

    rsx! {
        nav {
            style: "position: fixed; top: 0; left: 0; right: 0; z-index: 1000; display: flex; align-items: center; justify-content: space-between; padding: 14px 32px; background: {background}; backdrop-filter: blur(8px); transition: background 0.3s ease;",
            Link {
                to: Route::Home {},
                style: "color: #f5f0e8; text-decoration: none; font-size: 20px; letter-spacing: 2px;",
                "Vintage Moments"
            }
            div {
                style: "display: flex; gap: 4px;",
                Link { to: Route::Home {}, style: link_style, "Home" }
                Link { to: Route::Portfolio {}, style: link_style, "Portfolio" }
                Link { to: Route::Stories {}, style: link_style, "Stories" }
                Link { to: Route::Contact {}, style: link_style, "Contact" }
            }
        }
    }
}
