//! Vintage Moments - studio site entry point
//!
//! Routes are wrapped by `SiteShell`; the composition root owns the shared
//! loading state, the timing registry and the motion preference, and hands
//! them down via context.

mod anim;
mod components;
mod contact;
mod data;
mod dom;
mod metrics;

use dioxus::prelude::*;

use components::{Contact, Home, LoadingState, Portfolio, SiteShell, Stories};
use metrics::TimingRegistry;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[layout(SiteShell)]
    #[route("/")]
    Home {},
    #[route("/portfolio")]
    Portfolio {},
    #[route("/stories")]
    Stories {},
    #[route("/contact")]
    Contact {},
}

#[allow(non_snake_case)]
fn App() -> Element {
    use_context_provider(LoadingState::new);
    use_context_provider(|| Signal::new(TimingRegistry::new()));
    use_context_provider(|| {
        let preference = dom::reduced_motion::read_preference();
        if preference.is_reduced() {
            dom::reduced_motion::mark_document_reduced();
        }
        preference
    });

    use_effect(|| {
        dom::styles::install_once();
    });

    rsx! {
        Router::<Route> {}
    }
}

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    dioxus::launch(App);
}
