//! Home page - hero section with drifting polaroids and typed headline
//!
//! The drift loop only runs while the hero is on screen (continuous
//! visibility trigger, threshold 0.1) and never runs at all under a
//! reduced-motion preference. The headline types itself the first time
//! half of it is visible.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::anim::{DriftLoop, MotionPreference, Typewriter};
use crate::data::portfolio::PORTFOLIO;
use crate::dom::{self, DomSurface, ObserverHandle};
use super::drive_typewriter;

const HEADLINE: &str = "Capturing timeless moments, one frame at a time";
const HEADLINE_SPEED_MS: u32 = 100;
/// Frame cadence for the drift loop.
const DRIFT_TICK_MS: u32 = 16;
const POLAROID_COUNT: usize = 3;
/// Ambient floating particles: (left offset %, animation delay s).
const PARTICLES: &[(u32, f32)] = &[(8, 0.0), (22, 1.2), (41, 0.6), (58, 2.1), (76, 0.3), (91, 1.7)];

fn polaroid_id(index: usize) -> String {
    format!("hero-polaroid-{index}")
}

#[component]
pub fn Home() -> Element {
    let mut drift = use_signal(DriftLoop::new);
    let headline_job = use_signal(|| Typewriter::new(HEADLINE, HEADLINE_SPEED_MS));
    let mut observers = use_signal(Vec::<ObserverHandle>::new);
    let preference = use_context::<MotionPreference>();

    // Wire triggers once the section is in the DOM.
    use_effect(move || {
        if let Some(headline) = dom::element_by_id("hero-headline") {
            let handle = dom::watch_once(&headline, 0.5, None, move || {
                drive_typewriter(headline_job, "hero-headline".to_string(), 0);
            });
            if let Some(handle) = handle {
                observers.write().push(handle);
            }
        }

        if let Some(section) = dom::element_by_id("hero-section") {
            let on_enter = move || {
                if !preference.is_reduced() {
                    drift.write().start();
                }
            };
            let on_exit = move || drift.write().stop();
            if let Some(handle) = dom::watch_continuous(&section, 0.1, on_enter, on_exit) {
                observers.write().push(handle);
            }
        }

        preference.apply(&mut drift.write());
    });

    // Drift driver: one pending tick while running, pure time-based frames.
    use_hook(move || {
        spawn(async move {
            TimeoutFuture::new(DRIFT_TICK_MS).await;
            let mut surfaces: Vec<DomSurface> =
                (0..POLAROID_COUNT).map(|i| DomSurface::by_id(&polaroid_id(i))).collect();
            loop {
                TimeoutFuture::new(DRIFT_TICK_MS).await;
                let state = drift.peek();
                if state.is_running() {
                    state.apply(dom::now_seconds(), &mut surfaces);
                }
            }
        });
    });

    let featured = PORTFOLIO
        .iter()
        .filter(|item| item.featured)
        .take(POLAROID_COUNT)
        .enumerate()
        .map(|(i, item)| (polaroid_id(i), item))
        .collect::<Vec<_>>();

    rsx! {
        section {
            id: "hero-section",
            style: "position: relative; overflow: hidden; display: flex; flex-direction: column; align-items: center; gap: 48px; padding: 96px 24px; min-height: 90vh;",
            for (left, delay) in PARTICLES.iter().copied() {
                span {
                    class: "particle",
                    style: "position: absolute; bottom: -10px; left: {left}%; width: 4px; height: 4px; border-radius: 50%; background: rgba(245, 240, 232, 0.5); animation-delay: {delay}s; pointer-events: none;",
                }
            }
            h1 {
                id: "hero-headline",
                class: "typewriter-effect",
                style: "font-size: 40px; text-align: center; max-width: 760px; min-height: 1.4em; --off-white: #f5f0e8;",
                "{HEADLINE}"
            }
            div {
                style: "display: flex; gap: 40px; flex-wrap: wrap; justify-content: center;",
                for (frame_id, item) in featured {
                    div {
                        id: "{frame_id}",
                        class: "polaroid-frame",
                        style: "background: #f5f0e8; padding: 12px 12px 48px; box-shadow: 0 8px 24px rgba(0,0,0,0.4); will-change: transform;",
                        img {
                            src: "{item.image}",
                            alt: "{item.title}",
                            style: "width: 220px; height: 260px; object-fit: cover; display: block;",
                        }
                        div {
                            style: "color: #1a1a1a; text-align: center; padding-top: 10px; font-size: 14px;",
                            "{item.title}"
                        }
                    }
                }
            }
            p {
                style: "max-width: 560px; text-align: center; color: #c9c2b6; line-height: 1.7;",
                "Wedding, portrait and editorial photography with a vintage heart. "
                "Browse the portfolio, read the stories behind the shots, or get in touch to book a session."
            }
        }
    }
}
