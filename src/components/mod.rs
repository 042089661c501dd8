//! Site components - nav shell, hero, gallery, stories, contact
//!
//! Pages compose the animation core with the DOM glue. All timer driving
//! happens here through `spawn` + `TimeoutFuture`, so every effect is
//! cancelled with its component scope.

mod contact;
mod gallery;
mod hero;
mod loading;
mod nav;
mod stories;

pub use contact::Contact;
pub use gallery::Portfolio;
pub use hero::Home;
pub use loading::{LoadingSpinner, LoadingState};
pub use nav::SiteShell;
pub use stories::Stories;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::anim::{typewriter, Tick, Typewriter};
use crate::dom::DomSurface;

/// Drive a typewriter job against the element with `target_id`. The one
/// shared implementation behind both call sites (hero headline, story
/// modal title).
///
/// Starting a job that is already running is a silent no-op; `stop` on
/// the signal halts the loop at its next tick. The loop keeps exactly one
/// pending timeout per job.
pub(crate) fn drive_typewriter(mut job: Signal<Typewriter>, target_id: String, start_delay_ms: u32) {
    spawn(async move {
        if start_delay_ms > 0 {
            TimeoutFuture::new(start_delay_ms).await;
        }
        let mut surface = DomSurface::by_id(&target_id);
        if !job.write().start(&mut surface) {
            return;
        }
        let speed = job.peek().speed_ms();
        loop {
            TimeoutFuture::new(speed).await;
            let tick = job.write().tick(&mut surface);
            match tick {
                Tick::Typed => {}
                Tick::Completed => {
                    TimeoutFuture::new(typewriter::CARET_GRACE_MS).await;
                    job.peek().retire(&mut surface);
                    break;
                }
                Tick::Inert => break,
            }
        }
    });
}
