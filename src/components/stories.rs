//! Stories page - staggered card grid, search, and a reading modal
//!
//! Cards reveal with a 150ms stagger as they scroll into view. Opening a
//! story types its title into the modal header; closing stops the job so
//! a half-typed title never leaks into the next open.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::anim::{StaggerSequencer, Typewriter};
use crate::data::stories::{self, Story};
use crate::dom::{self, ObserverHandle};
use super::drive_typewriter;

const STAGGER_STEP_MS: u32 = 150;
const CARD_THRESHOLD: f64 = 0.1;
const TITLE_SPEED_MS: u32 = 80;
const TITLE_START_DELAY_MS: u32 = 300;

fn card_id(story: &Story) -> String {
    format!("story-card-{}", story.id)
}

fn categories() -> Vec<&'static str> {
    let mut seen = Vec::new();
    for story in stories::STORIES {
        if !seen.contains(&story.category) {
            seen.push(story.category);
        }
    }
    seen
}

#[component]
pub fn Stories() -> Element {
    let mut query = use_signal(String::new);
    let mut category = use_signal(|| Option::<&'static str>::None);
    let mut revealed = use_signal(|| vec![false; stories::STORIES.len()]);
    let mut sequencer =
        use_signal(|| StaggerSequencer::new(stories::STORIES.len(), 0, STAGGER_STEP_MS));
    let mut observers = use_signal(Vec::<ObserverHandle>::new);
    let mut open_story = use_signal(|| Option::<u32>::None);
    let mut title_job = use_signal(|| Typewriter::new("", TITLE_SPEED_MS));

    let list = use_memo(move || stories::search(&query.read(), *category.read()));

    // Re-arm the reveal sequence whenever the visible set changes.
    use_effect(move || {
        let current = list.read().clone();
        revealed.set(vec![false; current.len()]);
        sequencer.set(StaggerSequencer::new(current.len(), 0, STAGGER_STEP_MS));
        let mut handles = Vec::with_capacity(current.len());
        for (i, story) in current.iter().enumerate() {
            let Some(element) = dom::element_by_id(&card_id(story)) else {
                continue;
            };
            let on_visible = move || {
                if let Some(delay) = sequencer.write().mark_visible(i) {
                    spawn(async move {
                        if delay > 0 {
                            TimeoutFuture::new(delay).await;
                        }
                        if let Some(flag) = revealed.write().get_mut(i) {
                            *flag = true;
                        }
                    });
                }
            };
            if let Some(handle) = dom::watch_once(&element, CARD_THRESHOLD, None, on_visible) {
                handles.push(handle);
            }
        }
        observers.set(handles);
    });

    let open = use_callback(move |id: u32| {
        let Some(story) = stories::story_by_id(id) else { return };
        open_story.set(Some(id));
        title_job.set(Typewriter::new(story.title, TITLE_SPEED_MS));
        drive_typewriter(title_job, "story-modal-title".to_string(), TITLE_START_DELAY_MS);
    });
    let close = use_callback(move |_: ()| {
        title_job.write().stop();
        open_story.set(None);
    });

    let shown = revealed.read().clone();
    let current = list.read().clone();
    let modal_story = open_story().and_then(stories::story_by_id);

    rsx! {
        section {
            style: "max-width: 1100px; margin: 0 auto; padding: 48px 24px;",
            h2 { style: "font-size: 32px; margin-bottom: 8px;", "Stories" }
            p {
                style: "color: #c9c2b6; margin-bottom: 24px;",
                "Notes from behind the lens."
            }

            div {
                style: "display: flex; gap: 12px; flex-wrap: wrap; margin-bottom: 40px;",
                input {
                    id: "story-search",
                    r#type: "search",
                    placeholder: "Search stories...",
                    value: "{query}",
                    style: "flex: 1; min-width: 220px; padding: 10px 14px; background: #242424; border: 1px solid #3a3a3a; color: #f5f0e8; font-family: inherit;",
                    oninput: move |e| query.set(e.value()),
                }
                select {
                    id: "story-category",
                    style: "padding: 10px 14px; background: #242424; border: 1px solid #3a3a3a; color: #f5f0e8; font-family: inherit;",
                    onchange: move |e| {
                        let value = e.value();
                        category.set(categories().into_iter().find(|c| *c == value));
                    },
                    option { value: "", "All categories" }
                    for cat in categories() {
                        option { value: "{cat}", selected: category() == Some(cat), "{cat}" }
                    }
                }
            }

            if current.is_empty() {
                p { style: "color: #8a8374;", "No stories match your search." }
            }

            div {
                id: "stories-container",
                style: "display: grid; grid-template-columns: repeat(auto-fill, minmax(300px, 1fr)); gap: 32px;",
                for (i, story) in current.iter().enumerate() {
                    StoryCard {
                        key: "{story.id}",
                        story: **story,
                        revealed: shown.get(i).copied().unwrap_or(false),
                        on_open: move |id| open(id),
                    }
                }
            }
        }

        if let Some(story) = modal_story {
            StoryModal { story: *story, on_close: move |_| close(()) }
        }
    }
}

#[component]
fn StoryCard(story: Story, revealed: bool, on_open: EventHandler<u32>) -> Element {
    let id = card_id(&story);
    let reveal = if revealed {
        "transition: all 0.6s ease-out; opacity: 1; transform: translateY(0);"
    } else {
        "opacity: 0; transform: translateY(30px);"
    };

    rsx! {
        article {
            id: "{id}",
            class: "story-card",
            style: "background: #242424; cursor: pointer; overflow: hidden; {reveal}",
            onclick: move |_| on_open(story.id),
            img {
                src: "{story.image}",
                alt: "{story.title}",
                loading: "lazy",
                style: "width: 100%; height: 200px; object-fit: cover; display: block; filter: sepia(0.3);",
            }
            div {
                style: "padding: 20px;",
                div {
                    style: "display: flex; justify-content: space-between; color: #8a8374; font-size: 13px; margin-bottom: 10px;",
                    span { "{story.category}" }
                    span { "{story.read_time}" }
                }
                h3 { style: "margin: 0 0 10px; font-size: 20px;", "{story.title}" }
                p {
                    style: "margin: 0; color: #c9c2b6; font-size: 14px; line-height: 1.6;",
                    "{story.excerpt}"
                }
                div {
                    style: "color: #8a8374; font-size: 13px; margin-top: 14px;",
                    "{story.date}"
                }
            }
        }
    }
}

#[component]
fn StoryModal(story: Story, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            id: "story-modal",
            tabindex: "0",
            autofocus: true,
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.85); display: flex; align-items: center; justify-content: center; z-index: 1500; outline: none; padding: 24px;",
            onclick: move |_| on_close(()),
            onkeydown: move |e| {
                if e.key() == Key::Escape {
                    on_close(());
                }
            },
            article {
                style: "background: #242424; color: #f5f0e8; max-width: 680px; width: 100%; max-height: 85vh; overflow-y: auto;",
                onclick: move |e| e.stop_propagation(),
                img {
                    src: "{story.image}",
                    alt: "{story.title}",
                    style: "width: 100%; height: 260px; object-fit: cover; display: block;",
                }
                div {
                    style: "padding: 28px;",
                    div {
                        style: "display: flex; gap: 16px; color: #8a8374; font-size: 13px; margin-bottom: 14px;",
                        span { "{story.date}" }
                        span { "{story.category}" }
                        span { "{story.read_time}" }
                    }
                    h2 {
                        id: "story-modal-title",
                        class: "typewriter-effect",
                        style: "margin: 0 0 18px; font-size: 26px; min-height: 1.3em; --off-white: #f5f0e8;",
                    }
                    p {
                        style: "margin: 0 0 20px; line-height: 1.8; color: #e0d9cc;",
                        "{story.content}"
                    }
                    div {
                        style: "display: flex; gap: 8px; flex-wrap: wrap;",
                        for tag in story.tags {
                            span {
                                style: "padding: 4px 12px; border: 1px solid #3a3a3a; border-radius: 12px; font-size: 12px; color: #8a8374;",
                                "#{tag}"
                            }
                        }
                    }
                    button {
                        style: "margin-top: 24px; padding: 8px 20px; background: none; border: 1px solid #f5f0e8; color: #f5f0e8; cursor: pointer; font-family: inherit;",
                        onclick: move |_| on_close(()),
                        "Close"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn categories_are_unique_and_ordered() {
        let cats = categories();
        assert_eq!(cats.len(), stories::STORIES.len());
        assert_eq!(cats[0], "Photography Tips");
        let mut dedup = cats.clone();
        dedup.dedup();
        assert_eq!(dedup, cats);
    }
}
