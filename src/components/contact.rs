//! Contact page - validated form with WhatsApp handoff and draft parking
//!
//! Fields validate on blur and clear their error on the next keystroke.
//! The in-progress draft is debounced into local storage so a reload does
//! not lose it; a successful send clears the parked draft when the
//! confirmation is dismissed.

use std::collections::HashMap;

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::contact::{self, Field, Submission};
use super::LoadingState;

const DRAFT_KEY: &str = "vintage_contact_form";
const DRAFT_DEBOUNCE_MS: u32 = 1000;
const SUBMIT_DELAY_MS: u32 = 1500;
const COUNTER_WARN_AT: isize = 50;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_draft() -> Option<Submission> {
    let raw = storage()?.get_item(DRAFT_KEY).ok().flatten()?;
    serde_json::from_str(&raw).ok()
}

fn save_draft(draft: &Submission) {
    let Some(storage) = storage() else { return };
    if let Ok(json) = serde_json::to_string(draft) {
        let _ = storage.set_item(DRAFT_KEY, &json);
    }
}

fn clear_draft() {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(DRAFT_KEY);
    }
}

const INPUT_STYLE: &str = "width: 100%; padding: 12px 14px; background: #242424; border: 1px solid #3a3a3a; color: #f5f0e8; font-family: inherit; font-size: 15px; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 6px; font-size: 14px; letter-spacing: 1px; color: #c9c2b6;";
const ERROR_STYLE: &str = "display: block; margin-top: 6px; font-size: 13px; color: #c0645e;";

#[component]
pub fn Contact() -> Element {
    let restored = use_hook(load_draft);
    let mut form = use_signal(move || restored.clone().unwrap_or_default());
    let mut errors = use_signal(HashMap::<Field, &'static str>::new);
    let mut submitting = use_signal(|| false);
    let mut success = use_signal(|| Option::<String>::None);
    let mut save_gen = use_signal(|| 0u32);
    let loading = use_context::<LoadingState>();

    let schedule_save = use_callback(move |_: ()| {
        let generation = save_gen.peek().wrapping_add(1);
        save_gen.set(generation);
        spawn(async move {
            TimeoutFuture::new(DRAFT_DEBOUNCE_MS).await;
            if *save_gen.peek() == generation {
                save_draft(&form.peek());
            }
        });
    });

    let edit = use_callback(move |(field, value): (Field, String)| {
        {
            let mut draft = form.write();
            match field {
                Field::Name => draft.name = value,
                Field::Email => draft.email = value,
                Field::Phone => draft.phone = contact::format_phone(&value),
                Field::Message => draft.message = value,
            }
        }
        if errors.peek().contains_key(&field) {
            errors.write().remove(&field);
        }
        schedule_save(());
    });

    let check = use_callback(move |field: Field| {
        match contact::validate(field, form.peek().field(field)) {
            Ok(()) => {
                errors.write().remove(&field);
            }
            Err(msg) => {
                errors.write().insert(field, msg);
            }
        }
    });

    let submit = use_callback(move |_: ()| {
        if *submitting.peek() {
            return;
        }
        let failures = contact::validate_all(&form.peek());
        if !failures.is_empty() {
            errors.set(failures.into_iter().collect());
            return;
        }
        submitting.set(true);
        loading.show();
        spawn(async move {
            TimeoutFuture::new(SUBMIT_DELAY_MS).await;
            let submission = form.peek().clone();
            let url = contact::whatsapp_url(
                contact::WHATSAPP_NUMBER,
                &contact::whatsapp_message(&submission),
            );
            loading.hide();
            submitting.set(false);
            success.set(Some(url));
            form.set(Submission::default());
            errors.set(HashMap::new());
        });
    });

    let draft = form.read().clone();
    let errs = errors.read().clone();
    let remaining = contact::characters_remaining(&draft.message);
    let counter_color = if remaining < COUNTER_WARN_AT { "#c0645e" } else { "#8a8374" };

    rsx! {
        section {
            style: "max-width: 640px; margin: 0 auto; padding: 48px 24px;",
            h2 { style: "font-size: 32px; margin-bottom: 8px;", "Get in Touch" }
            p {
                style: "color: #c9c2b6; margin-bottom: 32px;",
                "Tell us about your session and we'll continue the conversation on WhatsApp."
            }

            form {
                id: "contact-form",
                novalidate: true,
                onsubmit: move |e| {
                    e.prevent_default();
                    submit(());
                },

                div {
                    style: "margin-bottom: 20px;",
                    label { r#for: "contact-name", style: LABEL_STYLE, "Name" }
                    input {
                        id: "contact-name",
                        name: "name",
                        r#type: "text",
                        value: "{draft.name}",
                        style: INPUT_STYLE,
                        oninput: move |e| edit((Field::Name, e.value())),
                        onfocusout: move |_| check(Field::Name),
                    }
                    if let Some(msg) = errs.get(&Field::Name) {
                        span { style: ERROR_STYLE, "{msg}" }
                    }
                }

                div {
                    style: "margin-bottom: 20px;",
                    label { r#for: "contact-email", style: LABEL_STYLE, "Email" }
                    input {
                        id: "contact-email",
                        name: "email",
                        r#type: "email",
                        value: "{draft.email}",
                        style: INPUT_STYLE,
                        oninput: move |e| edit((Field::Email, e.value())),
                        onfocusout: move |_| check(Field::Email),
                    }
                    if let Some(msg) = errs.get(&Field::Email) {
                        span { style: ERROR_STYLE, "{msg}" }
                    }
                }

                div {
                    style: "margin-bottom: 20px;",
                    label { r#for: "contact-phone", style: LABEL_STYLE, "Phone" }
                    input {
                        id: "contact-phone",
                        name: "phone",
                        r#type: "tel",
                        placeholder: "XXX-XXX-XXXX",
                        value: "{draft.phone}",
                        style: INPUT_STYLE,
                        oninput: move |e| edit((Field::Phone, e.value())),
                        onfocusout: move |_| check(Field::Phone),
                    }
                    if let Some(msg) = errs.get(&Field::Phone) {
                        span { style: ERROR_STYLE, "{msg}" }
                    }
                }

                div {
                    style: "margin-bottom: 28px;",
                    label { r#for: "contact-message", style: LABEL_STYLE, "Message" }
                    textarea {
                        id: "contact-message",
                        name: "message",
                        rows: "6",
                        value: "{draft.message}",
                        style: "{INPUT_STYLE} resize: vertical;",
                        oninput: move |e| edit((Field::Message, e.value())),
                        onfocusout: move |_| check(Field::Message),
                    }
                    div {
                        style: "display: flex; justify-content: space-between; margin-top: 6px;",
                        if let Some(msg) = errs.get(&Field::Message) {
                            span { style: "font-size: 13px; color: #c0645e;", "{msg}" }
                        } else {
                            span {}
                        }
                        span {
                            id: "char-counter",
                            style: "font-size: 13px; color: {counter_color};",
                            "{remaining} characters remaining"
                        }
                    }
                }

                button {
                    r#type: "submit",
                    disabled: submitting(),
                    style: "width: 100%; padding: 14px; background: #f5f0e8; color: #1a1a1a; border: none; cursor: pointer; font-family: inherit; font-size: 16px; letter-spacing: 1px;",
                    if submitting() { "Sending..." } else { "Send via WhatsApp" }
                }
            }
        }

        if let Some(url) = success() {
            SuccessModal {
                url,
                on_close: move |_| {
                    success.set(None);
                    clear_draft();
                },
            }
        }
    }
}

#[component]
fn SuccessModal(url: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            id: "success-modal",
            style: "position: fixed; inset: 0; background: rgba(0,0,0,0.85); display: flex; align-items: center; justify-content: center; z-index: 1500; padding: 24px;",
            onclick: move |_| on_close(()),
            div {
                style: "background: #242424; color: #f5f0e8; padding: 36px; max-width: 440px; text-align: center;",
                onclick: move |e| e.stop_propagation(),
                h3 { style: "margin: 0 0 12px;", "Message ready!" }
                p {
                    style: "color: #c9c2b6; margin: 0 0 24px; line-height: 1.6;",
                    "Your details are prepared. Open WhatsApp to send them to the studio."
                }
                a {
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener",
                    style: "display: inline-block; padding: 12px 28px; background: #f5f0e8; color: #1a1a1a; text-decoration: none; letter-spacing: 1px;",
                    "Open WhatsApp"
                }
                div {
                    button {
                        style: "margin-top: 20px; background: none; border: none; color: #8a8374; cursor: pointer; font-family: inherit; font-size: 14px;",
                        onclick: move |_| on_close(()),
                        "Close"
                    }
                }
            }
        }
    }
}
