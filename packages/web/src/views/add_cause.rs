//! Submit a new cause for review.

use api::{ApiError, CauseCreate};
use dioxus::prelude::*;
use store::RouteAccess;
use ui::{push_notice, use_api, use_guard, use_notices, NoticeKind};

use crate::Route;

const FIELD_STYLE: &str = "width: 100%; padding: 10px 12px; border: 1px solid #d8d4c8; \
                           border-radius: 6px; font-size: 1rem; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 16px; color: #545454;";

fn parse_target(raw: &str) -> Result<f64, &'static str> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "Target must be a number.")?;
    if value <= 0.0 {
        return Err("Target must be greater than zero.");
    }
    Ok(value)
}

#[component]
pub fn AddCause() -> Element {
    if !use_guard(RouteAccess::Authenticated) {
        return rsx! {};
    }

    let api = use_api();
    let notices = use_notices();
    let nav = use_navigator();

    let mut title = use_signal(String::new);
    let mut short_description = use_signal(String::new);
    let mut long_description = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut target = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        if title().trim().is_empty()
            || short_description().trim().is_empty()
            || long_description().trim().is_empty()
            || image_url().trim().is_empty()
        {
            error.set(Some("All fields are required.".to_string()));
            return;
        }
        let target_value = match parse_target(&target()) {
            Ok(value) => value,
            Err(message) => {
                error.set(Some(message.to_string()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);

        let api = api.clone();
        spawn(async move {
            let data = CauseCreate {
                title: title.peek().trim().to_string(),
                short_description: short_description.peek().trim().to_string(),
                long_description: long_description.peek().trim().to_string(),
                image_url: image_url.peek().trim().to_string(),
                target: target_value,
            };
            match api.create_cause(&data).await {
                Ok(_) => {
                    push_notice(notices, NoticeKind::Info, "Cause submitted for review!");
                    nav.push(Route::Profile {});
                }
                Err(ApiError::Status { detail, .. }) => error.set(Some(detail)),
                Err(_) => error.set(Some("Failed to submit cause. Please try again.".to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            style: "max-width: 640px; margin: 0 auto; background: #ffffff; border-radius: 12px; \
                    padding: 32px; box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);",
            h1 { style: "margin-top: 0; color: #2d2d2d;", "Add a Cause" }
            p { style: "color: #545454;",
                "New causes are reviewed by an administrator before they appear publicly."
            }
            if let Some(message) = error() {
                p {
                    style: "background: #fbe9e7; color: #9a2c22; border-radius: 6px; padding: 10px 12px;",
                    "{message}"
                }
            }
            form {
                onsubmit,
                label {
                    style: LABEL_STYLE,
                    "Title"
                    input {
                        style: FIELD_STYLE,
                        value: "{title}",
                        oninput: move |evt| title.set(evt.value()),
                    }
                }
                label {
                    style: LABEL_STYLE,
                    "Short description"
                    input {
                        style: FIELD_STYLE,
                        value: "{short_description}",
                        oninput: move |evt| short_description.set(evt.value()),
                    }
                }
                label {
                    style: LABEL_STYLE,
                    "Full description"
                    textarea {
                        style: FIELD_STYLE,
                        rows: 6,
                        value: "{long_description}",
                        oninput: move |evt| long_description.set(evt.value()),
                    }
                }
                label {
                    style: LABEL_STYLE,
                    "Image URL"
                    input {
                        style: FIELD_STYLE,
                        r#type: "url",
                        value: "{image_url}",
                        oninput: move |evt| image_url.set(evt.value()),
                    }
                }
                label {
                    style: LABEL_STYLE,
                    "Target amount (USD)"
                    input {
                        style: FIELD_STYLE,
                        r#type: "number",
                        min: 1,
                        step: "any",
                        value: "{target}",
                        oninput: move |evt| target.set(evt.value()),
                    }
                }
                button {
                    style: "width: 100%; padding: 12px; border: none; border-radius: 6px; \
                            background: #1a1406; color: #ffffff; font-weight: 700; cursor: pointer;",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Submitting..." } else { "Submit for review" }
                }
            }
        }
    }
}
