//! Edit a rejected (or still pending) cause and resubmit it for review.

use api::{edit_and_resubmit, ApiError, CauseUserUpdate, EditOutcome};
use dioxus::prelude::*;
use store::RouteAccess;
use ui::{push_notice, use_api, use_guard, use_notices, NoticeKind, StatusBadge};

use crate::Route;

const FIELD_STYLE: &str = "width: 100%; padding: 10px 12px; border: 1px solid #d8d4c8; \
                           border-radius: 6px; font-size: 1rem; box-sizing: border-box;";
const LABEL_STYLE: &str = "display: block; margin-bottom: 16px; color: #545454;";

#[component]
pub fn EditCause(id: i64) -> Element {
    if !use_guard(RouteAccess::Authenticated) {
        return rsx! {};
    }

    let api = use_api();
    let submit_api = use_api();
    let notices = use_notices();
    let nav = use_navigator();

    let cause = use_resource(move || {
        let api = api.clone();
        async move { api.get_cause(id).await }
    });

    let mut title = use_signal(String::new);
    let mut short_description = use_signal(String::new);
    let mut long_description = use_signal(String::new);
    let mut image_url = use_signal(String::new);
    let mut target = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Prefill the form once the cause arrives.
    use_effect(move || {
        if let Some(Ok(loaded)) = &*cause.read_unchecked() {
            title.set(loaded.title.clone());
            short_description.set(loaded.short_description.clone());
            long_description.set(loaded.long_description.clone());
            image_url.set(loaded.image_url.clone());
            target.set(loaded.target.to_string());
        }
    });

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
        let target_value: f64 = match target().trim().parse() {
            Ok(value) if value > 0.0 => value,
            _ => {
                error.set(Some("Target must be a positive number.".to_string()));
                return;
            }
        };
        error.set(None);
        submitting.set(true);

        let api = submit_api.clone();
        spawn(async move {
            let update = CauseUserUpdate {
                title: Some(title.peek().trim().to_string()),
                short_description: Some(short_description.peek().trim().to_string()),
                long_description: Some(long_description.peek().trim().to_string()),
                image_url: Some(image_url.peek().trim().to_string()),
                target: Some(target_value),
            };
            match edit_and_resubmit(&api, id, &update).await {
                Ok(EditOutcome::Resubmitted(_)) => {
                    push_notice(
                        notices,
                        NoticeKind::Info,
                        "Cause updated and resubmitted successfully",
                    );
                    nav.push(Route::Profile {});
                }
                Ok(EditOutcome::UpdatedNotResubmitted {
                    error: resubmit_error,
                    ..
                }) => {
                    push_notice(
                        notices,
                        NoticeKind::Error,
                        format!(
                            "Cause saved, but resubmission failed: {}",
                            resubmit_error.user_message()
                        ),
                    );
                    nav.push(Route::Profile {});
                }
                Err(ApiError::Status { detail, .. }) => error.set(Some(detail)),
                Err(_) => error.set(Some("Failed to update cause. Please try again.".to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            style: "max-width: 640px; margin: 0 auto; background: #ffffff; border-radius: 12px; \
                    padding: 32px; box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);",
            h1 { style: "margin-top: 0; color: #2d2d2d;", "Edit Cause" }

            match &*cause.read_unchecked() {
                None => rsx! {
                    p { "Loading cause..." }
                },
                Some(Err(_)) => rsx! {
                    p { style: "color: #9a2c22;", "Cause not found or failed to load." }
                },
                Some(Ok(loaded)) => rsx! {
                    div {
                        style: "display: flex; align-items: center; gap: 8px; margin-bottom: 16px;",
                        StatusBadge { status: loaded.status }
                        if let Some(notes) = loaded.review_notes.clone() {
                            span { style: "color: #9a2c22;", "Reviewer notes: {notes}" }
                        }
                    }
                    p { style: "color: #545454;",
                        "Saving will resubmit this cause for review."
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
                            if submitting() { "Saving..." } else { "Save and resubmit" }
                        }
                    }
                },
            }
        }
    }
}
