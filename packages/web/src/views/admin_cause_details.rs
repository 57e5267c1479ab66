//! Admin detail view for a single cause: review actions, status/phase
//! edits, and the timeline with an append form.

use api::{CauseAdminUpdate, CauseStatus, TimelineEventCreate};
use dioxus::prelude::*;
use store::RouteAccess;
use ui::{format_usd, push_notice, use_api, use_guard, use_notices, NoticeKind, StatusBadge};

const FIELD_STYLE: &str = "width: 100%; padding: 8px 12px; border: 1px solid #d8d4c8; \
                           border-radius: 6px; box-sizing: border-box;";

#[component]
pub fn AdminCauseDetails(id: i64) -> Element {
    if !use_guard(RouteAccess::AdminOnly) {
        return rsx! {};
    }

    let api = use_api();
    let timeline_api = use_api();

    let mut cause = use_resource(move || {
        let api = api.clone();
        async move { api.get_cause(id).await }
    });
    let mut timeline = use_resource(move || {
        let api = timeline_api.clone();
        async move { api.get_timeline(id).await }
    });

    // Any admin action touches the cause and usually appends an event, so
    // both views are refetched together.
    let on_changed = move |_| {
        cause.restart();
        timeline.restart();
    };

    rsx! {
        match &*cause.read_unchecked() {
            None => rsx! {
                p { "Loading cause..." }
            },
            Some(Err(err)) => rsx! {
                p { style: "color: #9a2c22;", "Failed to load cause: {err.user_message()}" }
            },
            Some(Ok(loaded)) => {
                let loaded = loaded.clone();
                rsx! {
                    div {
                        style: "display: flex; align-items: center; gap: 12px;",
                        h1 { style: "margin: 0; color: #2d2d2d;", "{loaded.title}" }
                        StatusBadge { status: loaded.status }
                    }
                    p { style: "color: #545454;", "{loaded.short_description}" }
                    p { style: "color: #2d2d2d;",
                        "Raised {format_usd(loaded.raised)} of {format_usd(loaded.target)}"
                    }
                    if let Some(owner) = loaded.owner_email.clone() {
                        p { style: "color: #8a8a8a;", "Owner: {owner}" }
                    }
                    if let Some(notes) = loaded.review_notes.clone() {
                        p { style: "color: #9a2c22;", "Review notes: {notes}" }
                    }

                    if loaded.status.can_review() {
                        ReviewActions { id, on_changed }
                    }

                    AdminEdit {
                        id,
                        current: loaded.status,
                        phase: loaded.phase.clone(),
                        on_changed,
                    }
                }
            }
        }

        section {
            style: "margin-top: 40px;",
            h2 { style: "color: #2d2d2d;", "Timeline" }
            AppendEvent { id, on_changed }
            match &*timeline.read_unchecked() {
                None => rsx! {
                    p { "Loading timeline..." }
                },
                Some(Err(err)) => rsx! {
                    p { style: "color: #9a2c22;", "Failed to load timeline: {err.user_message()}" }
                },
                Some(Ok(events)) if events.is_empty() => rsx! {
                    p { style: "color: #545454;", "No events yet." }
                },
                Some(Ok(events)) => rsx! {
                    ul {
                        style: "list-style: none; padding: 0; display: flex; flex-direction: column; gap: 12px;",
                        for event in events.iter().cloned() {
                            li {
                                style: "border-left: 3px solid #c99b2e; padding: 4px 12px;",
                                div {
                                    style: "font-size: 0.8125rem; color: #8a8a8a;",
                                    "{event.created_at} · {event.event_type}"
                                }
                                div { style: "color: #2d2d2d;", "{event.message}" }
                            }
                        }
                    }
                },
            }
        }
    }
}

/// Approve/reject buttons shown while the cause is pending review.
#[component]
fn ReviewActions(id: i64, on_changed: EventHandler<()>) -> Element {
    let approve_api = use_api();
    let reject_api = use_api();
    let notices = use_notices();

    let mut notes = use_signal(String::new);
    let mut processing = use_signal(|| false);

    rsx! {
        div {
            style: "background: #ffffff; border-radius: 12px; padding: 20px; margin: 16px 0; \
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);",
            h3 { style: "margin-top: 0; color: #2d2d2d;", "Review decision" }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                button {
                    style: "padding: 8px 18px; border: none; border-radius: 6px; \
                            background: #2e7d32; color: #ffffff; cursor: pointer;",
                    disabled: processing(),
                    onclick: move |_| {
                        if processing() {
                            return;
                        }
                        processing.set(true);
                        let api = approve_api.clone();
                        spawn(async move {
                            match api.approve_cause(id).await {
                                Ok(_) => {
                                    push_notice(notices, NoticeKind::Info, "Cause approved");
                                    on_changed.call(());
                                }
                                Err(err) => push_notice(
                                    notices,
                                    NoticeKind::Error,
                                    format!("Approval failed: {}", err.user_message()),
                                ),
                            }
                            processing.set(false);
                        });
                    },
                    "Approve"
                }
                input {
                    style: "flex: 1; padding: 8px 12px; border: 1px solid #d8d4c8; border-radius: 6px;",
                    placeholder: "Reason for rejection (required)",
                    value: "{notes}",
                    oninput: move |evt| notes.set(evt.value()),
                }
                button {
                    style: "padding: 8px 18px; border: none; border-radius: 6px; \
                            background: #9a2c22; color: #ffffff; cursor: pointer;",
                    disabled: processing(),
                    onclick: move |_| {
                        if processing() {
                            return;
                        }
                        let reason = notes.peek().trim().to_string();
                        if reason.is_empty() {
                            push_notice(notices, NoticeKind::Error, "Rejection notes are required");
                            return;
                        }
                        processing.set(true);
                        let api = reject_api.clone();
                        spawn(async move {
                            match api.reject_cause(id, &reason).await {
                                Ok(_) => {
                                    push_notice(notices, NoticeKind::Info, "Cause rejected");
                                    notes.set(String::new());
                                    on_changed.call(());
                                }
                                Err(err) => push_notice(
                                    notices,
                                    NoticeKind::Error,
                                    format!("Rejection failed: {}", err.user_message()),
                                ),
                            }
                            processing.set(false);
                        });
                    },
                    "Reject"
                }
            }
        }
    }
}

/// Status/phase/notes edit form. Status choices come from the transition
/// table, so an impossible transition is never offered.
#[component]
fn AdminEdit(
    id: i64,
    current: CauseStatus,
    phase: Option<String>,
    on_changed: EventHandler<()>,
) -> Element {
    let api = use_api();
    let notices = use_notices();

    let mut next_status = use_signal(|| Option::<CauseStatus>::None);
    let mut next_phase = use_signal({
        let phase = phase.clone();
        move || phase.unwrap_or_default()
    });
    let mut next_notes = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let transitions = current.allowed_transitions();

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            let phase = next_phase.peek().trim().to_string();
            let notes = next_notes.peek().trim().to_string();
            let update = CauseAdminUpdate {
                status: *next_status.peek(),
                phase: (!phase.is_empty()).then_some(phase),
                review_notes: (!notes.is_empty()).then_some(notes),
            };
            match api.update_cause_admin(id, &update).await {
                Ok(_) => {
                    push_notice(notices, NoticeKind::Info, "Cause updated");
                    next_status.set(None);
                    next_notes.set(String::new());
                    on_changed.call(());
                }
                Err(err) => push_notice(
                    notices,
                    NoticeKind::Error,
                    format!("Update failed: {}", err.user_message()),
                ),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            style: "background: #ffffff; border-radius: 12px; padding: 20px; margin: 16px 0; \
                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); display: flex; \
                    flex-direction: column; gap: 12px;",
            onsubmit,
            h3 { style: "margin: 0; color: #2d2d2d;", "Admin edit" }
            label {
                style: "color: #545454;",
                "New status (optional)"
                select {
                    style: FIELD_STYLE,
                    onchange: move |evt: FormEvent| {
                        next_status.set(evt.value().parse::<CauseStatus>().ok());
                    },
                    option { value: "", selected: next_status().is_none(), "Keep current" }
                    for status in transitions {
                        option {
                            value: "{status}",
                            selected: next_status() == Some(status),
                            "{status.label()}"
                        }
                    }
                }
            }
            label {
                style: "color: #545454;",
                "Phase"
                input {
                    style: FIELD_STYLE,
                    value: "{next_phase}",
                    oninput: move |evt| next_phase.set(evt.value()),
                }
            }
            label {
                style: "color: #545454;",
                "Review notes"
                input {
                    style: FIELD_STYLE,
                    value: "{next_notes}",
                    oninput: move |evt| next_notes.set(evt.value()),
                }
            }
            button {
                style: "align-self: flex-start; padding: 8px 18px; border: none; border-radius: 6px; \
                        background: #1a1406; color: #ffffff; cursor: pointer;",
                r#type: "submit",
                disabled: saving(),
                if saving() { "Saving..." } else { "Save changes" }
            }
        }
    }
}

/// Append a manual timeline event.
#[component]
fn AppendEvent(id: i64, on_changed: EventHandler<()>) -> Element {
    let api = use_api();
    let notices = use_notices();

    let mut event_type = use_signal(|| "update".to_string());
    let mut message = use_signal(String::new);
    let mut saving = use_signal(|| false);

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if saving() {
            return;
        }
        if message.peek().trim().is_empty() {
            push_notice(notices, NoticeKind::Error, "Event message is required");
            return;
        }
        saving.set(true);
        let api = api.clone();
        spawn(async move {
            let event = TimelineEventCreate {
                event_type: event_type.peek().trim().to_string(),
                message: message.peek().trim().to_string(),
                metadata_json: None,
            };
            match api.add_timeline_event(id, &event).await {
                Ok(_) => {
                    push_notice(notices, NoticeKind::Info, "Event added");
                    message.set(String::new());
                    on_changed.call(());
                }
                Err(err) => push_notice(
                    notices,
                    NoticeKind::Error,
                    format!("Failed to add event: {}", err.user_message()),
                ),
            }
            saving.set(false);
        });
    };

    rsx! {
        form {
            style: "display: flex; gap: 8px; margin-bottom: 16px;",
            onsubmit,
            input {
                style: "width: 160px; padding: 8px 12px; border: 1px solid #d8d4c8; border-radius: 6px;",
                placeholder: "Event type",
                value: "{event_type}",
                oninput: move |evt| event_type.set(evt.value()),
            }
            input {
                style: "flex: 1; padding: 8px 12px; border: 1px solid #d8d4c8; border-radius: 6px;",
                placeholder: "Message",
                value: "{message}",
                oninput: move |evt| message.set(evt.value()),
            }
            button {
                style: "padding: 8px 18px; border: none; border-radius: 6px; \
                        background: #c99b2e; color: #1a1406; font-weight: 700; cursor: pointer;",
                r#type: "submit",
                disabled: saving(),
                "Add event"
            }
        }
    }
}
