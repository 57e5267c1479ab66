//! Admin review queue: approve or reject pending causes.

use api::CauseStatus;
use dioxus::prelude::*;
use store::RouteAccess;
use ui::{format_usd, push_notice, use_api, use_guard, use_notices, NoticeKind};

use crate::Route;

#[component]
pub fn AdminReview() -> Element {
    if !use_guard(RouteAccess::AdminOnly) {
        return rsx! {};
    }

    let api = use_api();
    let action_api = use_api();
    let notices = use_notices();

    let mut pending = use_resource(move || {
        let api = api.clone();
        async move { api.list_all_causes(Some(CauseStatus::PendingReview)).await }
    });

    let mut notes = use_signal(String::new);
    let mut rejecting = use_signal(|| Option::<i64>::None);
    let mut processing = use_signal(|| false);

    let approve = move |id: i64| {
        if processing() {
            return;
        }
        processing.set(true);
        let api = action_api.clone();
        spawn(async move {
            match api.approve_cause(id).await {
                Ok(_) => {
                    push_notice(notices, NoticeKind::Info, "Cause approved");
                    pending.restart();
                }
                Err(err) => {
                    push_notice(
                        notices,
                        NoticeKind::Error,
                        format!("Approval failed: {}", err.user_message()),
                    );
                }
            }
            processing.set(false);
        });
    };

    let action_api_reject = use_api();
    let reject = move |id: i64| {
        if processing() {
            return;
        }
        let reason = notes.peek().trim().to_string();
        if reason.is_empty() {
            push_notice(
                notices,
                NoticeKind::Error,
                "Rejection notes are required",
            );
            return;
        }
        processing.set(true);
        let api = action_api_reject.clone();
        spawn(async move {
            match api.reject_cause(id, &reason).await {
                Ok(_) => {
                    push_notice(notices, NoticeKind::Info, "Cause rejected");
                    notes.set(String::new());
                    rejecting.set(None);
                    pending.restart();
                }
                Err(err) => {
                    push_notice(
                        notices,
                        NoticeKind::Error,
                        format!("Rejection failed: {}", err.user_message()),
                    );
                }
            }
            processing.set(false);
        });
    };

    rsx! {
        h1 { style: "color: #2d2d2d;", "Review Queue" }
        p { style: "color: #545454;", "Causes awaiting an approve/reject decision." }

        match &*pending.read_unchecked() {
            None => rsx! {
                p { "Loading pending causes..." }
            },
            Some(Err(err)) => rsx! {
                p { style: "color: #9a2c22;", "Failed to load review queue: {err.user_message()}" }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { style: "color: #545454;", "Nothing to review. The queue is empty." }
            },
            Some(Ok(list)) => rsx! {
                div {
                    style: "display: flex; flex-direction: column; gap: 16px;",
                    for cause in list.iter().cloned() {
                        div {
                            key: "{cause.id}",
                            style: "background: #ffffff; border-radius: 12px; padding: 20px; \
                                    box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);",
                            div {
                                style: "display: flex; justify-content: space-between; align-items: baseline;",
                                h3 { style: "margin: 0; color: #2d2d2d;",
                                    Link {
                                        to: Route::AdminCauseDetails { id: cause.id },
                                        "{cause.title}"
                                    }
                                }
                                span { style: "color: #545454;",
                                    "Target: {format_usd(cause.target)}"
                                }
                            }
                            p { style: "color: #545454;", "{cause.short_description}" }
                            if let Some(owner) = cause.owner_email.clone() {
                                p { style: "color: #8a8a8a; font-size: 0.875rem;",
                                    "Submitted by {owner}"
                                }
                            }
                            div {
                                style: "display: flex; gap: 8px; align-items: center;",
                                button {
                                    style: "padding: 8px 18px; border: none; border-radius: 6px; \
                                            background: #2e7d32; color: #ffffff; cursor: pointer;",
                                    disabled: processing(),
                                    onclick: {
                                        let mut approve = approve.clone();
                                        move |_| approve(cause.id)
                                    },
                                    "Approve"
                                }
                                if rejecting() == Some(cause.id) {
                                    input {
                                        style: "flex: 1; padding: 8px 12px; border: 1px solid #d8d4c8; \
                                                border-radius: 6px;",
                                        placeholder: "Reason for rejection (required)",
                                        value: "{notes}",
                                        oninput: move |evt| notes.set(evt.value()),
                                    }
                                    button {
                                        style: "padding: 8px 18px; border: none; border-radius: 6px; \
                                                background: #9a2c22; color: #ffffff; cursor: pointer;",
                                        disabled: processing(),
                                        onclick: {
                                            let mut reject = reject.clone();
                                            move |_| reject(cause.id)
                                        },
                                        "Confirm rejection"
                                    }
                                    button {
                                        style: "padding: 8px 12px; border: none; background: none; \
                                                color: #545454; cursor: pointer;",
                                        onclick: move |_| {
                                            rejecting.set(None);
                                            notes.set(String::new());
                                        },
                                        "Cancel"
                                    }
                                } else {
                                    button {
                                        style: "padding: 8px 18px; border: 1px solid #9a2c22; \
                                                border-radius: 6px; background: none; color: #9a2c22; \
                                                cursor: pointer;",
                                        disabled: processing(),
                                        onclick: move |_| rejecting.set(Some(cause.id)),
                                        "Reject..."
                                    }
                                }
                            }
                        }
                    }
                }
            },
        }
    }
}
