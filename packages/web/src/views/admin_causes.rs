//! Admin cause management: filterable table over every cause.

use api::CauseStatus;
use dioxus::prelude::*;
use store::RouteAccess;
use ui::{format_usd, push_notice, use_api, use_guard, use_notices, NoticeKind, StatusBadge};

use crate::Route;

#[component]
pub fn AdminCauses() -> Element {
    if !use_guard(RouteAccess::AdminOnly) {
        return rsx! {};
    }

    let api = use_api();
    let delete_api = use_api();
    let notices = use_notices();

    let filter = use_signal(|| Option::<CauseStatus>::None);
    // The resource reads `filter` so changing it refetches.
    let mut causes = use_resource(move || {
        let api = api.clone();
        let status = filter();
        async move { api.list_all_causes(status).await }
    });

    let mut confirming_delete = use_signal(|| Option::<i64>::None);
    let mut processing = use_signal(|| false);

    let delete = move |id: i64| {
        if processing() {
            return;
        }
        processing.set(true);
        let api = delete_api.clone();
        spawn(async move {
            match api.delete_cause(id).await {
                Ok(()) => {
                    push_notice(notices, NoticeKind::Info, "Cause deleted");
                    causes.restart();
                }
                Err(err) => {
                    push_notice(
                        notices,
                        NoticeKind::Error,
                        format!("Delete failed: {}", err.user_message()),
                    );
                }
            }
            confirming_delete.set(None);
            processing.set(false);
        });
    };

    rsx! {
        h1 { style: "color: #2d2d2d;", "All Causes (Admin)" }

        label {
            style: "display: inline-flex; align-items: center; gap: 8px; color: #545454; \
                    margin-bottom: 16px;",
            "Filter by status:"
            select {
                style: "padding: 6px 10px; border: 1px solid #d8d4c8; border-radius: 6px;",
                onchange: {
                    let mut filter = filter;
                    move |evt: FormEvent| filter.set(evt.value().parse::<CauseStatus>().ok())
                },
                option { value: "", selected: filter().is_none(), "All statuses" }
                for status in CauseStatus::ALL {
                    option {
                        value: "{status}",
                        selected: filter() == Some(status),
                        "{status.label()}"
                    }
                }
            }
        }

        match &*causes.read_unchecked() {
            None => rsx! {
                p { "Loading causes..." }
            },
            Some(Err(err)) => rsx! {
                p { style: "color: #9a2c22;", "Failed to load causes: {err.user_message()}" }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { style: "color: #545454;", "No causes match this filter." }
            },
            Some(Ok(list)) => rsx! {
                table {
                    style: "width: 100%; border-collapse: collapse; background: #ffffff; \
                            border-radius: 12px; overflow: hidden;",
                    thead {
                        tr {
                            style: "background: #1a1406; color: #f1efe6; text-align: left;",
                            th { style: "padding: 12px;", "Title" }
                            th { style: "padding: 12px;", "Owner" }
                            th { style: "padding: 12px;", "Status" }
                            th { style: "padding: 12px;", "Raised / Target" }
                            th { style: "padding: 12px;", "" }
                        }
                    }
                    tbody {
                        for cause in list.iter().cloned() {
                            tr {
                                key: "{cause.id}",
                                style: "border-bottom: 1px solid #ece9df;",
                                td { style: "padding: 12px;",
                                    Link {
                                        to: Route::AdminCauseDetails { id: cause.id },
                                        "{cause.title}"
                                    }
                                }
                                td { style: "padding: 12px; color: #545454;",
                                    {cause.owner_email.clone().unwrap_or_else(|| "-".to_string())}
                                }
                                td { style: "padding: 12px;",
                                    StatusBadge { status: cause.status }
                                }
                                td { style: "padding: 12px; color: #2d2d2d;",
                                    "{format_usd(cause.raised)} / {format_usd(cause.target)}"
                                }
                                td { style: "padding: 12px;",
                                    if confirming_delete() == Some(cause.id) {
                                        button {
                                            style: "padding: 6px 12px; border: none; border-radius: 6px; \
                                                    background: #9a2c22; color: #ffffff; cursor: pointer;",
                                            disabled: processing(),
                                            onclick: {
                                                let mut delete = delete.clone();
                                                move |_| delete(cause.id)
                                            },
                                            "Confirm delete"
                                        }
                                        button {
                                            style: "padding: 6px 8px; border: none; background: none; \
                                                    color: #545454; cursor: pointer;",
                                            onclick: move |_| confirming_delete.set(None),
                                            "Cancel"
                                        }
                                    } else {
                                        button {
                                            style: "padding: 6px 12px; border: 1px solid #9a2c22; \
                                                    border-radius: 6px; background: none; color: #9a2c22; \
                                                    cursor: pointer;",
                                            onclick: move |_| confirming_delete.set(Some(cause.id)),
                                            "Delete"
                                        }
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
