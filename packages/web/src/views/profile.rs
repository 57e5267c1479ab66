//! Profile page: account details plus the user's own causes.

use dioxus::prelude::*;
use store::RouteAccess;
use ui::{format_usd, use_api, use_guard, use_session, StatusBadge};

use crate::Route;

#[component]
pub fn Profile() -> Element {
    if !use_guard(RouteAccess::Authenticated) {
        return rsx! {};
    }

    let session = use_session();
    let refresh_api = use_api();
    let api = use_api();

    // Refresh the cached user so role or name changes made elsewhere show up.
    let refresh_session = session.clone();
    use_future(move || {
        let api = refresh_api.clone();
        let mut session = refresh_session.clone();
        async move {
            if let Err(err) = session.refresh_user(&api).await {
                tracing::error!("Failed to refresh user: {err}");
            }
        }
    });

    let my_causes = use_resource(move || {
        let api = api.clone();
        async move { api.list_my_causes().await }
    });

    let user = session.current_user();

    rsx! {
        h1 { style: "color: #2d2d2d;", "My Profile" }

        if let Some(user) = user {
            div {
                style: "background: #ffffff; border-radius: 12px; padding: 24px; \
                        box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08); margin-bottom: 32px;",
                p { style: "margin: 4px 0; color: #2d2d2d;",
                    strong { "Name: " }
                    "{user.display_name()}"
                }
                p { style: "margin: 4px 0; color: #2d2d2d;",
                    strong { "Email: " }
                    "{user.email}"
                }
                p { style: "margin: 4px 0; color: #2d2d2d;",
                    strong { "Role: " }
                    if user.is_admin() { "Administrator" } else { "User" }
                }
            }
        }

        h2 { style: "color: #2d2d2d;", "My Causes" }
        match &*my_causes.read_unchecked() {
            None => rsx! {
                p { "Loading your causes..." }
            },
            Some(Err(err)) => rsx! {
                p { style: "color: #9a2c22;", "Failed to load your causes: {err.user_message()}" }
            },
            Some(Ok(list)) if list.is_empty() => rsx! {
                p { style: "color: #545454;",
                    "You have not submitted any causes yet. "
                    Link { to: Route::AddCause {}, "Add your first cause" }
                }
            },
            Some(Ok(list)) => rsx! {
                table {
                    style: "width: 100%; border-collapse: collapse; background: #ffffff; \
                            border-radius: 12px; overflow: hidden;",
                    thead {
                        tr {
                            style: "background: #1a1406; color: #f1efe6; text-align: left;",
                            th { style: "padding: 12px;", "Title" }
                            th { style: "padding: 12px;", "Status" }
                            th { style: "padding: 12px;", "Raised" }
                            th { style: "padding: 12px;", "Target" }
                            th { style: "padding: 12px;", "" }
                        }
                    }
                    tbody {
                        for cause in list.iter().cloned() {
                            tr {
                                key: "{cause.id}",
                                style: "border-bottom: 1px solid #ece9df;",
                                td { style: "padding: 12px; color: #2d2d2d;", "{cause.title}" }
                                td { style: "padding: 12px;",
                                    StatusBadge { status: cause.status }
                                }
                                td { style: "padding: 12px; color: #2d2d2d;",
                                    {format_usd(cause.raised)}
                                }
                                td { style: "padding: 12px; color: #2d2d2d;",
                                    {format_usd(cause.target)}
                                }
                                td { style: "padding: 12px;",
                                    if cause.status.can_resubmit() {
                                        Link {
                                            to: Route::EditCause { id: cause.id },
                                            "Edit"
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
