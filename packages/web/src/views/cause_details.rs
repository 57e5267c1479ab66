//! Public cause details: full description, progress, and timeline.

use dioxus::prelude::*;
use ui::{format_usd, push_notice, use_api, use_notices, NoticeKind, ProgressBar, StatusBadge};

#[component]
pub fn CauseDetails(id: i64) -> Element {
    let api = use_api();
    let timeline_api = use_api();
    let notices = use_notices();

    let cause = use_resource(move || {
        let api = api.clone();
        async move { api.get_cause(id).await }
    });
    let timeline = use_resource(move || {
        let api = timeline_api.clone();
        async move { api.get_timeline(id).await }
    });

    rsx! {
        match &*cause.read_unchecked() {
            None => rsx! {
                p { "Loading cause..." }
            },
            Some(Err(_)) => rsx! {
                p { style: "color: #9a2c22;", "Cause not found or failed to load." }
            },
            Some(Ok(cause)) => {
                let progress = cause.progress();
                let raised = format_usd(cause.raised);
                let target = format_usd(cause.target);
                let cause = cause.clone();

                rsx! {
                    img {
                        style: "width: 100%; max-height: 360px; object-fit: cover; border-radius: 12px;",
                        src: "{cause.image_url}",
                        alt: "{cause.title}",
                    }
                    div {
                        style: "display: flex; align-items: center; gap: 12px; margin-top: 16px;",
                        h1 { style: "margin: 0; color: #2d2d2d;", "{cause.title}" }
                        StatusBadge { status: cause.status }
                    }
                    p { style: "color: #545454; font-size: 1.1rem;", "{cause.short_description}" }
                    div {
                        style: "margin: 16px 0; font-weight: 700; color: #2d2d2d;",
                        "Raised {raised} of {target}"
                    }
                    ProgressBar { value: progress }
                    p {
                        style: "margin-top: 24px; color: #2d2d2d; line-height: 1.7; white-space: pre-wrap;",
                        "{cause.long_description}"
                    }
                    button {
                        style: "padding: 10px 24px; border: none; border-radius: 6px; background: #c99b2e; \
                                color: #1a1406; font-weight: 700; cursor: pointer;",
                        onclick: move |_| {
                            push_notice(notices, NoticeKind::Info, "Payment flow will be implemented later.");
                        },
                        "Donate"
                    }
                }
            }
        }

        section {
            style: "margin-top: 40px;",
            h2 { style: "color: #2d2d2d;", "Timeline" }
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
