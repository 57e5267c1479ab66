//! Cause summary card used by the home and all-causes grids.

use api::Cause;
use dioxus::prelude::*;

use crate::format::format_usd;
use crate::notice::{push_notice, use_notices, NoticeKind};

/// Determinate progress bar, `value` in percent.
#[component]
pub fn ProgressBar(value: f64) -> Element {
    rsx! {
        div {
            style: "width: 100%; height: 8px; border-radius: 999px; background: #e4ddd0; overflow: hidden;",
            div {
                style: "height: 100%; width: {value}%; background: #c99b2e; border-radius: 999px;",
            }
        }
    }
}

/// Card with image, descriptions, funding progress, and a link to the
/// cause details. The donate button only shows the coming-soon notice;
/// there is no payment flow.
#[component]
pub fn CauseCard(cause: Cause) -> Element {
    let notices = use_notices();
    let progress = cause.progress();
    let raised = format_usd(cause.raised);
    let target = format_usd(cause.target);
    let details_href = format!("/cause/{}", cause.id);

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px; border-radius: 14px; overflow: hidden; \
                    border: 1px solid #dcd2c4; background: #f9f5ec; box-shadow: 0 10px 26px rgba(0,0,0,0.08);",
            img {
                style: "width: 100%; height: 190px; object-fit: cover;",
                src: "{cause.image_url}",
                alt: "{cause.title}",
                loading: "lazy",
            }
            div {
                style: "display: flex; flex-direction: column; gap: 12px; padding: 0 20px;",
                h3 {
                    style: "margin: 0; font-size: 1.2rem; font-weight: 700; color: #2d2d2d;",
                    "{cause.title}"
                }
                p {
                    style: "margin: 0; color: #545454; font-size: 1rem;",
                    "{cause.short_description}"
                }
                div {
                    style: "font-weight: 700; color: #2d2d2d;",
                    "Raised {raised} of {target}"
                }
                ProgressBar { value: progress }
            }
            div {
                style: "display: flex; justify-content: space-between; padding: 4px 16px 16px 16px;",
                Link {
                    to: details_href,
                    style: "padding: 8px 16px; border: 1px solid #000000; border-radius: 6px; \
                            background: #edebe6; color: #000000; text-decoration: none;",
                    "View Cause"
                }
                button {
                    style: "padding: 8px 16px; border: none; border-radius: 6px; background: none; \
                            color: #1a5d9a; cursor: pointer; font-weight: 600;",
                    onclick: move |_| {
                        push_notice(notices, NoticeKind::Info, "Payment flow will be implemented later.");
                    },
                    "Donate"
                }
            }
        }
    }
}
