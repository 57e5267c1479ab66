//! Status chip for cause tables and detail views.

use api::CauseStatus;
use dioxus::prelude::*;

fn badge_colors(status: CauseStatus) -> (&'static str, &'static str) {
    match status {
        CauseStatus::PendingReview => ("#fdf3dc", "#8a6512"),
        CauseStatus::Approved => ("#e3f2e6", "#1d6b2f"),
        CauseStatus::InProgress => ("#e2ecf8", "#1a5d9a"),
        CauseStatus::Completed => ("#e9e4f5", "#4a3a80"),
        CauseStatus::Rejected => ("#fbe3e1", "#9a2c22"),
        CauseStatus::Paused => ("#efefef", "#545454"),
        CauseStatus::Archived => ("#e8e8e8", "#6b6b6b"),
    }
}

#[component]
pub fn StatusBadge(status: CauseStatus) -> Element {
    let (background, color) = badge_colors(status);
    rsx! {
        span {
            style: "display: inline-block; padding: 2px 10px; border-radius: 999px; \
                    background: {background}; color: {color}; font-size: 0.8125rem; font-weight: 600;",
            "{status.label()}"
        }
    }
}
