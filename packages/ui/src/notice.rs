//! Transient user-facing notices (the snackbar channel).
//!
//! A single app-wide slot: pushing a notice replaces the previous one, and
//! [`NoticeHost`] dismisses it after a few seconds. The sequence number
//! keeps an older dismiss timer from clearing a newer notice.

use dioxus::prelude::*;
use std::time::Duration;

const DISMISS_AFTER: Duration = Duration::from_secs(3);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A transient message shown top-center.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub message: String,
    pub kind: NoticeKind,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticeState {
    seq: u64,
    pub current: Option<Notice>,
}

/// Get the app-wide notice signal.
pub fn use_notices() -> Signal<NoticeState> {
    use_context::<Signal<NoticeState>>()
}

/// Show a notice, replacing any currently visible one.
pub fn push_notice(mut notices: Signal<NoticeState>, kind: NoticeKind, message: impl Into<String>) {
    let seq = notices.peek().seq + 1;
    notices.set(NoticeState {
        seq,
        current: Some(Notice {
            message: message.into(),
            kind,
        }),
    });
}

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Renders the current notice and dismisses it after a timeout.
#[component]
pub fn NoticeHost() -> Element {
    let mut notices = use_notices();

    use_effect(move || {
        let state = notices();
        if state.current.is_some() {
            let seq = state.seq;
            spawn(async move {
                sleep(DISMISS_AFTER).await;
                // Only clear if no newer notice replaced this one.
                if notices.peek().seq == seq {
                    notices.set(NoticeState {
                        seq,
                        current: None,
                    });
                }
            });
        }
    });

    let state = notices();
    let Some(notice) = state.current else {
        return rsx! {};
    };

    let background = match notice.kind {
        NoticeKind::Info => "#2d2d2d",
        NoticeKind::Error => "#b3261e",
    };

    rsx! {
        div {
            style: "position: fixed; top: 16px; left: 50%; transform: translateX(-50%); z-index: 1000; \
                    background: {background}; color: #ffffff; padding: 10px 20px; border-radius: 6px; \
                    box-shadow: 0 4px 12px rgba(0,0,0,0.25); font-size: 0.9375rem;",
            "{notice.message}"
            button {
                style: "margin-left: 16px; background: none; border: none; color: #ffffff; \
                        cursor: pointer; font-weight: 700;",
                onclick: move |_| {
                    let seq = notices.peek().seq;
                    notices.set(NoticeState { seq, current: None });
                },
                "Close"
            }
        }
    }
}
