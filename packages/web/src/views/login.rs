//! Login form.

use api::{ApiError, LoginCredentials};
use dioxus::prelude::*;
use ui::{push_notice, use_api, use_notices, use_session, NoticeKind};

use crate::Route;

const FIELD_STYLE: &str = "width: 100%; padding: 10px 12px; border: 1px solid #d8d4c8; \
                           border-radius: 6px; font-size: 1rem; box-sizing: border-box;";

fn validate(email: &str, password: &str) -> Option<&'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Some("Email and password are required.");
    }
    if !email.contains('@') {
        return Some("Please enter a valid email address.");
    }
    None
}

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let api = use_api();
    let notices = use_notices();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    // Nothing to do here when a session is already active.
    if session.is_logged_in() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        if let Some(message) = validate(&email(), &password()) {
            error.set(Some(message.to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);

        let api = api.clone();
        let mut session = session.clone();
        spawn(async move {
            let credentials = LoginCredentials {
                email: email.peek().trim().to_string(),
                password: password.peek().clone(),
            };
            match session.login(&api, &credentials).await {
                Ok(_) => {
                    push_notice(notices, NoticeKind::Info, "Login successful!");
                    nav.push(Route::Home {});
                }
                Err(ApiError::Status { detail, .. }) => error.set(Some(detail)),
                Err(_) => error.set(Some("Login failed. Please try again.".to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            style: "max-width: 420px; margin: 48px auto; background: #ffffff; border-radius: 12px; \
                    padding: 32px; box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);",
            h1 { style: "margin-top: 0; color: #2d2d2d;", "Login" }
            if let Some(message) = error() {
                p {
                    style: "background: #fbe9e7; color: #9a2c22; border-radius: 6px; padding: 10px 12px;",
                    "{message}"
                }
            }
            form {
                onsubmit,
                label {
                    style: "display: block; margin-bottom: 16px; color: #545454;",
                    "Email"
                    input {
                        style: FIELD_STYLE,
                        r#type: "email",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label {
                    style: "display: block; margin-bottom: 24px; color: #545454;",
                    "Password"
                    input {
                        style: FIELD_STYLE,
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                button {
                    style: "width: 100%; padding: 12px; border: none; border-radius: 6px; \
                            background: #1a1406; color: #ffffff; font-weight: 700; cursor: pointer;",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Logging in..." } else { "Login" }
                }
            }
            p {
                style: "margin-bottom: 0; color: #545454;",
                "Don't have an account? "
                Link { to: Route::Register {}, "Register here" }
            }
        }
    }
}
