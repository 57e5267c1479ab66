//! Account registration form.

use api::{ApiError, RegisterData};
use dioxus::prelude::*;
use ui::{push_notice, use_api, use_notices, use_session, NoticeKind};

use crate::Route;

const FIELD_STYLE: &str = "width: 100%; padding: 10px 12px; border: 1px solid #d8d4c8; \
                           border-radius: 6px; font-size: 1rem; box-sizing: border-box;";

fn validate(email: &str, password: &str, confirm: &str) -> Option<&'static str> {
    if email.trim().is_empty() || password.is_empty() {
        return Some("Email and password are required.");
    }
    if !email.contains('@') {
        return Some("Please enter a valid email address.");
    }
    if password.len() < 6 {
        return Some("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Some("Passwords do not match.");
    }
    None
}

#[component]
pub fn Register() -> Element {
    let session = use_session();
    let api = use_api();
    let notices = use_notices();
    let nav = use_navigator();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut confirm = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut submitting = use_signal(|| false);

    if session.is_logged_in() {
        nav.replace(Route::Home {});
        return rsx! {};
    }

    let onsubmit = move |evt: FormEvent| {
        evt.prevent_default();
        if submitting() {
            return;
        }
        if let Some(message) = validate(&email(), &password(), &confirm()) {
            error.set(Some(message.to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);

        let api = api.clone();
        spawn(async move {
            let name = full_name.peek().trim().to_string();
            let data = RegisterData {
                email: email.peek().trim().to_string(),
                password: password.peek().clone(),
                full_name: (!name.is_empty()).then_some(name),
            };
            match api.register(&data).await {
                Ok(_) => {
                    push_notice(
                        notices,
                        NoticeKind::Info,
                        "Account created successfully! Please login.",
                    );
                    nav.push(Route::Login {});
                }
                Err(ApiError::Status { detail, .. }) => error.set(Some(detail)),
                Err(_) => error.set(Some("Registration failed. Please try again.".to_string())),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div {
            style: "max-width: 420px; margin: 48px auto; background: #ffffff; border-radius: 12px; \
                    padding: 32px; box-shadow: 0 2px 12px rgba(0, 0, 0, 0.08);",
            h1 { style: "margin-top: 0; color: #2d2d2d;", "Register" }
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
                    "Full name (optional)"
                    input {
                        style: FIELD_STYLE,
                        value: "{full_name}",
                        oninput: move |evt| full_name.set(evt.value()),
                    }
                }
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
                    style: "display: block; margin-bottom: 16px; color: #545454;",
                    "Password"
                    input {
                        style: FIELD_STYLE,
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                label {
                    style: "display: block; margin-bottom: 24px; color: #545454;",
                    "Confirm password"
                    input {
                        style: FIELD_STYLE,
                        r#type: "password",
                        value: "{confirm}",
                        oninput: move |evt| confirm.set(evt.value()),
                    }
                }
                button {
                    style: "width: 100%; padding: 12px; border: none; border-radius: 6px; \
                            background: #1a1406; color: #ffffff; font-weight: 700; cursor: pointer;",
                    r#type: "submit",
                    disabled: submitting(),
                    if submitting() { "Creating account..." } else { "Register" }
                }
            }
            p {
                style: "margin-bottom: 0; color: #545454;",
                "Already have an account? "
                Link { to: Route::Login {}, "Login here" }
            }
        }
    }
}
