//! Landing page: hero banner plus the public cause grid.

use dioxus::prelude::*;
use ui::{use_api, CauseCard};

#[component]
pub fn Home() -> Element {
    let api = use_api();
    let causes = use_resource(move || {
        let api = api.clone();
        async move { api.list_public_causes().await }
    });

    rsx! {
        section {
            style: "background: #1a1406; color: #ffffff; border-radius: 12px; padding: 56px 32px; \
                    margin-bottom: 32px;",
            p {
                style: "text-transform: uppercase; letter-spacing: 2px; font-weight: 700; \
                        font-size: 0.85rem; margin: 0 0 16px 0; color: #f7d780;",
                "Fundraise Platform"
            }
            h1 {
                style: "margin: 0 0 20px 0; font-size: 3rem; font-weight: 800;",
                "Discover causes and make a difference"
            }
            p {
                style: "margin: 0; color: #f1efe6; font-size: 1.15rem;",
                "Support impactful projects in education, health, and community."
            }
        }

        section {
            h2 { style: "color: #2d2d2d;", "Support real initiatives" }
            match &*causes.read_unchecked() {
                None => rsx! {
                    p { "Loading causes..." }
                },
                Some(Err(err)) => rsx! {
                    p { style: "color: #9a2c22;", "Failed to load causes: {err.user_message()}" }
                },
                Some(Ok(list)) => rsx! {
                    div {
                        style: "display: grid; gap: 20px; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));",
                        for cause in list.iter().cloned() {
                            CauseCard { key: "{cause.id}", cause }
                        }
                    }
                },
            }
        }
    }
}
