//! All public causes with client-side pagination.

use dioxus::prelude::*;
use ui::{use_api, CauseCard, Pagination};

/// 5 rows of 3 cards.
const PER_PAGE: usize = 15;

#[component]
pub fn AllCauses() -> Element {
    let api = use_api();
    let mut page = use_signal(|| 1usize);
    let causes = use_resource(move || {
        let api = api.clone();
        async move { api.list_public_causes().await }
    });

    rsx! {
        h1 { style: "color: #2d2d2d;", "All Causes" }
        p { style: "color: #545454;", "Discover and support all available causes" }

        match &*causes.read_unchecked() {
            None => rsx! {
                p { "Loading causes..." }
            },
            Some(Err(err)) => rsx! {
                p { style: "color: #9a2c22;", "Failed to load causes: {err.user_message()}" }
            },
            Some(Ok(list)) => {
                // Falls back to page 1 when the requested page is out of range.
                let pager = Pagination::new(PER_PAGE, list.len()).go_to(page());
                let visible = list[pager.range()].to_vec();

                rsx! {
                    div {
                        style: "display: grid; gap: 20px; grid-template-columns: repeat(auto-fill, minmax(320px, 1fr));",
                        for cause in visible {
                            CauseCard { key: "{cause.id}", cause }
                        }
                    }

                    div {
                        style: "display: flex; justify-content: center; align-items: center; gap: 8px; margin-top: 24px;",
                        button {
                            disabled: !pager.has_prev(),
                            onclick: move |_| page.set(page().saturating_sub(1).max(1)),
                            "Previous"
                        }
                        for number in pager.pages() {
                            button {
                                style: if number == pager.page {
                                    "font-weight: 700; text-decoration: underline;"
                                } else {
                                    ""
                                },
                                onclick: move |_| page.set(number),
                                "{number}"
                            }
                        }
                        button {
                            disabled: !pager.has_next(),
                            onclick: move |_| page.set(page() + 1),
                            "Next"
                        }
                    }
                }
            }
        }
    }
}
