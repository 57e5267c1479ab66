use dioxus::prelude::*;

/// Top navigation bar shell. The app supplies the links so this crate
/// stays independent of the route table.
#[component]
pub fn Navbar(children: Element) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; gap: 16px; padding: 12px 24px; \
                    background: #1a1406; color: #f1efe6;",
            span {
                style: "font-weight: 800; font-size: 1.1rem; letter-spacing: 1px; color: #f7d780;",
                "Fundraise"
            }
            {children}
        }
    }
}
