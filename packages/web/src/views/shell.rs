//! App layout: navbar, notice host, and the routed outlet.

use dioxus::prelude::*;
use ui::{push_notice, use_notices, use_session, Navbar, NoticeHost, NoticeKind};

use crate::Route;

const LINK_STYLE: &str = "color: #f1efe6; text-decoration: none; font-size: 0.9375rem;";

#[component]
pub fn Shell() -> Element {
    let session = use_session();
    let mut logout_session = use_session();
    let notices = use_notices();
    let nav = use_navigator();

    let snapshot = session.snapshot();
    let logged_in = snapshot.is_logged_in();
    let admin = snapshot.is_admin();

    rsx! {
        Navbar {
            Link { to: Route::Home {}, style: LINK_STYLE, "Home" }
            Link { to: Route::AllCauses {}, style: LINK_STYLE, "All Causes" }
            if logged_in {
                Link { to: Route::AddCause {}, style: LINK_STYLE, "Add Cause" }
                Link { to: Route::Profile {}, style: LINK_STYLE, "Profile" }
            }
            if admin {
                Link { to: Route::AdminReview {}, style: LINK_STYLE, "Review" }
                Link { to: Route::AdminCauses {}, style: LINK_STYLE, "Admin Causes" }
            }
            div { style: "flex: 1;" }
            if logged_in {
                button {
                    style: "background: none; border: 1px solid #f1efe6; color: #f1efe6; \
                            border-radius: 6px; padding: 6px 14px; cursor: pointer;",
                    onclick: move |_| {
                        logout_session.logout();
                        push_notice(notices, NoticeKind::Info, "Logged out successfully");
                        nav.push(Route::Home {});
                    },
                    "Logout"
                }
            } else {
                Link { to: Route::Login {}, style: LINK_STYLE, "Login" }
                Link { to: Route::Register {}, style: LINK_STYLE, "Register" }
            }
        }
        NoticeHost {}
        main {
            style: "max-width: 1200px; margin: 0 auto; padding: 24px 16px;",
            Outlet::<Route> {}
        }
    }
}
