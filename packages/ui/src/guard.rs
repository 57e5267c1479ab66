//! Route guard hook.
//!
//! The decision logic is the pure [`store::check_access`]; this hook wires
//! it to the router. Called at the top of every protected view: on denial
//! it shows the guard's notice, replaces navigation with the public landing
//! route, and returns `false` so the view renders nothing.
//!
//! The check runs against the session snapshot at the moment of
//! navigation — decisions are never cached across navigations.

use dioxus::prelude::*;
use store::{check_access, GuardDecision, RouteAccess};

use crate::notice::{push_notice, use_notices, NoticeKind};
use crate::session::use_session;

/// Gate the current view behind an access level.
pub fn use_guard(access: RouteAccess) -> bool {
    let session = use_session();
    let notices = use_notices();
    let nav = use_navigator();

    match check_access(&session.snapshot(), access) {
        GuardDecision::Allow => true,
        GuardDecision::Deny { notice } => {
            tracing::warn!("Access denied: {notice}");
            push_notice(notices, NoticeKind::Error, notice);
            nav.replace("/");
            false
        }
    }
}
