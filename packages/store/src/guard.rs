//! # Access guard — pure pre-navigation checks
//!
//! [`check_access`] is a pure predicate over the current
//! [`SessionSnapshot`] and the access level a navigation target requires.
//! It is independent of any routing library so the policy matrix can be
//! tested in isolation; the UI layer turns a [`GuardDecision::Deny`] into a
//! redirect to the public landing route plus a transient notice.
//!
//! Decisions are evaluated fresh at the moment of navigation — never cached,
//! since a login or logout may have happened since the last one.

use crate::session::SessionSnapshot;

/// Access level required by a navigation target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteAccess {
    /// Anyone, including anonymous visitors.
    Public,
    /// Any logged-in user.
    Authenticated,
    /// Logged-in users with the admin role.
    AdminOnly,
}

/// Outcome of a guard check. Denials always redirect to `/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Deny { notice: &'static str },
}

pub const LOGIN_REQUIRED_NOTICE: &str = "Please log in to access this page";
pub const ADMIN_REQUIRED_NOTICE: &str = "Not authorized. Admin access required.";

/// Decide whether the session may enter a target with the given access level.
pub fn check_access(session: &SessionSnapshot, access: RouteAccess) -> GuardDecision {
    match access {
        RouteAccess::Public => GuardDecision::Allow,
        RouteAccess::Authenticated => {
            if session.is_logged_in() {
                GuardDecision::Allow
            } else {
                GuardDecision::Deny {
                    notice: LOGIN_REQUIRED_NOTICE,
                }
            }
        }
        RouteAccess::AdminOnly => {
            // The login check comes first so anonymous visitors get the
            // same notice they would on any authenticated route.
            if !session.is_logged_in() {
                GuardDecision::Deny {
                    notice: LOGIN_REQUIRED_NOTICE,
                }
            } else if !session.is_admin() {
                GuardDecision::Deny {
                    notice: ADMIN_REQUIRED_NOTICE,
                }
            } else {
                GuardDecision::Allow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, User};

    fn session(role: Option<Role>) -> SessionSnapshot {
        SessionSnapshot {
            token: role.map(|_| "tok".to_string()),
            user: role.map(|role| User {
                id: 1,
                email: "a@b.com".to_string(),
                full_name: None,
                role,
                is_active: true,
            }),
        }
    }

    #[test]
    fn test_public_always_allowed() {
        for s in [session(None), session(Some(Role::User)), session(Some(Role::Admin))] {
            assert_eq!(check_access(&s, RouteAccess::Public), GuardDecision::Allow);
        }
    }

    #[test]
    fn test_authenticated_requires_login() {
        assert_eq!(
            check_access(&session(None), RouteAccess::Authenticated),
            GuardDecision::Deny {
                notice: LOGIN_REQUIRED_NOTICE
            }
        );
        assert_eq!(
            check_access(&session(Some(Role::User)), RouteAccess::Authenticated),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_admin_only_matrix() {
        // Anonymous gets the login notice, not the admin one.
        assert_eq!(
            check_access(&session(None), RouteAccess::AdminOnly),
            GuardDecision::Deny {
                notice: LOGIN_REQUIRED_NOTICE
            }
        );
        // Logged-in non-admin is denied with the admin notice.
        assert_eq!(
            check_access(&session(Some(Role::User)), RouteAccess::AdminOnly),
            GuardDecision::Deny {
                notice: ADMIN_REQUIRED_NOTICE
            }
        );
        assert_eq!(
            check_access(&session(Some(Role::Admin)), RouteAccess::AdminOnly),
            GuardDecision::Allow
        );
    }

    #[test]
    fn test_decision_reflects_current_state() {
        // Same route, changed session: the guard answers from the snapshot
        // it is handed, so a logout between navigations flips the result.
        let logged_in = session(Some(Role::Admin));
        assert_eq!(
            check_access(&logged_in, RouteAccess::AdminOnly),
            GuardDecision::Allow
        );
        let after_logout = session(None);
        assert!(matches!(
            check_access(&after_logout, RouteAccess::AdminOnly),
            GuardDecision::Deny { .. }
        ));
    }
}
