//! # User model and roles
//!
//! The client-side copy of the backend's user record. The backend owns the
//! authoritative state; this is the cached projection stored alongside the
//! bearer token (see [`crate::SessionStore`]). It is `Serialize + Deserialize`
//! so it can round-trip through the durable key-value storage.

use serde::{Deserialize, Serialize};

/// Role assigned to a user by the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Admin,
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// A user record as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub full_name: Option<String>,
    pub role: Role,
    pub is_active: bool,
}

impl User {
    /// Whether this user carries the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Display name, falling back to the email address.
    pub fn display_name(&self) -> &str {
        self.full_name.as_deref().unwrap_or(&self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(role: Role) -> User {
        User {
            id: 7,
            email: "a@b.com".to_string(),
            full_name: None,
            role,
            is_active: true,
        }
    }

    #[test]
    fn test_role_round_trip() {
        let json = serde_json::to_string(&Role::Admin).unwrap();
        assert_eq!(json, "\"admin\"");
        let back: Role = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(back, Role::User);
    }

    #[test]
    fn test_is_admin() {
        assert!(user(Role::Admin).is_admin());
        assert!(!user(Role::User).is_admin());
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut u = user(Role::User);
        assert_eq!(u.display_name(), "a@b.com");
        u.full_name = Some("Ana Pop".to_string());
        assert_eq!(u.display_name(), "Ana Pop");
    }
}
