//! # Domain models for causes and their lifecycle
//!
//! Wire types exchanged with the REST backend. The backend owns every record
//! here; the client never holds authoritative state, so these types carry no
//! behavior beyond (de)serialization and a few pure derived values
//! ([`Cause::progress`], the [`CauseStatus`] transition table).
//!
//! The backend serves a handful of fields camelCased (`shortDescription`,
//! `longDescription`, `imageUrl`); those carry serde renames, the rest are
//! snake_case.

use serde::{Deserialize, Serialize};
use store::User;

/// Review/lifecycle status of a cause. Backend-owned; the client only
/// requests transitions and re-renders whatever the backend returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CauseStatus {
    PendingReview,
    Approved,
    InProgress,
    Completed,
    Rejected,
    Paused,
    Archived,
}

impl Default for CauseStatus {
    fn default() -> Self {
        CauseStatus::PendingReview
    }
}

impl CauseStatus {
    /// Every status, in review-lifecycle order. Used to build filter and
    /// status-select controls.
    pub const ALL: [CauseStatus; 7] = [
        CauseStatus::PendingReview,
        CauseStatus::Approved,
        CauseStatus::InProgress,
        CauseStatus::Completed,
        CauseStatus::Rejected,
        CauseStatus::Paused,
        CauseStatus::Archived,
    ];

    /// The snake_case value used on the wire and in query strings.
    pub fn as_str(&self) -> &'static str {
        match self {
            CauseStatus::PendingReview => "pending_review",
            CauseStatus::Approved => "approved",
            CauseStatus::InProgress => "in_progress",
            CauseStatus::Completed => "completed",
            CauseStatus::Rejected => "rejected",
            CauseStatus::Paused => "paused",
            CauseStatus::Archived => "archived",
        }
    }

    /// Human-readable label for badges and tables.
    pub fn label(&self) -> &'static str {
        match self {
            CauseStatus::PendingReview => "Pending Review",
            CauseStatus::Approved => "Approved",
            CauseStatus::InProgress => "In Progress",
            CauseStatus::Completed => "Completed",
            CauseStatus::Rejected => "Rejected",
            CauseStatus::Paused => "Paused",
            CauseStatus::Archived => "Archived",
        }
    }

    /// The transition table mirrored from the backend contract. The client
    /// uses it only to enable or disable actions; it never applies a
    /// transition locally.
    pub fn can_transition_to(&self, next: CauseStatus) -> bool {
        use CauseStatus::*;
        match self {
            PendingReview => matches!(next, Approved | Rejected | Paused | Archived),
            Approved => matches!(next, InProgress | Paused | Archived),
            InProgress => matches!(next, Completed | Paused | Archived),
            Rejected => matches!(next, PendingReview | Archived),
            Paused => matches!(next, InProgress | Archived),
            Completed => matches!(next, Archived),
            Archived => false,
        }
    }

    /// Statuses an admin edit may move this cause to.
    pub fn allowed_transitions(&self) -> Vec<CauseStatus> {
        CauseStatus::ALL
            .into_iter()
            .filter(|next| self.can_transition_to(*next))
            .collect()
    }

    /// Whether approve/reject actions apply.
    pub fn can_review(&self) -> bool {
        *self == CauseStatus::PendingReview
    }

    /// Whether the owner may resubmit for review. Resubmitting a cause that
    /// is already pending is accepted by the backend as a no-op, which is
    /// what the edit flow relies on.
    pub fn can_resubmit(&self) -> bool {
        matches!(self, CauseStatus::Rejected | CauseStatus::PendingReview)
    }
}

impl std::fmt::Display for CauseStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CauseStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CauseStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or(UnknownStatus)
    }
}

/// Error for parsing an unrecognized status string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownStatus;

impl std::fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("unknown cause status")
    }
}

impl std::error::Error for UnknownStatus {}

/// A fundraising cause as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    pub id: i64,
    pub title: String,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    #[serde(rename = "longDescription")]
    pub long_description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub raised: f64,
    pub target: f64,
    #[serde(default)]
    pub status: CauseStatus,
    #[serde(default)]
    pub phase: Option<String>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub owner_user_id: Option<i64>,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub owner_full_name: Option<String>,
    #[serde(default)]
    pub review_notes: Option<String>,
}

impl Cause {
    /// Funding progress in percent, clamped to `[0, 100]`.
    /// A non-positive target yields 0 rather than dividing by it.
    pub fn progress(&self) -> f64 {
        if self.target <= 0.0 {
            return 0.0;
        }
        (self.raised / self.target * 100.0).clamp(0.0, 100.0)
    }
}

/// An immutable audit-log entry attached to a cause.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    pub event_type: String,
    pub message: String,
    pub created_at: String,
    pub created_by_user_id: Option<i64>,
    #[serde(default)]
    pub metadata_json: Option<serde_json::Value>,
}

/// Payload for appending a timeline event (admin).
#[derive(Clone, Debug, Serialize)]
pub struct TimelineEventCreate {
    pub event_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_json: Option<serde_json::Value>,
}

/// Payload for creating a cause.
#[derive(Clone, Debug, Serialize)]
pub struct CauseCreate {
    pub title: String,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    #[serde(rename = "longDescription")]
    pub long_description: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub target: f64,
}

/// PATCH body for an owner editing their own cause. Absent fields are left
/// unchanged by the backend.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CauseUserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "shortDescription", skip_serializing_if = "Option::is_none")]
    pub short_description: Option<String>,
    #[serde(rename = "longDescription", skip_serializing_if = "Option::is_none")]
    pub long_description: Option<String>,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<f64>,
}

/// PATCH body for an admin edit.
#[derive(Clone, Debug, Default, Serialize)]
pub struct CauseAdminUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CauseStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_notes: Option<String>,
}

/// Credentials for `POST /auth/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Clone, Debug, Serialize)]
pub struct RegisterData {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

/// Response from `POST /auth/login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cause(raised: f64, target: f64) -> Cause {
        Cause {
            id: 1,
            title: "Test".to_string(),
            short_description: "short".to_string(),
            long_description: "long".to_string(),
            image_url: "http://img".to_string(),
            raised,
            target,
            status: CauseStatus::Approved,
            phase: None,
            is_public: true,
            owner_user_id: Some(2),
            owner_email: None,
            owner_full_name: None,
            review_notes: None,
        }
    }

    #[test]
    fn test_progress_basic() {
        assert_eq!(cause(50.0, 200.0).progress(), 25.0);
        assert_eq!(cause(0.0, 200.0).progress(), 0.0);
    }

    #[test]
    fn test_progress_clamped_to_100() {
        assert_eq!(cause(500.0, 200.0).progress(), 100.0);
    }

    #[test]
    fn test_progress_zero_for_non_positive_target() {
        assert_eq!(cause(50.0, 0.0).progress(), 0.0);
        assert_eq!(cause(50.0, -10.0).progress(), 0.0);
    }

    #[test]
    fn test_progress_negative_raised_clamped() {
        assert_eq!(cause(-5.0, 100.0).progress(), 0.0);
    }

    #[test]
    fn test_status_wire_format() {
        let json = serde_json::to_string(&CauseStatus::PendingReview).unwrap();
        assert_eq!(json, "\"pending_review\"");
        let back: CauseStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(back, CauseStatus::InProgress);
    }

    #[test]
    fn test_cause_field_renames() {
        let json = r#"{
            "id": 3,
            "title": "School",
            "shortDescription": "s",
            "longDescription": "l",
            "imageUrl": "http://img",
            "raised": 10.0,
            "target": 100.0,
            "status": "rejected",
            "review_notes": "needs work"
        }"#;
        let cause: Cause = serde_json::from_str(json).unwrap();
        assert_eq!(cause.short_description, "s");
        assert_eq!(cause.image_url, "http://img");
        assert_eq!(cause.status, CauseStatus::Rejected);
        assert_eq!(cause.review_notes.as_deref(), Some("needs work"));
    }

    #[test]
    fn test_user_update_skips_absent_fields() {
        let update = CauseUserUpdate {
            title: Some("New".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"title":"New"}"#);
    }

    #[test]
    fn test_review_lifecycle_edges() {
        use CauseStatus::*;
        assert!(PendingReview.can_transition_to(Approved));
        assert!(PendingReview.can_transition_to(Rejected));
        assert!(Rejected.can_transition_to(PendingReview));
        assert!(Approved.can_transition_to(InProgress));
        assert!(InProgress.can_transition_to(Completed));
        assert!(!Completed.can_transition_to(InProgress));
        assert!(!Approved.can_transition_to(Rejected));
    }

    #[test]
    fn test_archived_is_terminal() {
        for next in CauseStatus::ALL {
            assert!(!CauseStatus::Archived.can_transition_to(next));
        }
        assert!(CauseStatus::Archived.allowed_transitions().is_empty());
    }

    #[test]
    fn test_pause_and_archive_reachability() {
        use CauseStatus::*;
        for status in [PendingReview, Approved, InProgress] {
            assert!(status.can_transition_to(Paused), "{status} should pause");
        }
        for status in [PendingReview, Approved, InProgress, Rejected, Paused, Completed] {
            assert!(status.can_transition_to(Archived), "{status} should archive");
        }
    }

    #[test]
    fn test_status_round_trips_as_str() {
        for status in CauseStatus::ALL {
            assert_eq!(status.as_str().parse::<CauseStatus>(), Ok(status));
        }
        assert!("PENDING_REVIEW".parse::<CauseStatus>().is_err());
    }

    #[test]
    fn test_action_helpers() {
        assert!(CauseStatus::PendingReview.can_review());
        assert!(!CauseStatus::Approved.can_review());
        assert!(CauseStatus::Rejected.can_resubmit());
        assert!(CauseStatus::PendingReview.can_resubmit());
        assert!(!CauseStatus::Completed.can_resubmit());
    }
}
