//! # Edit-and-resubmit saga
//!
//! The edit flow is two dependent requests: `PATCH /me/causes/{id}` and,
//! only on its success, `POST /me/causes/{id}/submit`. Rather than nesting
//! callbacks the way the original UI did, the sequence is an explicit
//! two-step saga with a named partial-success outcome, so the intermediate
//! state (fields updated, not yet resubmitted) is something tests and views
//! can see and name.
//!
//! No rollback: if the resubmission fails, the cause keeps its updated
//! fields and its old status. That is a known, accepted outcome — distinct
//! from total failure — and the backend remains the source of truth either
//! way.

use crate::error::ApiError;
use crate::models::{Cause, CauseUserUpdate};
use crate::ApiClient;
use store::SessionStorage;

/// The two owner-side operations the saga depends on. Abstracted so the
/// sequencing logic can be driven by a fake in tests.
pub trait CauseEditor {
    fn update_my_cause(
        &self,
        id: i64,
        update: &CauseUserUpdate,
    ) -> impl std::future::Future<Output = Result<Cause, ApiError>>;
    fn resubmit_my_cause(
        &self,
        id: i64,
    ) -> impl std::future::Future<Output = Result<Cause, ApiError>>;
}

impl<S: SessionStorage> CauseEditor for ApiClient<S> {
    async fn update_my_cause(&self, id: i64, update: &CauseUserUpdate) -> Result<Cause, ApiError> {
        ApiClient::update_my_cause(self, id, update).await
    }

    async fn resubmit_my_cause(&self, id: i64) -> Result<Cause, ApiError> {
        ApiClient::resubmit_my_cause(self, id).await
    }
}

/// Outcome of [`edit_and_resubmit`] when the first step succeeded.
#[derive(Debug)]
pub enum EditOutcome {
    /// Both steps succeeded; the cause is back in review.
    Resubmitted(Cause),
    /// The update went through but the resubmission failed. The cause
    /// carries its new fields and its old status.
    UpdatedNotResubmitted { cause: Cause, error: ApiError },
}

/// Run the two-step edit flow. The resubmission is only issued after the
/// update's success; if the update fails the cause is unchanged and the
/// error is returned as a total failure.
pub async fn edit_and_resubmit<E: CauseEditor>(
    editor: &E,
    id: i64,
    update: &CauseUserUpdate,
) -> Result<EditOutcome, ApiError> {
    let updated = editor.update_my_cause(id, update).await?;
    match editor.resubmit_my_cause(id).await {
        Ok(resubmitted) => Ok(EditOutcome::Resubmitted(resubmitted)),
        Err(error) => Ok(EditOutcome::UpdatedNotResubmitted {
            cause: updated,
            error,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CauseStatus;
    use std::sync::Mutex;

    fn cause(status: CauseStatus, title: &str) -> Cause {
        Cause {
            id: 9,
            title: title.to_string(),
            short_description: "s".to_string(),
            long_description: "l".to_string(),
            image_url: "http://img".to_string(),
            raised: 0.0,
            target: 100.0,
            status,
            phase: None,
            is_public: false,
            owner_user_id: Some(4),
            owner_email: None,
            owner_full_name: None,
            review_notes: None,
        }
    }

    /// Records the order of calls and answers from canned results.
    struct FakeEditor {
        calls: Mutex<Vec<&'static str>>,
        update_result: Result<Cause, ApiError>,
        resubmit_result: Result<Cause, ApiError>,
    }

    impl FakeEditor {
        fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().unwrap().clone()
        }
    }

    fn clone_result(r: &Result<Cause, ApiError>) -> Result<Cause, ApiError> {
        match r {
            Ok(c) => Ok(c.clone()),
            Err(ApiError::Request(m)) => Err(ApiError::Request(m.clone())),
            Err(ApiError::Status { status, detail }) => Err(ApiError::Status {
                status: *status,
                detail: detail.clone(),
            }),
            Err(ApiError::Decode(m)) => Err(ApiError::Decode(m.clone())),
        }
    }

    impl CauseEditor for FakeEditor {
        async fn update_my_cause(
            &self,
            _id: i64,
            _update: &CauseUserUpdate,
        ) -> Result<Cause, ApiError> {
            self.calls.lock().unwrap().push("update");
            clone_result(&self.update_result)
        }

        async fn resubmit_my_cause(&self, _id: i64) -> Result<Cause, ApiError> {
            self.calls.lock().unwrap().push("resubmit");
            clone_result(&self.resubmit_result)
        }
    }

    #[tokio::test]
    async fn test_both_steps_succeed() {
        let editor = FakeEditor {
            calls: Mutex::new(Vec::new()),
            update_result: Ok(cause(CauseStatus::Rejected, "Edited")),
            resubmit_result: Ok(cause(CauseStatus::PendingReview, "Edited")),
        };

        let outcome = edit_and_resubmit(&editor, 9, &CauseUserUpdate::default())
            .await
            .unwrap();

        assert_eq!(editor.calls(), vec!["update", "resubmit"]);
        match outcome {
            EditOutcome::Resubmitted(c) => {
                assert_eq!(c.status, CauseStatus::PendingReview);
                assert_eq!(c.title, "Edited");
            }
            other => panic!("expected Resubmitted, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_update_failure_skips_resubmit() {
        let editor = FakeEditor {
            calls: Mutex::new(Vec::new()),
            update_result: Err(ApiError::Request("connection refused".to_string())),
            resubmit_result: Ok(cause(CauseStatus::PendingReview, "x")),
        };

        let result = edit_and_resubmit(&editor, 9, &CauseUserUpdate::default()).await;

        assert!(result.is_err());
        // The second request must never have been issued.
        assert_eq!(editor.calls(), vec!["update"]);
    }

    #[tokio::test]
    async fn test_resubmit_failure_is_partial_success() {
        let editor = FakeEditor {
            calls: Mutex::new(Vec::new()),
            update_result: Ok(cause(CauseStatus::Rejected, "Edited")),
            resubmit_result: Err(ApiError::Status {
                status: 409,
                detail: "Cause cannot be resubmitted".to_string(),
            }),
        };

        let outcome = edit_and_resubmit(&editor, 9, &CauseUserUpdate::default())
            .await
            .unwrap();

        assert_eq!(editor.calls(), vec!["update", "resubmit"]);
        match outcome {
            EditOutcome::UpdatedNotResubmitted { cause, error } => {
                // Fields updated, status unchanged.
                assert_eq!(cause.title, "Edited");
                assert_eq!(cause.status, CauseStatus::Rejected);
                assert_eq!(error.user_message(), "Cause cannot be resubmitted");
            }
            other => panic!("expected UpdatedNotResubmitted, got {other:?}"),
        }
    }
}
