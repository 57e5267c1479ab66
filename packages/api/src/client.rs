//! # REST client for the Fundraise backend
//!
//! [`ApiClient`] is the sole channel between views and the backend-held
//! cause/user state. It does request shaping and (de)serialization only:
//! no caching, no retries, no local business logic. Every operation is a
//! single request/response pair; the edit-and-resubmit compound flow lives
//! in [`crate::saga`].
//!
//! The client reads the bearer token from the [`SessionStore`] at the
//! moment each request is built — it never writes session state. Session
//! mutation (persisting a login, clearing on logout) belongs to the store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use store::{SessionStorage, SessionStore};

use crate::error::ApiError;
use crate::models::{
    Cause, CauseAdminUpdate, CauseCreate, CauseStatus, CauseUserUpdate, LoginCredentials,
    LoginResponse, RegisterData, TimelineEvent, TimelineEventCreate,
};
use store::User;

/// Typed HTTP client for the backend REST surface.
#[derive(Clone, Debug)]
pub struct ApiClient<S: SessionStorage> {
    http: reqwest::Client,
    base_url: String,
    session: SessionStore<S>,
}

impl<S: SessionStorage> ApiClient<S> {
    /// Create a client against `base_url` (no trailing slash), reading
    /// bearer tokens from `session`.
    pub fn new(base_url: impl Into<String>, session: SessionStore<S>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer token when a session exists. Public endpoints go
    /// through here too, matching the original app's blanket interceptor.
    fn with_auth(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match self.session.token() {
            Some(token) if !token.is_empty() => request.bearer_auth(token),
            _ => request,
        }
    }

    // -- auth --------------------------------------------------------------

    /// `POST /auth/login`. Returns the token and user; persisting them is
    /// the session store's job.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        self.post_json("/auth/login", credentials).await
    }

    /// `POST /auth/register`.
    pub async fn register(&self, data: &RegisterData) -> Result<User, ApiError> {
        self.post_json("/auth/register", data).await
    }

    /// `GET /me` — the current user, fresh from the backend.
    pub async fn me(&self) -> Result<User, ApiError> {
        self.get_json("/me").await
    }

    // -- public causes -----------------------------------------------------

    /// `GET /causes` — public causes only; the backend does the filtering.
    pub async fn list_public_causes(&self) -> Result<Vec<Cause>, ApiError> {
        self.get_json("/causes").await
    }

    /// `GET /causes/{id}`.
    pub async fn get_cause(&self, id: i64) -> Result<Cause, ApiError> {
        self.get_json(&format!("/causes/{id}")).await
    }

    /// `POST /causes`.
    pub async fn create_cause(&self, input: &CauseCreate) -> Result<Cause, ApiError> {
        self.post_json("/causes", input).await
    }

    /// `GET /causes/{id}/timeline` — read-only audit log.
    pub async fn get_timeline(&self, id: i64) -> Result<Vec<TimelineEvent>, ApiError> {
        self.get_json(&format!("/causes/{id}/timeline")).await
    }

    // -- own causes --------------------------------------------------------

    /// `GET /me/causes`.
    pub async fn list_my_causes(&self) -> Result<Vec<Cause>, ApiError> {
        self.get_json("/me/causes").await
    }

    /// `PATCH /me/causes/{id}`.
    pub async fn update_my_cause(
        &self,
        id: i64,
        update: &CauseUserUpdate,
    ) -> Result<Cause, ApiError> {
        let request = self.http.patch(self.url(&format!("/me/causes/{id}"))).json(update);
        self.send_json(request).await
    }

    /// `POST /me/causes/{id}/submit` — resubmit for review.
    pub async fn resubmit_my_cause(&self, id: i64) -> Result<Cause, ApiError> {
        self.post_json(&format!("/me/causes/{id}/submit"), &serde_json::json!({}))
            .await
    }

    // -- admin -------------------------------------------------------------

    /// `GET /admin/causes[?status=]`.
    pub async fn list_all_causes(
        &self,
        status: Option<CauseStatus>,
    ) -> Result<Vec<Cause>, ApiError> {
        let mut request = self.http.get(self.url("/admin/causes"));
        if let Some(status) = status {
            request = request.query(&[("status", status.as_str())]);
        }
        self.send_json(request).await
    }

    /// `POST /admin/causes/{id}/approve`.
    pub async fn approve_cause(&self, id: i64) -> Result<Cause, ApiError> {
        self.post_json(&format!("/admin/causes/{id}/approve"), &serde_json::json!({}))
            .await
    }

    /// `POST /admin/causes/{id}/reject` with review notes.
    pub async fn reject_cause(&self, id: i64, review_notes: &str) -> Result<Cause, ApiError> {
        self.post_json(
            &format!("/admin/causes/{id}/reject"),
            &serde_json::json!({ "review_notes": review_notes }),
        )
        .await
    }

    /// `PATCH /admin/causes/{id}`.
    pub async fn update_cause_admin(
        &self,
        id: i64,
        update: &CauseAdminUpdate,
    ) -> Result<Cause, ApiError> {
        let request = self
            .http
            .patch(self.url(&format!("/admin/causes/{id}")))
            .json(update);
        self.send_json(request).await
    }

    /// `POST /admin/causes/{id}/timeline` — append an audit event.
    pub async fn add_timeline_event(
        &self,
        id: i64,
        event: &TimelineEventCreate,
    ) -> Result<TimelineEvent, ApiError> {
        self.post_json(&format!("/admin/causes/{id}/timeline"), event)
            .await
    }

    /// `DELETE /admin/causes/{id}`.
    pub async fn delete_cause(&self, id: i64) -> Result<(), ApiError> {
        let request = self.http.delete(self.url(&format!("/admin/causes/{id}")));
        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        self.check_response(response).await
    }

    // -- plumbing ----------------------------------------------------------

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.send_json(self.http.get(self.url(path))).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        self.send_json(self.http.post(self.url(path)).json(body)).await
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self
            .with_auth(request)
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;
        self.check_response_json(response).await
    }

    /// Check response status; discard any body.
    async fn check_response(&self, response: reqwest::Response) -> Result<(), ApiError> {
        if response.status().is_success() {
            return Ok(());
        }
        Err(self.status_error(response).await)
    }

    /// Check response status and parse the JSON body.
    async fn check_response_json<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        if !response.status().is_success() {
            return Err(self.status_error(response).await);
        }
        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn status_error(&self, response: reqwest::Response) -> ApiError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let detail = extract_detail(&body).unwrap_or_else(|| format!("HTTP {status}"));
        tracing::warn!(status, %detail, "Backend request failed");
        ApiError::Status { status, detail }
    }
}

/// Pull the human-readable `detail` field out of a backend error body.
fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_detail_string() {
        assert_eq!(
            extract_detail(r#"{"detail":"Incorrect email or password"}"#).as_deref(),
            Some("Incorrect email or password")
        );
    }

    #[test]
    fn test_extract_detail_missing_or_malformed() {
        assert_eq!(extract_detail(r#"{"error":"nope"}"#), None);
        assert_eq!(extract_detail("<html>502</html>"), None);
        assert_eq!(extract_detail(""), None);
    }

    #[test]
    fn test_extract_detail_non_string() {
        // FastAPI validation errors put an array in `detail`.
        let detail = extract_detail(r#"{"detail":[{"msg":"field required"}]}"#).unwrap();
        assert!(detail.contains("field required"));
    }
}
