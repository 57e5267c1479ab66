//! API error types surfaced to the views.

use thiserror::Error;

/// Errors from talking to the backend. Everything here is recoverable at
/// the view level; the user retries the action.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure: the request never completed.
    #[error("Request failed: {0}")]
    Request(String),

    /// The backend answered with a non-success status. `detail` carries the
    /// backend-provided error text, or a generic `HTTP <status>` fallback
    /// when the body had none.
    #[error("{detail}")]
    Status { status: u16, detail: String },

    /// A success response whose body could not be decoded.
    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// The message shown to the user: backend detail text verbatim where
    /// available, otherwise the generic variant message.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
