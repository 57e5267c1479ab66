//! # API crate — typed REST client for the Fundraise backend
//!
//! The sole channel between the UI and the backend-held cause, user, and
//! timeline state. Nothing here holds authoritative data: every mutation is
//! a request/response round trip and the views re-render whatever the
//! backend returns.
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: `Cause`, `CauseStatus` (with the lifecycle transition table), `TimelineEvent`, auth and update payloads |
//! | [`client`] | [`ApiClient`] — request shaping and (de)serialization over `reqwest`, bearer token read from the session store |
//! | [`error`] | [`ApiError`] — transport / status / decode taxonomy, backend detail text surfaced verbatim |
//! | [`saga`] | The two-step edit-and-resubmit flow with its named partial-success outcome |

pub mod client;
pub mod error;
pub mod models;
pub mod saga;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{
    Cause, CauseAdminUpdate, CauseCreate, CauseStatus, CauseUserUpdate, LoginCredentials,
    LoginResponse, RegisterData, TimelineEvent, TimelineEventCreate,
};
pub use saga::{edit_and_resubmit, CauseEditor, EditOutcome};

pub use store::{Role, User};
