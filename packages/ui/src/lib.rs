//! This crate contains all shared UI for the workspace.

mod session;
pub use session::{
    use_api, use_session, AppApi, AppSessionStore, AppStorage, SessionContext, SessionProvider,
};

mod notice;
pub use notice::{push_notice, use_notices, Notice, NoticeHost, NoticeKind, NoticeState};

mod guard;
pub use guard::use_guard;

mod cause_card;
pub use cause_card::{CauseCard, ProgressBar};

mod status_badge;
pub use status_badge::StatusBadge;

mod navbar;
pub use navbar::Navbar;

pub mod format;
pub use format::format_usd;

pub mod paging;
pub use paging::Pagination;
