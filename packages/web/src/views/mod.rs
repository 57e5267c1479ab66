mod shell;
pub use shell::Shell;

mod home;
pub use home::Home;

mod all_causes;
pub use all_causes::AllCauses;

mod cause_details;
pub use cause_details::CauseDetails;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod profile;
pub use profile::Profile;

mod add_cause;
pub use add_cause::AddCause;

mod edit_cause;
pub use edit_cause::EditCause;

mod admin_review;
pub use admin_review::AdminReview;

mod admin_causes;
pub use admin_causes::AdminCauses;

mod admin_cause_details;
pub use admin_cause_details::AdminCauseDetails;
