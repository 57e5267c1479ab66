use dioxus::prelude::*;

use ui::SessionProvider;
use views::{
    AddCause, AdminCauseDetails, AdminCauses, AdminReview, AllCauses, CauseDetails, EditCause,
    Home, Login, Profile, Register, Shell,
};

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/all-causes")]
    AllCauses {},
    #[route("/cause/:id")]
    CauseDetails { id: i64 },
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[route("/profile")]
    Profile {},
    #[route("/add-cause")]
    AddCause {},
    #[route("/edit-cause/:id")]
    EditCause { id: i64 },
    #[route("/admin/review")]
    AdminReview {},
    #[route("/admin/causes")]
    AdminCauses {},
    #[route("/admin/causes/:id")]
    AdminCauseDetails { id: i64 },
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        SessionProvider {
            Router::<Route> {}
        }
    }
}
