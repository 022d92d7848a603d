//! Registration page view.

use dioxus::prelude::*;
use ui::RegisterForm;

use crate::Route;

/// Register page component.
#[component]
pub fn Register() -> Element {
    let nav = use_navigator();

    rsx! {
        RegisterForm {
            on_redirect: move |_route: &'static str| {
                nav.replace(Route::Login {});
            },
        }
    }
}
