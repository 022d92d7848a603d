//! Login page view.

use dioxus::prelude::*;
use ui::LoginPanel;

/// Login page component.
#[component]
pub fn Login() -> Element {
    rsx! {
        LoginPanel {}
    }
}
