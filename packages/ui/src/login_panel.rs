//! Sign-in landing panel, the target of the post-registration redirect.

use api::messages;
use dioxus::prelude::*;

/// Login panel with a way back to registration.
#[component]
pub fn LoginPanel() -> Element {
    rsx! {
        div {
            class: "auth-container",
            div {
                class: "auth-box",
                h1 { {messages::SIGN_IN} }
                p {
                    class: "auth-footer",
                    "Chưa có tài khoản? "
                    a { href: "/register", {messages::SUBMIT} }
                }
            }
        }
    }
}
