//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub const AUTH_CSS: Asset = asset!("/assets/auth.css");

mod register_form;
pub use register_form::RegisterForm;

mod login_panel;
pub use login_panel::LoginPanel;

mod timer;
pub use timer::sleep;
