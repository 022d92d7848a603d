//! # API crate — reader registration for the library web app
//!
//! This crate holds everything the registration page needs that is not markup:
//! the form model, the validator, the orchestrator that creates the account and
//! then the reader profile, the backends it talks to, and the Dioxus server
//! function the front end calls.
//!
//! ## Modules
//!
//! | Module | Feature gate | Purpose |
//! |--------|-------------|---------|
//! | [`backend`] | partly `server` | [`RegistrationBackend`] seam, Supabase REST client and its config |
//! | [`error`] | — | Validation, auth, backend and registration errors; the [`FailureKind`] tag |
//! | [`messages`] | — | Vietnamese UI strings and the failure-kind → message mapping |
//! | [`models`] | — | `RegistrationForm`, `AccountId`, `ProfileRecord` and its client projection |
//! | [`register`] | — | [`Registrar`], [`RegistrationPhase`], the post-success redirect |
//! | [`validate`] | — | Required-field and password-length checks |
//!
//! ## Server functions exposed here
//!
//! [`register_reader`] is compiled twice: once with the real logic (behind
//! `#[cfg(feature = "server")]`) and once as a thin client stub that forwards the
//! call over HTTP.

use dioxus::prelude::*;

pub mod backend;
pub mod error;
pub mod messages;
pub mod models;
pub mod register;
pub mod validate;

pub use backend::RegistrationBackend;
pub use error::{FailureKind, RegisterError, RegisterFailure, ValidationError};
pub use models::{ProfileInfo, RegistrationForm};
pub use register::{Redirect, RegisterOutcome, Registrar, RegistrationPhase};
pub use validate::validate;

/// Register a reader: create the account, then the profile row.
///
/// Rejections come back as [`RegisterOutcome::Rejected`] so the failure kind
/// survives the trip to the browser. `Err` is reserved for a server that cannot
/// reach its backend configuration.
#[cfg(feature = "server")]
#[post("/api/auth/register")]
pub async fn register_reader(form: RegistrationForm) -> Result<RegisterOutcome, ServerFnError> {
    let client = backend::get_client().await.map_err(|e| {
        tracing::error!("Supabase client unavailable: {}", e);
        ServerFnError::new(e)
    })?;

    let registrar = Registrar::new(client.clone());
    Ok(registrar.submit(&form).await)
}

#[cfg(not(feature = "server"))]
#[post("/api/auth/register")]
pub async fn register_reader(form: RegistrationForm) -> Result<RegisterOutcome, ServerFnError> {
    Err(ServerFnError::new("Server only"))
}
