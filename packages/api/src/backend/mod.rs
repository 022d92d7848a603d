//! # Registration backends
//!
//! [`RegistrationBackend`] is the seam between the orchestrator and the services
//! that actually hold accounts and profiles. The orchestrator is handed a backend
//! at construction time; the server uses [`SupabaseClient`], and unit tests use an
//! in-process backend with a call log and failure injection.
//!
//! | Backend | Feature gate | Purpose |
//! |---------|-------------|---------|
//! | `MemoryBackend` | `cfg(test)` | In-process accounts and profiles with a call log and failure injection |
//! | [`SupabaseClient`] | `server` | Supabase Auth sign-up, PostgREST insert into `users`, admin delete |
//!
//! The server-side singleton is reached through [`get_client`].

use crate::error::BackendError;
use crate::models::{Account, AccountId, AccountMetadata, ProfileRecord};

#[cfg(test)]
mod memory;
#[cfg(test)]
pub use memory::{BackendCall, MemoryBackend};

#[cfg(feature = "server")]
mod client;
#[cfg(feature = "server")]
mod config;
#[cfg(feature = "server")]
mod supabase;

#[cfg(feature = "server")]
pub use client::get_client;
#[cfg(feature = "server")]
pub use config::SupabaseConfig;
#[cfg(feature = "server")]
pub use supabase::SupabaseClient;

/// Async interface to the account provider and the profile table.
pub trait RegistrationBackend {
    /// Create an account. `Ok(None)` means the provider accepted the request but
    /// handed back no identity.
    fn create_account(
        &self,
        email: &str,
        password: &str,
        metadata: &AccountMetadata,
    ) -> impl std::future::Future<Output = Result<Option<Account>, BackendError>>;

    /// Insert a single profile row, as the new user when `access_token` is given.
    fn insert_profile(
        &self,
        profile: &ProfileRecord,
        access_token: Option<&str>,
    ) -> impl std::future::Future<Output = Result<(), BackendError>>;

    /// Remove an account that was created moments ago.
    ///
    /// Backends without the needed privileges return [`BackendError::Unsupported`].
    fn delete_account(
        &self,
        id: &AccountId,
    ) -> impl std::future::Future<Output = Result<(), BackendError>>;
}
