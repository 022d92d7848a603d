//! # Registration orchestrator
//!
//! [`Registrar`] runs one registration attempt against an injected
//! [`RegistrationBackend`]:
//!
//! 1. [`validate`] the form. Nothing is sent if this fails.
//! 2. Create the account with the auth provider.
//! 3. Insert the reader profile keyed by the new account id, authenticated with
//!    the sign-up session token when the provider issued one.
//!
//! The two calls are strictly sequential; the profile insert only starts once the
//! account exists. If the insert fails the account would be left without a
//! profile, so the registrar asks the backend to delete it again. Backends without
//! the privileges for that leave the account orphaned, which the returned
//! [`RegisterError::Database`] records.
//!
//! [`RegistrationPhase`] is the UI-facing state machine
//! (`Idle → Submitting → Succeeded | Failed`), and [`Redirect`] describes the one
//! navigation scheduled after success.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::backend::RegistrationBackend;
use crate::error::{RegisterError, RegisterFailure};
use crate::models::{Account, AccountId, ProfileInfo, ProfileRecord, RegistrationForm};
use crate::validate::validate;

/// Route shown once registration succeeds.
pub const LOGIN_ROUTE: &str = "/login";

/// Delay between the success message and the redirect.
pub const REDIRECT_DELAY: Duration = Duration::from_millis(2000);

/// A navigation to perform after a delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub route: &'static str,
    pub delay: Duration,
}

/// Result of a registration attempt as returned to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RegisterOutcome {
    Registered(ProfileInfo),
    Rejected(RegisterFailure),
}

impl From<Result<ProfileRecord, RegisterError>> for RegisterOutcome {
    fn from(result: Result<ProfileRecord, RegisterError>) -> Self {
        match result {
            Ok(profile) => RegisterOutcome::Registered(profile.to_info()),
            Err(err) => RegisterOutcome::Rejected(err.to_failure()),
        }
    }
}

/// Orchestrates account creation followed by profile insertion.
pub struct Registrar<B> {
    backend: B,
}

impl<B: RegistrationBackend> Registrar<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Register a reader. Returns the stored profile.
    pub async fn register(&self, form: &RegistrationForm) -> Result<ProfileRecord, RegisterError> {
        validate(form)?;

        let account = self
            .backend
            .create_account(&form.email, &form.password, &form.metadata())
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Account creation failed");
                RegisterError::from(e)
            })?;

        let Some(Account { id, access_token }) = account else {
            tracing::error!(email = %form.email, "Account creation returned no identity");
            return Err(RegisterError::MissingIdentity);
        };
        tracing::info!(account_id = %id, session = access_token.is_some(), "Account created");

        let profile = ProfileRecord::reader(id, form);
        if let Err(e) = self
            .backend
            .insert_profile(&profile, access_token.as_deref())
            .await
        {
            tracing::error!(account_id = %profile.id, error = %e, "Error saving user to database");
            let orphaned = !self.compensate(&profile.id).await;
            return Err(RegisterError::Database {
                message: e.to_string(),
                orphaned,
            });
        }

        tracing::info!(account_id = %profile.id, "Reader profile stored");
        Ok(profile)
    }

    /// Like [`register`](Self::register), folded into a wire-friendly outcome.
    pub async fn submit(&self, form: &RegistrationForm) -> RegisterOutcome {
        self.register(form).await.into()
    }

    /// Delete an account whose profile could not be stored.
    /// Returns true if the account is gone.
    async fn compensate(&self, id: &AccountId) -> bool {
        match self.backend.delete_account(id).await {
            Ok(()) => {
                tracing::warn!(account_id = %id, "Rolled back account after profile failure");
                true
            }
            Err(e) => {
                tracing::warn!(account_id = %id, error = %e, "Account left without a profile");
                false
            }
        }
    }
}

/// Where a registration form is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RegistrationPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded(ProfileInfo),
    Failed(RegisterFailure),
}

impl RegistrationPhase {
    /// Enter `Submitting`, clearing any previous error.
    ///
    /// Returns `None` while a submission is already in flight or after success.
    pub fn begin(&self) -> Option<Self> {
        match self {
            RegistrationPhase::Submitting | RegistrationPhase::Succeeded(_) => None,
            RegistrationPhase::Idle | RegistrationPhase::Failed(_) => {
                Some(RegistrationPhase::Submitting)
            }
        }
    }

    /// State after a finished attempt.
    pub fn finish(outcome: RegisterOutcome) -> Self {
        match outcome {
            RegisterOutcome::Registered(profile) => RegistrationPhase::Succeeded(profile),
            RegisterOutcome::Rejected(failure) => RegistrationPhase::Failed(failure),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RegistrationPhase::Submitting)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RegistrationPhase::Succeeded(_))
    }

    /// Message for the error banner, if any.
    pub fn error_message(&self) -> Option<String> {
        match self {
            RegistrationPhase::Failed(failure) => Some(failure.message()),
            _ => None,
        }
    }

    /// The navigation owed by this state. Only success schedules one.
    pub fn redirect(&self) -> Option<Redirect> {
        match self {
            RegistrationPhase::Succeeded(_) => Some(Redirect {
                route: LOGIN_ROUTE,
                delay: REDIRECT_DELAY,
            }),
            _ => None,
        }
    }
}
