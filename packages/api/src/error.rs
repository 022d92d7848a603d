//! # Registration error taxonomy
//!
//! Every failure the registration flow can hit is a variant here, and each one
//! reduces to a [`FailureKind`] tag. The UI picks the message to show by matching
//! on that tag (see [`crate::messages`]); nothing downstream inspects error text.
//!
//! | Type | Raised by |
//! |------|-----------|
//! | [`ValidationError`] | [`crate::validate`], before any network call |
//! | [`AuthError`] | the auth provider during account creation |
//! | [`BackendError`] | any [`crate::backend::RegistrationBackend`] call |
//! | [`RegisterError`] | [`crate::Registrar::register`], wrapping all of the above |
//!
//! [`RegisterFailure`] is the serializable form that crosses the server function
//! boundary so the browser still sees the tag.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::validate::MIN_PASSWORD_LEN;

/// Pre-flight form problems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("full name, email and password are required")]
    MissingRequired,
    #[error("password must be at least {} characters", MIN_PASSWORD_LEN)]
    PasswordTooShort,
}

/// What the auth provider objected to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthErrorKind {
    AlreadyRegistered,
    InvalidEmail,
    WeakPassword,
    Other,
}

/// Account creation rejected by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct AuthError {
    pub kind: AuthErrorKind,
    pub message: String,
}

impl AuthError {
    pub fn new(kind: AuthErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Errors returned by a registration backend.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    /// The hosted table refused the write.
    #[error("{0}")]
    Storage(String),
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend lacks the privileges for this call.
    #[error("operation not permitted with the configured credentials")]
    Unsupported,
}

/// Everything that can end a registration attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegisterError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error("account creation returned no identity")]
    MissingIdentity,
    /// Profile insertion failed. `orphaned` is true when the account created in
    /// the first step still exists without a profile.
    #[error("failed to save user info: {message}")]
    Database { message: String, orphaned: bool },
    #[error("request failed: {0}")]
    Transport(String),
}

impl From<BackendError> for RegisterError {
    fn from(err: BackendError) -> Self {
        match err {
            BackendError::Auth(e) => RegisterError::Auth(e),
            BackendError::Storage(message) => RegisterError::Database {
                message,
                orphaned: false,
            },
            BackendError::Transport(message) => RegisterError::Transport(message),
            BackendError::Unsupported => {
                RegisterError::Transport(BackendError::Unsupported.to_string())
            }
        }
    }
}

/// Discriminated tag for every registration failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    MissingRequired,
    PasswordTooShort,
    AlreadyRegistered,
    InvalidEmail,
    WeakPassword,
    MissingIdentity,
    Database,
    Other,
}

impl RegisterError {
    pub fn kind(&self) -> FailureKind {
        match self {
            RegisterError::Validation(ValidationError::MissingRequired) => {
                FailureKind::MissingRequired
            }
            RegisterError::Validation(ValidationError::PasswordTooShort) => {
                FailureKind::PasswordTooShort
            }
            RegisterError::Auth(e) => match e.kind {
                AuthErrorKind::AlreadyRegistered => FailureKind::AlreadyRegistered,
                AuthErrorKind::InvalidEmail => FailureKind::InvalidEmail,
                AuthErrorKind::WeakPassword => FailureKind::WeakPassword,
                AuthErrorKind::Other => FailureKind::Other,
            },
            RegisterError::MissingIdentity => FailureKind::MissingIdentity,
            RegisterError::Database { .. } => FailureKind::Database,
            RegisterError::Transport(_) => FailureKind::Other,
        }
    }

    /// Serializable summary of this error.
    pub fn to_failure(&self) -> RegisterFailure {
        let detail = match self {
            RegisterError::Auth(e) => e.message.clone(),
            RegisterError::Transport(message) => message.clone(),
            _ => self.to_string(),
        };
        RegisterFailure {
            kind: self.kind(),
            detail,
        }
    }
}

/// A registration failure as sent to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterFailure {
    pub kind: FailureKind,
    /// Raw provider or transport message, kept for diagnostics and as the
    /// fallback text for [`FailureKind::Other`].
    pub detail: String,
}

impl RegisterFailure {
    /// Localized message to display on the form.
    pub fn message(&self) -> String {
        crate::messages::failure_message(self.kind, &self.detail)
    }
}

impl From<ValidationError> for RegisterFailure {
    fn from(err: ValidationError) -> Self {
        RegisterError::from(err).to_failure()
    }
}
