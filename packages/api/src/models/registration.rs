//! Form input and the account identity handed back by the auth provider.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four values collected by the registration form.
///
/// `phone` is optional; an empty string means the reader left it blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub phone: String,
}

impl RegistrationForm {
    /// Phone number, or `None` if the field was left blank.
    pub fn phone(&self) -> Option<&str> {
        if self.phone.is_empty() {
            None
        } else {
            Some(&self.phone)
        }
    }

    /// Metadata attached to the account at creation time.
    pub fn metadata(&self) -> AccountMetadata {
        AccountMetadata {
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
        }
    }
}

/// User metadata stored alongside the account by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountMetadata {
    pub full_name: String,
    pub phone: String,
}

/// Opaque account identifier issued by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountId(String);

impl AccountId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// An account handed back by the auth provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    /// Session token for the new user, present when the provider signed them in
    /// right away. Table writes made with it run as that user.
    pub access_token: Option<String>,
}

impl Account {
    pub fn new(id: AccountId) -> Self {
        Self {
            id,
            access_token: None,
        }
    }

    /// Builder method to attach the sign-up session token.
    pub fn with_access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }
}

impl fmt::Display for AccountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
