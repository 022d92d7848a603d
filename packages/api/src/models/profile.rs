//! # Reader profile model
//!
//! Defines the two representations of a library member's profile:
//!
//! ## [`ProfileRecord`]
//!
//! The row inserted into the hosted `users` table right after the auth provider
//! creates the account. Columns:
//!
//! - `id` — the auth provider's account identifier. A profile never gets an id of
//!   its own, so every profile joins 1:1 with exactly one account.
//! - `email`, `full_name`, `phone` — copied from the registration form; a blank
//!   phone is stored as `NULL`.
//! - `role` — always [`Role::Reader`] for self-registration.
//! - `quota` — maximum concurrent borrowings, [`DEFAULT_READER_QUOTA`] for new readers.
//! - `current_borrowing` — starts at zero.
//! - `penalty_status` — empty string means no penalty.
//!
//! The [`ProfileRecord::to_info`] method projects this into a [`ProfileInfo`].
//!
//! ## [`ProfileInfo`]
//!
//! A client-safe subset returned to the browser once registration completes. The
//! helper [`ProfileInfo::display_name`] returns the reader's name or falls back to
//! their email address.

use serde::{Deserialize, Serialize};

use super::registration::{AccountId, RegistrationForm};

/// Borrowing quota granted to a newly registered reader.
pub const DEFAULT_READER_QUOTA: u32 = 5;

/// Library role stored in the `role` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Reader,
    Librarian,
    Admin,
}

/// Full profile row for the `users` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    pub id: AccountId,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub quota: u32,
    pub current_borrowing: u32,
    pub penalty_status: String,
}

impl ProfileRecord {
    /// Build the default reader profile for a freshly created account.
    pub fn reader(id: AccountId, form: &RegistrationForm) -> Self {
        Self {
            id,
            email: form.email.clone(),
            full_name: form.full_name.clone(),
            phone: form.phone().map(str::to_string),
            role: Role::Reader,
            quota: DEFAULT_READER_QUOTA,
            current_borrowing: 0,
            penalty_status: String::new(),
        }
    }

    /// Convert to ProfileInfo for client consumption.
    pub fn to_info(&self) -> ProfileInfo {
        ProfileInfo {
            id: self.id.to_string(),
            email: self.email.clone(),
            full_name: self.full_name.clone(),
            phone: self.phone.clone(),
            role: self.role,
            quota: self.quota,
        }
    }
}

/// Profile information safe to send to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub id: String,
    pub email: String,
    pub full_name: String,
    pub phone: Option<String>,
    pub role: Role,
    pub quota: u32,
}

impl ProfileInfo {
    /// Get display name, falling back to email if the name is blank.
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}
