//! Data models for reader registration.

mod profile;
mod registration;

pub use profile::{ProfileInfo, ProfileRecord, Role, DEFAULT_READER_QUOTA};
pub use registration::{Account, AccountId, AccountMetadata, RegistrationForm};
