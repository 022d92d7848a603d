//! Pre-flight checks run before any call to the auth provider.

use crate::error::ValidationError;
use crate::models::RegistrationForm;

/// Minimum password length, in characters.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Check required fields and password length.
///
/// Email and phone formats are left to the browser's input types and the auth
/// provider.
pub fn validate(form: &RegistrationForm) -> Result<(), ValidationError> {
    if form.full_name.is_empty() || form.email.is_empty() || form.password.is_empty() {
        return Err(ValidationError::MissingRequired);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort);
    }
    Ok(())
}
