//! Input validation for accounts, wishlists, and items.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Maximum length of a user's display name.
pub const MAX_NAME_LEN: usize = 100;

/// Maximum length of a wishlist title or item name.
pub const MAX_TITLE_LEN: usize = 200;

/// Maximum length of a free-text description.
pub const MAX_DESCRIPTION_LEN: usize = 2000;

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

fn validate_required(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate a user's display name.
pub fn validate_user_name(name: &str) -> Result<(), CoreError> {
    validate_required("Name", name, MAX_NAME_LEN)
}

/// Validate an email address.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation("Email must be a valid address".into()));
    }
    Ok(())
}

/// Validate that a password meets minimum strength requirements.
pub fn validate_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters long"
        )));
    }
    Ok(())
}

/// Validate a wishlist title.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    validate_required("Title", title, MAX_TITLE_LEN)
}

/// Validate an item name.
pub fn validate_item_name(name: &str) -> Result<(), CoreError> {
    validate_required("Name", name, MAX_TITLE_LEN)
}

/// Validate an optional description.
pub fn validate_description(description: &str) -> Result<(), CoreError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(CoreError::Validation(format!(
            "Description must be at most {MAX_DESCRIPTION_LEN} characters"
        )));
    }
    Ok(())
}
