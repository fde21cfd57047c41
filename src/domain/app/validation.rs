//! Application name validation

use thiserror::Error;

/// Errors that can occur during application validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AppValidationError {
    #[error("Application name cannot be empty")]
    EmptyName,

    #[error("Application name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Application name can only contain alphanumeric characters and hyphens")]
    InvalidCharacters,

    #[error("Application name cannot start or end with a hyphen")]
    InvalidFormat,
}

const MAX_APP_NAME_LENGTH: usize = 63;

/// Validate an application name
///
/// Names become directory names and clone URLs, so anything outside
/// alphanumerics and hyphens is rejected up front.
pub fn validate_app_name(name: &str) -> Result<(), AppValidationError> {
    if name.is_empty() {
        return Err(AppValidationError::EmptyName);
    }

    if name.len() > MAX_APP_NAME_LENGTH {
        return Err(AppValidationError::NameTooLong(MAX_APP_NAME_LENGTH));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(AppValidationError::InvalidCharacters);
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(AppValidationError::InvalidFormat);
    }

    Ok(())
}
