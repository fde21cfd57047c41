//! User validation

use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Email cannot exceed {0} characters")]
    EmailTooLong(usize),

    #[error("Email must contain a '@'")]
    MissingAtSign,
}

const MAX_EMAIL_LENGTH: usize = 254;

/// Validate a user email
///
/// Only the shape is checked; deliverability is not this core's concern.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    if email.len() > MAX_EMAIL_LENGTH {
        return Err(UserValidationError::EmailTooLong(MAX_EMAIL_LENGTH));
    }

    if !email.contains('@') {
        return Err(UserValidationError::MissingAtSign);
    }

    Ok(())
}
