//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Team name can only contain alphanumeric characters and hyphens")]
    InvalidCharacters,

    #[error("Team name cannot start or end with a hyphen")]
    InvalidFormat,
}

const MAX_TEAM_NAME_LENGTH: usize = 50;

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.len() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        return Err(TeamValidationError::InvalidCharacters);
    }

    if name.starts_with('-') || name.ends_with('-') {
        return Err(TeamValidationError::InvalidFormat);
    }

    Ok(())
}
