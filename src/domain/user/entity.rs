//! User entity

use serde::{Deserialize, Serialize};

use super::validation::{validate_email, UserValidationError};

/// User entity
///
/// The email is the identity key; the password is an opaque credential this
/// core never processes or exposes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Identity key
    email: String,
    /// Opaque credential - never exposed in serialization
    #[serde(skip_serializing, default)]
    password: String,
}

impl User {
    /// Create a new user
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, UserValidationError> {
        let email = email.into();
        validate_email(&email)?;

        Ok(Self {
            email,
            password: password.into(),
        })
    }

    pub fn email(&self) -> &str {
        &self.email
    }
}

impl PartialEq for User {
    /// Identity is the email; credentials never participate in comparison.
    fn eq(&self, other: &Self) -> bool {
        self.email == other.email
    }
}

impl Eq for User {}
