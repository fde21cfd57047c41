//! User domain module
//!
//! Users are identified by email. This core only ever reads user identity;
//! account management and authentication live elsewhere.

mod entity;
mod validation;

pub use entity::User;
pub use validation::{validate_email, UserValidationError};
