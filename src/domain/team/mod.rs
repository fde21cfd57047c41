//! Team domain module
//!
//! Teams are the unit of authorization: access to an application is granted
//! and revoked team by team, never user by user. Team membership itself is
//! managed by external collaborators and is read-only here.

mod entity;
mod validation;

pub use entity::{Team, TeamName};
pub use validation::{validate_team_name, TeamValidationError};
