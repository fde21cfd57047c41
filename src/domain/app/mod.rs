//! Application domain module
//!
//! An application is the deployable unit and the scope of authorization:
//! teams are granted and revoked access on it, and a git repository is
//! provisioned 1:1 with it. This module owns the entity, its access-control
//! operations, and the repository trait; orchestration lives in the
//! infrastructure layer.

mod entity;
pub mod repository;
mod validation;

pub use entity::{team_has_access, App, AppName, AppState};
pub use repository::AppRepository;
pub use validation::{validate_app_name, AppValidationError};
