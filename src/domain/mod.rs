//! Domain layer - Core business logic and entities

pub mod app;
pub mod error;
pub mod storage;
pub mod team;
pub mod user;

pub use app::{
    team_has_access, validate_app_name, App, AppName, AppRepository, AppState,
    AppValidationError,
};
pub use error::DomainError;
pub use storage::{Storage, StorageEntity, StorageKey};
pub use team::{validate_team_name, Team, TeamName, TeamValidationError};
pub use user::{validate_email, User, UserValidationError};
