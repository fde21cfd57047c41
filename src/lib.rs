//! Application lifecycle core for a multi-tenant deployment platform
//!
//! Manages application records, team-based access control over them, and the
//! git repository provisioned 1:1 with every application. Persistence and
//! repository provisioning are deliberately non-transactional with each other;
//! see `AppService` for the exact ordering guarantees.

pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

pub use domain::{
    app::{team_has_access, App, AppName, AppRepository, AppState},
    team::{Team, TeamName},
    user::User,
    DomainError,
};
pub use infrastructure::{
    app::{AppService, CreateAppRequest, StorageAppRepository},
    git::RepositoryProvisioner,
    logging::init_logging,
    storage::InMemoryStorage,
};
