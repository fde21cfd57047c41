//! Infrastructure layer - Storage backends, git provisioning, services

pub mod app;
pub mod git;
pub mod logging;
pub mod storage;

pub use app::{AppService, CreateAppRequest, StorageAppRepository};
pub use git::RepositoryProvisioner;
pub use logging::init_logging;
pub use storage::InMemoryStorage;
