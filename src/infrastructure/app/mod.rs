//! Application infrastructure implementations

mod repository;
mod service;

pub use repository::StorageAppRepository;
pub use service::{AppService, CreateAppRequest};
