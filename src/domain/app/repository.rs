//! Application repository trait

use async_trait::async_trait;

use super::entity::{App, AppName};
use crate::domain::DomainError;

/// Repository for application records
///
/// `create` delegates uniqueness to the backing store's atomic insert; there
/// is no look-then-insert anywhere, so concurrent creations of the same name
/// cannot both succeed.
#[async_trait]
pub trait AppRepository: Send + Sync + std::fmt::Debug {
    /// Get an application by name, `NotFound` if absent
    async fn get(&self, name: &AppName) -> Result<App, DomainError>;

    /// Insert a new record, `DuplicateName` if the name is taken
    async fn create(&self, app: App) -> Result<App, DomainError>;

    /// Persist an in-memory application back to the store, `NotFound` if the
    /// record no longer exists
    async fn update(&self, app: App) -> Result<App, DomainError>;

    /// Remove a record by name, `NotFound` if absent
    async fn delete(&self, name: &AppName) -> Result<(), DomainError>;

    /// Every stored record, in insertion order
    async fn all(&self) -> Result<Vec<App>, DomainError>;

    /// Total number of records
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check whether a record exists
    async fn exists(&self, name: &AppName) -> Result<bool, DomainError>;
}
