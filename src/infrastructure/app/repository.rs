//! Storage-backed application repository implementation

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::app::{App, AppName, AppRepository};
use crate::domain::storage::Storage;
use crate::domain::DomainError;

/// Storage-backed implementation of AppRepository
///
/// `create` goes straight to the store's atomic insert; there is no separate
/// existence check that could race with a concurrent creation of the same
/// name.
#[derive(Debug)]
pub struct StorageAppRepository {
    storage: Arc<dyn Storage<App>>,
}

impl StorageAppRepository {
    /// Create a new storage-backed repository
    pub fn new(storage: Arc<dyn Storage<App>>) -> Self {
        Self { storage }
    }

    fn not_found(name: &AppName) -> DomainError {
        DomainError::not_found(format!("Application '{}' not found", name))
    }
}

#[async_trait]
impl AppRepository for StorageAppRepository {
    async fn get(&self, name: &AppName) -> Result<App, DomainError> {
        self.storage
            .get(name)
            .await?
            .ok_or_else(|| Self::not_found(name))
    }

    async fn create(&self, app: App) -> Result<App, DomainError> {
        self.storage.create(app).await
    }

    async fn update(&self, app: App) -> Result<App, DomainError> {
        let name = app.name().clone();

        match self.storage.update(app).await {
            Err(DomainError::NotFound { .. }) => Err(Self::not_found(&name)),
            other => other,
        }
    }

    async fn delete(&self, name: &AppName) -> Result<(), DomainError> {
        if self.storage.delete(name).await? {
            Ok(())
        } else {
            Err(Self::not_found(name))
        }
    }

    async fn all(&self) -> Result<Vec<App>, DomainError> {
        self.storage.list().await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        self.storage.count().await
    }

    async fn exists(&self, name: &AppName) -> Result<bool, DomainError> {
        self.storage.exists(name).await
    }
}
