//! In-memory storage implementation

use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::storage::{Storage, StorageEntity, StorageKey};
use crate::domain::DomainError;

#[derive(Debug)]
struct Inner<E> {
    entities: HashMap<String, E>,
    /// Keys in insertion order; `list` walks this so a session always sees
    /// records in the order they were created.
    order: Vec<String>,
}

impl<E> Inner<E> {
    fn new() -> Self {
        Self {
            entities: HashMap::new(),
            order: Vec::new(),
        }
    }
}

/// Thread-safe in-memory storage implementation
///
/// Useful for testing and development. Data is lost when the process
/// terminates. Uniqueness on `create` is enforced under the write lock, so
/// the insert itself is the atomic existence check.
#[derive(Debug)]
pub struct InMemoryStorage<E>
where
    E: StorageEntity,
{
    inner: RwLock<Inner<E>>,
}

impl<E> Default for InMemoryStorage<E>
where
    E: StorageEntity,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<E> InMemoryStorage<E>
where
    E: StorageEntity,
{
    /// Creates a new empty in-memory storage
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::new()),
        }
    }

    /// Creates storage pre-populated with entities
    pub fn with_entities(entities: Vec<E>) -> Self {
        let storage = Self::new();
        {
            let mut inner = storage.inner.write().unwrap();

            for entity in entities {
                let key = entity.key().as_str().to_string();
                if inner.entities.insert(key.clone(), entity).is_none() {
                    inner.order.push(key);
                }
            }
        }
        storage
    }
}

#[async_trait]
impl<E> Storage<E> for InMemoryStorage<E>
where
    E: StorageEntity + 'static,
{
    async fn get(&self, key: &E::Key) -> Result<Option<E>, DomainError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner.entities.get(key.as_str()).cloned())
    }

    async fn list(&self) -> Result<Vec<E>, DomainError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner
            .order
            .iter()
            .filter_map(|key| inner.entities.get(key).cloned())
            .collect())
    }

    async fn create(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut inner = self
            .inner
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if inner.entities.contains_key(&key) {
            return Err(DomainError::duplicate_name(key));
        }

        inner.entities.insert(key.clone(), entity.clone());
        inner.order.push(key);
        Ok(entity)
    }

    async fn update(&self, entity: E) -> Result<E, DomainError> {
        let key = entity.key().as_str().to_string();
        let mut inner = self
            .inner
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        if !inner.entities.contains_key(&key) {
            return Err(DomainError::not_found(format!(
                "Entity with key '{}' not found",
                key
            )));
        }

        inner.entities.insert(key, entity.clone());
        Ok(entity)
    }

    async fn delete(&self, key: &E::Key) -> Result<bool, DomainError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        let removed = inner.entities.remove(key.as_str()).is_some();
        if removed {
            inner.order.retain(|k| k != key.as_str());
        }
        Ok(removed)
    }

    async fn clear(&self) -> Result<(), DomainError> {
        let mut inner = self
            .inner
            .write()
            .map_err(|e| DomainError::storage(format!("Failed to acquire write lock: {}", e)))?;

        inner.entities.clear();
        inner.order.clear();
        Ok(())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner.entities.len())
    }

    async fn exists(&self, key: &E::Key) -> Result<bool, DomainError> {
        let inner = self
            .inner
            .read()
            .map_err(|e| DomainError::storage(format!("Failed to acquire read lock: {}", e)))?;

        Ok(inner.entities.contains_key(key.as_str()))
    }
}
