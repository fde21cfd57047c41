//! Generic storage abstraction
//!
//! A document-style store: one `Storage<E>` per collection, filter-by-key
//! semantics only. The wire protocol behind an implementation is out of scope
//! here.

mod entity;
mod repository;

pub use entity::{StorageEntity, StorageKey};
pub use repository::Storage;
