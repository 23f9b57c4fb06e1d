//! Keyed persistence for generated candidate batches.
//!
//! A `StorageMedium` is the raw string key-value backend (memory or files).
//! `StorageManager` layers JSON (de)serialization, caps and the candidate map
//! on top, and turns every failure into a logged `false` or a default value.

pub mod manager;
pub mod medium;

use async_trait::async_trait;
use thiserror::Error;

pub use manager::{StorageLimits, StorageManager};
pub use medium::{FileMedium, MemoryMedium};

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("no storage medium available")]
    Unavailable,

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Raw string key-value backend.
#[async_trait]
pub trait StorageMedium: Send + Sync {
    async fn read(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn write(&self, key: &str, value: String) -> Result<(), StorageError>;
}
