//! All things related to the durable storage of backup snapshots

use async_trait::async_trait;
use thiserror::Error;

#[cfg(not(feature = "disk"))]
use memory::Memory;

#[cfg(feature = "disk")]
pub mod disk;
#[cfg(not(feature = "disk"))]
mod memory;

/// Setup the storage
#[cfg(not(feature = "disk"))]
#[allow(clippy::unused_async)]
pub async fn setup() -> Memory {
    Memory::new()
}

/// Setup the storage
#[cfg(feature = "disk")]
#[allow(clippy::unused_async)]
pub async fn setup() -> disk::Disk {
    disk::Disk::new()
}

/// Storage errors
#[derive(Debug, Error)]
pub enum Error {
    /// A read from the underlying storage failed
    #[error("Read error: {0}")]
    Read(String),

    /// A write to the underlying storage failed
    #[error("Write error: {0}")]
    Write(String),
}

/// Result type for all storage interactions
pub type Result<T> = core::result::Result<T, Error>;

/// Storage with all supported operations
///
/// A string-valued key-value store; values are JSON documents
#[async_trait]
pub trait Storage: Clone + Send + Sync + 'static {
    /// Read the value stored under `key`
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, overwriting any previous value
    async fn set(&self, key: &str, value: &str) -> Result<()>;
}
