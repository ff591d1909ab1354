//! Durable key-value record abstraction.
//!
//! Progress is persisted as whole serialized records under well-known keys,
//! the same contract a browser's local storage offers. Implementations do not
//! interpret the record contents.

use async_trait::async_trait;

use crate::error::DomainError;

/// Storage port for whole-record reads and overwrites.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Reads the record stored under `key`, or `None` if there is none.
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError>;

    /// Replaces the record stored under `key` with `value`.
    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError>;
}
