//! Test record stores: in-memory `RecordStore` implementations for tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use layoutquest_core::error::DomainError;
use layoutquest_core::store::RecordStore;

/// A record store backed by a `HashMap`. Records every write so tests can
/// assert on what was persisted and how often.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: Mutex<HashMap<String, String>>,
    writes: Mutex<Vec<(String, String)>>,
}

impl InMemoryRecordStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-seeded with one record. Seeding is not counted as
    /// a write.
    #[must_use]
    pub fn with_record(key: &str, value: &str) -> Self {
        let store = Self::default();
        store
            .records
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        store
    }

    /// Returns the current value stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn record(&self, key: &str) -> Option<String> {
        self.records.lock().unwrap().get(key).cloned()
    }

    /// Returns a snapshot of every `(key, value)` write, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn writes(&self) -> Vec<(String, String)> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        Ok(self.records.lock().unwrap().get(key).cloned())
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .insert(key.to_owned(), value.to_owned());
        self.writes
            .lock()
            .unwrap()
            .push((key.to_owned(), value.to_owned()));
        Ok(())
    }
}

/// An in-memory store whose reads take `delay`, widening the gap between a
/// handler's load and its save.
#[derive(Debug)]
pub struct SlowRecordStore {
    inner: InMemoryRecordStore,
    delay: Duration,
}

impl SlowRecordStore {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            inner: InMemoryRecordStore::new(),
            delay,
        }
    }

    /// Returns the current value stored under `key`.
    pub fn record(&self, key: &str) -> Option<String> {
        self.inner.record(key)
    }
}

#[async_trait]
impl RecordStore for SlowRecordStore {
    async fn read(&self, key: &str) -> Result<Option<String>, DomainError> {
        tokio::time::sleep(self.delay).await;
        self.inner.read(key).await
    }

    async fn write(&self, key: &str, value: &str) -> Result<(), DomainError> {
        self.inner.write(key, value).await
    }
}

/// A record store that always returns an infrastructure error. Useful for
/// testing error-handling paths.
#[derive(Debug)]
pub struct FailingRecordStore;

#[async_trait]
impl RecordStore for FailingRecordStore {
    async fn read(&self, _key: &str) -> Result<Option<String>, DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }

    async fn write(&self, _key: &str, _value: &str) -> Result<(), DomainError> {
        Err(DomainError::Infrastructure("storage unavailable".into()))
    }
}
