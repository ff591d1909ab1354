//! Layout Quest: record store.
//!
//! Implements the `RecordStore` port from `layoutquest-core` on the local
//! filesystem.

pub mod file_record_store;

pub use file_record_store::FileRecordStore;
