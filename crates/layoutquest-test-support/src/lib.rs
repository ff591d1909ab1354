//! Shared test fakes and utilities for Layout Quest.

mod clock;
mod generator;
mod store;

pub use clock::{FixedClock, ManualClock};
pub use generator::{CannedTextGenerator, FailingTextGenerator, SilentTextGenerator};
pub use store::{FailingRecordStore, InMemoryRecordStore, SlowRecordStore};
