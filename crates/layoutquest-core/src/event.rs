//! Lifecycle events produced by commands.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Envelope fields shared by every event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventMetadata {
    pub event_id: Uuid,
    /// Dotted name such as `guild.quest_failed`.
    pub event_type: String,
    /// Copied from the command that produced the event.
    pub correlation_id: Uuid,
    /// Taken from the injected clock, not the wall clock.
    pub occurred_at: DateTime<Utc>,
}

/// An event together with its envelope.
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    fn event_type(&self) -> &'static str;

    /// The payload alone, as JSON, for logging.
    fn to_payload(&self) -> serde_json::Value;

    fn metadata(&self) -> &EventMetadata;
}
