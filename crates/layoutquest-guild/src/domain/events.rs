//! Domain events for the Guild Hall context.

use layoutquest_core::event::{DomainEvent, EventMetadata};
use serde::{Deserialize, Serialize};

/// Emitted when a quest is accepted (or re-accepted after failing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestAccepted {
    pub quest_id: String,
    pub start_time: i64,
    pub end_time: i64,
    /// Whether this acceptance cleared an earlier failure.
    pub retry: bool,
}

/// Emitted when a quest is completed before its deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestCompleted {
    pub quest_id: String,
    pub finish_time: i64,
    pub xp_gained: u32,
    /// Level after the XP was added.
    pub level: u32,
}

/// Why a quest failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureReason {
    /// The deadline passed with the quest still active.
    Expired,
    /// Work was submitted after the deadline.
    LateSubmission,
}

/// Emitted when an active quest fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestFailed {
    pub quest_id: String,
    pub reason: FailureReason,
}

/// Event type identifier for [`QuestAccepted`].
pub const QUEST_ACCEPTED_EVENT_TYPE: &str = "guild.quest_accepted";

/// Event type identifier for [`QuestCompleted`].
pub const QUEST_COMPLETED_EVENT_TYPE: &str = "guild.quest_completed";

/// Event type identifier for [`QuestFailed`].
pub const QUEST_FAILED_EVENT_TYPE: &str = "guild.quest_failed";

/// Event payload variants for the Guild Hall context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum QuestEventKind {
    QuestAccepted(QuestAccepted),
    QuestCompleted(QuestCompleted),
    QuestFailed(QuestFailed),
}

impl QuestEventKind {
    /// The quest this event is about.
    #[must_use]
    pub fn quest_id(&self) -> &str {
        match self {
            Self::QuestAccepted(payload) => &payload.quest_id,
            Self::QuestCompleted(payload) => &payload.quest_id,
            Self::QuestFailed(payload) => &payload.quest_id,
        }
    }

    /// Event type identifier for this payload.
    #[must_use]
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::QuestAccepted(_) => QUEST_ACCEPTED_EVENT_TYPE,
            Self::QuestCompleted(_) => QUEST_COMPLETED_EVENT_TYPE,
            Self::QuestFailed(_) => QUEST_FAILED_EVENT_TYPE,
        }
    }
}

/// Domain event envelope for the Guild Hall context.
#[derive(Debug, Clone, Serialize)]
pub struct QuestEvent {
    /// Event metadata.
    pub metadata: EventMetadata,
    /// Event-specific payload.
    pub kind: QuestEventKind,
}

impl DomainEvent for QuestEvent {
    fn event_type(&self) -> &'static str {
        self.kind.event_type()
    }

    fn to_payload(&self) -> serde_json::Value {
        // Serialization of derived Serialize types to Value is infallible.
        serde_json::to_value(&self.kind).expect("QuestEventKind serialization is infallible")
    }

    fn metadata(&self) -> &EventMetadata {
        &self.metadata
    }
}
