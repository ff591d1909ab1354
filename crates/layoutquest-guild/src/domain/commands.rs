//! Commands for the Guild Hall context.

use layoutquest_core::command::Command;
use uuid::Uuid;

/// Command to accept a quest from the board.
#[derive(Debug, Clone)]
pub struct AcceptQuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quest to accept.
    pub quest_id: String,
}

impl Command for AcceptQuest {
    fn command_type(&self) -> &'static str {
        "guild.accept_quest"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to complete an active quest.
#[derive(Debug, Clone)]
pub struct CompleteQuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quest to complete.
    pub quest_id: String,
}

impl Command for CompleteQuest {
    fn command_type(&self) -> &'static str {
        "guild.complete_quest"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to fail every active quest whose deadline has passed.
#[derive(Debug, Clone)]
pub struct CheckExpiredQuests {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
}

impl Command for CheckExpiredQuests {
    fn command_type(&self) -> &'static str {
        "guild.check_expired_quests"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}

/// Command to hand in work for an active quest: verify, then complete.
#[derive(Debug, Clone)]
pub struct SubmitQuest {
    /// The correlation ID for tracing.
    pub correlation_id: Uuid,
    /// The quest being handed in.
    pub quest_id: String,
    /// Link to the player's work.
    pub link: String,
}

impl Command for SubmitQuest {
    fn command_type(&self) -> &'static str {
        "guild.submit_quest"
    }

    fn correlation_id(&self) -> Uuid {
        self.correlation_id
    }
}
