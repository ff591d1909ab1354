//! Authored quest data.

use serde::{Deserialize, Serialize};

/// Milliseconds in one hour; countdowns are authored in whole hours.
pub const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Quest difficulty tier, ordered from lowest (`F`) to highest (`SSS`).
#[allow(clippy::upper_case_acronyms)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    F,
    E,
    D,
    C,
    B,
    A,
    S,
    SS,
    SSS,
}

/// A static, authored unit of work on the quest board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quest {
    /// Stable quest identifier.
    pub id: String,
    /// Difficulty tier.
    pub rank: Rank,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// XP granted on an on-time completion.
    pub xp_reward: u32,
    /// Time allowed between accepting and completing, in hours.
    pub countdown_hours: u32,
    /// Checklist shown to the player.
    #[serde(default)]
    pub requirements: Vec<String>,
    /// Documentation the quest is about.
    pub reference_url: String,
}

impl Quest {
    /// The countdown converted to milliseconds.
    #[must_use]
    pub fn countdown_millis(&self) -> i64 {
        i64::from(self.countdown_hours) * MILLIS_PER_HOUR
    }
}
