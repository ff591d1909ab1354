//! Read-only projections of quest state.

use serde::Serialize;

use super::progress::UserProgress;
use super::quest::{MILLIS_PER_HOUR, Quest};

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Where a quest stands for the current player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Available,
    Active,
    Completed,
    Failed,
}

/// Projects a quest's status from the progress record.
///
/// The invariants keep these sets disjoint in practice; when they are not,
/// completed wins over failed, failed over active, and active over available.
#[must_use]
pub fn derive_status(quest: &Quest, progress: &UserProgress) -> QuestStatus {
    if progress.is_completed(&quest.id) {
        QuestStatus::Completed
    } else if progress.is_failed(&quest.id) {
        QuestStatus::Failed
    } else if progress.is_active(&quest.id) {
        QuestStatus::Active
    } else {
        QuestStatus::Available
    }
}

/// Countdown text for an active quest, at minute granularity.
#[must_use]
pub fn format_time_remaining(end_time: i64, now: i64) -> String {
    let remaining = end_time - now;
    if remaining <= 0 {
        return "Expired".to_owned();
    }
    let hours = remaining / MILLIS_PER_HOUR;
    let minutes = (remaining % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    match (hours, minutes) {
        (0, 0) => "<1m left".to_owned(),
        (0, m) => format!("{m}m left"),
        (h, m) => format!("{h}h {m}m left"),
    }
}
