//! The player's persisted quest progress.

use serde::{Deserialize, Serialize};

/// XP needed per level.
pub const XP_PER_LEVEL: u64 = 500;

/// Level reached with `xp` total experience: `1 + floor(xp / 500)`.
#[must_use]
pub fn level_for_xp(xp: u64) -> u32 {
    u32::try_from(1 + xp / XP_PER_LEVEL).unwrap_or(u32::MAX)
}

/// A quest the player has accepted and not yet finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveQuest {
    pub quest_id: String,
    /// Acceptance time, ms since epoch.
    pub start_time: i64,
    /// Deadline, ms since epoch.
    pub end_time: i64,
}

/// A quest finished before its deadline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletedQuest {
    pub quest_id: String,
    /// Completion time, ms since epoch.
    pub finish_time: i64,
}

/// The persisted progress record.
///
/// A quest id is never both active and completed. `failed_quests` is a
/// history and may overlap with either once a quest is retried.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    pub level: u32,
    pub current_xp: u64,
    pub active_quests: Vec<ActiveQuest>,
    pub completed_quests: Vec<CompletedQuest>,
    pub failed_quests: Vec<String>,
}

impl Default for UserProgress {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            active_quests: Vec::new(),
            completed_quests: Vec::new(),
            failed_quests: Vec::new(),
        }
    }
}

/// Where the player sits inside their current level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LevelBand {
    pub level: u32,
    /// XP earned since the current level started.
    pub xp_into_level: u64,
    /// XP still needed to reach the next level.
    pub xp_to_next_level: u64,
}

impl UserProgress {
    /// The active entry for `quest_id`, if any.
    #[must_use]
    pub fn active(&self, quest_id: &str) -> Option<&ActiveQuest> {
        self.active_quests.iter().find(|entry| entry.quest_id == quest_id)
    }

    /// The completion entry for `quest_id`, if any.
    #[must_use]
    pub fn completed(&self, quest_id: &str) -> Option<&CompletedQuest> {
        self.completed_quests
            .iter()
            .find(|entry| entry.quest_id == quest_id)
    }

    #[must_use]
    pub fn is_active(&self, quest_id: &str) -> bool {
        self.active(quest_id).is_some()
    }

    #[must_use]
    pub fn is_completed(&self, quest_id: &str) -> bool {
        self.completed(quest_id).is_some()
    }

    #[must_use]
    pub fn is_failed(&self, quest_id: &str) -> bool {
        self.failed_quests.iter().any(|id| id == quest_id)
    }

    #[must_use]
    pub fn level_band(&self) -> LevelBand {
        let xp_into_level = self.current_xp % XP_PER_LEVEL;
        LevelBand {
            level: level_for_xp(self.current_xp),
            xp_into_level,
            xp_to_next_level: XP_PER_LEVEL - xp_into_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_xp_steps_every_500() {
        assert_eq!(level_for_xp(0), 1);
        assert_eq!(level_for_xp(499), 1);
        assert_eq!(level_for_xp(500), 2);
        assert_eq!(level_for_xp(1_250), 3);
    }

    #[test]
    fn test_default_progress_is_empty_level_one() {
        let progress = UserProgress::default();

        assert_eq!(progress.level, 1);
        assert_eq!(progress.current_xp, 0);
        assert!(progress.active_quests.is_empty());
        assert!(progress.completed_quests.is_empty());
        assert!(progress.failed_quests.is_empty());
    }

    #[test]
    fn test_serializes_with_camel_case_keys() {
        let progress = UserProgress {
            active_quests: vec![ActiveQuest {
                quest_id: "Q1".to_owned(),
                start_time: 0,
                end_time: 3_600_000,
            }],
            ..UserProgress::default()
        };

        let json = serde_json::to_value(&progress).unwrap();

        assert_eq!(json["currentXp"], 0);
        assert_eq!(json["activeQuests"][0]["questId"], "Q1");
        assert_eq!(json["activeQuests"][0]["endTime"], 3_600_000);
        assert!(json["completedQuests"].is_array());
        assert!(json["failedQuests"].is_array());
    }

    #[test]
    fn test_level_band_splits_xp() {
        let progress = UserProgress {
            level: 3,
            current_xp: 1_100,
            ..UserProgress::default()
        };

        let band = progress.level_band();

        assert_eq!(band.level, 3);
        assert_eq!(band.xp_into_level, 100);
        assert_eq!(band.xp_to_next_level, 400);
    }
}
