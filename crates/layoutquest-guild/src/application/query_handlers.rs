//! Query handlers for the Guild Hall context.
//!
//! Read-only projections of the progress record and the quest board.

use layoutquest_core::clock::Clock;
use serde::Serialize;

use crate::application::store::ProgressStore;
use crate::domain::catalog::QuestCatalog;
use crate::domain::progress::{LevelBand, UserProgress};
use crate::domain::quest::Quest;
use crate::domain::status::{QuestStatus, derive_status, format_time_remaining};

/// The progress record plus where the player sits inside their level.
#[derive(Debug, Serialize)]
pub struct ProgressView {
    #[serde(flatten)]
    pub progress: UserProgress,
    pub level_band: LevelBand,
}

/// One quest on the board with its status for the current player.
#[derive(Debug, Serialize)]
pub struct QuestBoardEntry {
    #[serde(flatten)]
    pub quest: Quest,
    pub status: QuestStatus,
    /// Deadline of an active quest, ms since epoch.
    pub deadline: Option<i64>,
    /// Countdown text of an active quest.
    pub time_remaining: Option<String>,
    /// Completion time of a completed quest, ms since epoch.
    pub finished_at: Option<i64>,
}

/// Retrieves the current progress.
pub async fn get_progress(store: &ProgressStore) -> ProgressView {
    let progress = store.load().await;
    ProgressView {
        level_band: progress.level_band(),
        progress,
    }
}

/// Lists every quest with its derived status, ordered by rank then id.
pub async fn get_quest_board(
    catalog: &QuestCatalog,
    clock: &dyn Clock,
    store: &ProgressStore,
) -> Vec<QuestBoardEntry> {
    let progress = store.load().await;
    let now = clock.now_millis();

    let mut board: Vec<QuestBoardEntry> = catalog
        .iter()
        .map(|quest| {
            let status = derive_status(quest, &progress);
            let deadline = match status {
                QuestStatus::Active => progress.active(&quest.id).map(|entry| entry.end_time),
                _ => None,
            };
            QuestBoardEntry {
                quest: quest.clone(),
                status,
                deadline,
                time_remaining: deadline.map(|end_time| format_time_remaining(end_time, now)),
                finished_at: progress.completed(&quest.id).map(|entry| entry.finish_time),
            }
        })
        .collect();

    board.sort_by(|a, b| {
        a.quest
            .rank
            .cmp(&b.quest.rank)
            .then_with(|| a.quest.id.cmp(&b.quest.id))
    });
    board
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use layoutquest_test_support::{FixedClock, InMemoryRecordStore};

    use super::*;
    use crate::application::fixtures;
    use crate::application::store::PROGRESS_STORAGE_KEY;
    use crate::domain::progress::{ActiveQuest, CompletedQuest};

    async fn store_with(progress: &UserProgress) -> ProgressStore {
        let store = ProgressStore::new(Arc::new(InMemoryRecordStore::new()));
        store.save(progress).await.unwrap();
        store
    }

    #[tokio::test]
    async fn test_get_progress_includes_level_band() {
        // Arrange
        let store = store_with(&UserProgress {
            level: 3,
            current_xp: 1_250,
            ..UserProgress::default()
        })
        .await;

        // Act
        let view = get_progress(&store).await;

        // Assert
        assert_eq!(view.progress.current_xp, 1_250);
        assert_eq!(view.level_band.level, 3);
        assert_eq!(view.level_band.xp_into_level, 250);
        assert_eq!(view.level_band.xp_to_next_level, 250);
    }

    #[tokio::test]
    async fn test_get_progress_serializes_flat_camel_case_record() {
        let store = ProgressStore::new(Arc::new(InMemoryRecordStore::new()));

        let json = serde_json::to_value(get_progress(&store).await).unwrap();

        assert_eq!(json["level"], 1);
        assert_eq!(json["currentXp"], 0);
        assert!(json["activeQuests"].is_array());
        assert_eq!(json["level_band"]["xp_to_next_level"], 500);
    }

    #[tokio::test]
    async fn test_get_progress_on_corrupt_record_returns_default() {
        let records =
            InMemoryRecordStore::with_record(PROGRESS_STORAGE_KEY, r#"{"activeQuests":5}"#);
        let store = ProgressStore::new(Arc::new(records));

        let view = get_progress(&store).await;

        assert_eq!(view.progress, UserProgress::default());
    }

    #[tokio::test]
    async fn test_get_quest_board_derives_status_and_countdown() {
        // Arrange
        let store = store_with(&UserProgress {
            active_quests: vec![ActiveQuest {
                quest_id: "Q2".to_owned(),
                start_time: 0,
                end_time: 3_600_000,
            }],
            completed_quests: vec![CompletedQuest {
                quest_id: "Q1".to_owned(),
                finish_time: 500,
            }],
            ..UserProgress::default()
        })
        .await;
        let clock = FixedClock::at_millis(1_800_000);

        // Act
        let board = get_quest_board(&fixtures::catalog(), &clock, &store).await;

        // Assert
        assert_eq!(board.len(), 2);
        assert_eq!(board[0].quest.id, "Q1");
        assert_eq!(board[0].status, QuestStatus::Completed);
        assert_eq!(board[0].finished_at, Some(500));
        assert_eq!(board[0].time_remaining, None);

        assert_eq!(board[1].quest.id, "Q2");
        assert_eq!(board[1].status, QuestStatus::Active);
        assert_eq!(board[1].deadline, Some(3_600_000));
        assert_eq!(board[1].time_remaining.as_deref(), Some("30m left"));
    }

    #[tokio::test]
    async fn test_get_quest_board_orders_default_board_by_rank() {
        let store = ProgressStore::new(Arc::new(InMemoryRecordStore::new()));
        let catalog = QuestCatalog::default_board().unwrap();
        let clock = FixedClock::at_millis(0);

        let board = get_quest_board(&catalog, &clock, &store).await;

        assert_eq!(board.len(), catalog.len());
        assert!(board.windows(2).all(|pair| pair[0].quest.rank <= pair[1].quest.rank));
        assert!(board.iter().all(|entry| entry.status == QuestStatus::Available));
    }
}
