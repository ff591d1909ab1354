//! Aggregate root for the Guild Hall context.

use chrono::{DateTime, Utc};
use layoutquest_core::clock::Clock;
use layoutquest_core::event::EventMetadata;
use uuid::Uuid;

use super::events::{
    FailureReason, QuestAccepted, QuestCompleted, QuestEvent, QuestEventKind, QuestFailed,
};
use super::progress::{ActiveQuest, CompletedQuest, UserProgress, level_for_xp};
use super::quest::Quest;

/// What `complete_quest` did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionOutcome {
    /// Finished in time; XP awarded.
    Completed,
    /// Deadline had passed; recorded as a failure.
    Failed,
    /// The quest was not active; nothing changed.
    NotActive,
}

/// A player's quest log: the progress record plus the lifecycle events
/// produced since it was loaded.
///
/// Every state change goes through `apply`, driven by the event
/// that describes it.
#[derive(Debug)]
pub struct QuestLog {
    progress: UserProgress,
    /// Uncommitted events pending persistence.
    uncommitted_events: Vec<QuestEvent>,
}

impl QuestLog {
    /// Wraps a loaded progress record.
    #[must_use]
    pub fn new(progress: UserProgress) -> Self {
        Self {
            progress,
            uncommitted_events: Vec::new(),
        }
    }

    /// Current progress, including uncommitted changes.
    #[must_use]
    pub fn progress(&self) -> &UserProgress {
        &self.progress
    }

    /// Events produced since the log was loaded.
    #[must_use]
    pub fn uncommitted_events(&self) -> &[QuestEvent] {
        &self.uncommitted_events
    }

    /// Whether anything changed since the log was loaded.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !self.uncommitted_events.is_empty()
    }

    /// Splits the log into its progress record and produced events.
    #[must_use]
    pub fn into_parts(self) -> (UserProgress, Vec<QuestEvent>) {
        (self.progress, self.uncommitted_events)
    }

    /// Accepts `quest`, starting its countdown now.
    ///
    /// Does nothing if the quest is already active or completed; in
    /// particular a second accept does not restart the timer. A failed quest
    /// is accepted again and its failure cleared. Returns whether anything
    /// changed.
    pub fn accept_quest(&mut self, quest: &Quest, correlation_id: Uuid, clock: &dyn Clock) -> bool {
        if self.progress.is_active(&quest.id) || self.progress.is_completed(&quest.id) {
            return false;
        }

        let now = clock.now();
        let start_time = now.timestamp_millis();
        let kind = QuestEventKind::QuestAccepted(QuestAccepted {
            quest_id: quest.id.clone(),
            start_time,
            end_time: start_time + quest.countdown_millis(),
            retry: self.progress.is_failed(&quest.id),
        });
        self.record(kind, correlation_id, now);
        true
    }

    /// Completes an active quest, awarding `xp_gain` if the deadline has not
    /// passed and failing the quest otherwise.
    pub fn complete_quest(
        &mut self,
        quest_id: &str,
        xp_gain: u32,
        correlation_id: Uuid,
        clock: &dyn Clock,
    ) -> CompletionOutcome {
        let Some(end_time) = self.progress.active(quest_id).map(|entry| entry.end_time) else {
            return CompletionOutcome::NotActive;
        };

        let now = clock.now();
        let finish_time = now.timestamp_millis();
        if finish_time > end_time {
            let kind = QuestEventKind::QuestFailed(QuestFailed {
                quest_id: quest_id.to_owned(),
                reason: FailureReason::LateSubmission,
            });
            self.record(kind, correlation_id, now);
            return CompletionOutcome::Failed;
        }

        let kind = QuestEventKind::QuestCompleted(QuestCompleted {
            quest_id: quest_id.to_owned(),
            finish_time,
            xp_gained: xp_gain,
            level: level_for_xp(self.progress.current_xp.saturating_add(u64::from(xp_gain))),
        });
        self.record(kind, correlation_id, now);
        CompletionOutcome::Completed
    }

    /// Fails every active quest whose deadline has passed. Returns the ids
    /// that failed; calling again at the same instant returns nothing.
    pub fn check_expired_quests(&mut self, correlation_id: Uuid, clock: &dyn Clock) -> Vec<String> {
        let now = clock.now();
        let now_ms = now.timestamp_millis();
        let expired: Vec<String> = self
            .progress
            .active_quests
            .iter()
            .filter(|entry| now_ms > entry.end_time)
            .map(|entry| entry.quest_id.clone())
            .collect();

        for quest_id in &expired {
            let kind = QuestEventKind::QuestFailed(QuestFailed {
                quest_id: quest_id.clone(),
                reason: FailureReason::Expired,
            });
            self.record(kind, correlation_id, now);
        }
        expired
    }

    fn record(&mut self, kind: QuestEventKind, correlation_id: Uuid, occurred_at: DateTime<Utc>) {
        let event = QuestEvent {
            metadata: EventMetadata {
                event_id: Uuid::new_v4(),
                event_type: kind.event_type().to_owned(),
                correlation_id,
                occurred_at,
            },
            kind,
        };
        self.apply(&event);
        self.uncommitted_events.push(event);
    }

    /// Applies an event to the progress record.
    fn apply(&mut self, event: &QuestEvent) {
        let progress = &mut self.progress;
        match &event.kind {
            QuestEventKind::QuestAccepted(payload) => {
                progress.failed_quests.retain(|id| *id != payload.quest_id);
                progress.active_quests.push(ActiveQuest {
                    quest_id: payload.quest_id.clone(),
                    start_time: payload.start_time,
                    end_time: payload.end_time,
                });
            }
            QuestEventKind::QuestCompleted(payload) => {
                progress
                    .active_quests
                    .retain(|entry| entry.quest_id != payload.quest_id);
                progress.completed_quests.push(CompletedQuest {
                    quest_id: payload.quest_id.clone(),
                    finish_time: payload.finish_time,
                });
                progress.current_xp = progress
                    .current_xp
                    .saturating_add(u64::from(payload.xp_gained));
                progress.level = level_for_xp(progress.current_xp);
            }
            QuestEventKind::QuestFailed(payload) => {
                progress
                    .active_quests
                    .retain(|entry| entry.quest_id != payload.quest_id);
                if !progress.is_failed(&payload.quest_id) {
                    progress.failed_quests.push(payload.quest_id.clone());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::events::QUEST_ACCEPTED_EVENT_TYPE;
    use crate::domain::quest::Rank;
    use layoutquest_core::event::DomainEvent;
    use layoutquest_test_support::{FixedClock, ManualClock};

    const HOUR: i64 = 3_600_000;

    fn quest(id: &str, countdown_hours: u32) -> Quest {
        Quest {
            id: id.to_owned(),
            rank: Rank::C,
            title: format!("Quest {id}"),
            subtitle: String::new(),
            description: String::new(),
            xp_reward: 100,
            countdown_hours,
            requirements: Vec::new(),
            reference_url: "https://example.com".to_owned(),
        }
    }

    #[test]
    fn test_accept_quest_starts_countdown_and_produces_event() {
        // Arrange
        let correlation_id = Uuid::new_v4();
        let clock = FixedClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());

        // Act
        let changed = log.accept_quest(&quest("Q1", 1), correlation_id, &clock);

        // Assert
        assert!(changed);
        assert_eq!(
            log.progress().active_quests,
            vec![ActiveQuest {
                quest_id: "Q1".to_owned(),
                start_time: 0,
                end_time: HOUR,
            }]
        );

        let events = log.uncommitted_events();
        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.event_type(), QUEST_ACCEPTED_EVENT_TYPE);
        assert_eq!(event.metadata().correlation_id, correlation_id);
        assert_eq!(event.metadata().occurred_at, clock.0);
        match &event.kind {
            QuestEventKind::QuestAccepted(payload) => assert!(!payload.retry),
            other => panic!("expected QuestAccepted, got {other:?}"),
        }
    }

    #[test]
    fn test_accept_quest_window_matches_countdown_exactly() {
        let clock = FixedClock::at_millis(1_234_567);
        let mut log = QuestLog::new(UserProgress::default());

        log.accept_quest(&quest("Q1", 72), Uuid::new_v4(), &clock);

        let entry = log.progress().active("Q1").unwrap();
        assert_eq!(entry.end_time - entry.start_time, 72 * HOUR);
    }

    #[test]
    fn test_accept_quest_twice_keeps_original_timer() {
        // Arrange
        let clock = ManualClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);
        let before = log.progress().clone();

        // Act
        clock.advance_millis(10_000);
        let changed = log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);

        // Assert
        assert!(!changed);
        assert_eq!(log.progress(), &before);
        assert_eq!(log.uncommitted_events().len(), 1);
    }

    #[test]
    fn test_accept_quest_ignores_completed_quest() {
        let clock = FixedClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);
        log.complete_quest("Q1", 100, Uuid::new_v4(), &clock);

        let changed = log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);

        assert!(!changed);
        assert!(log.progress().active_quests.is_empty());
    }

    #[test]
    fn test_complete_quest_in_time_awards_xp() {
        // Arrange
        let clock = ManualClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);
        clock.set_millis(1_000);

        // Act
        let outcome = log.complete_quest("Q1", 100, Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(outcome, CompletionOutcome::Completed);
        let progress = log.progress();
        assert!(progress.active_quests.is_empty());
        assert_eq!(
            progress.completed_quests,
            vec![CompletedQuest {
                quest_id: "Q1".to_owned(),
                finish_time: 1_000,
            }]
        );
        assert_eq!(progress.current_xp, 100);
        assert_eq!(progress.level, 1);
    }

    #[test]
    fn test_complete_quest_exactly_at_deadline_still_counts() {
        let clock = ManualClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);
        clock.set_millis(HOUR);

        let outcome = log.complete_quest("Q1", 100, Uuid::new_v4(), &clock);

        assert_eq!(outcome, CompletionOutcome::Completed);
    }

    #[test]
    fn test_complete_quest_levels_up_across_threshold() {
        // Arrange
        let clock = FixedClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress {
            level: 1,
            current_xp: 450,
            ..UserProgress::default()
        });
        log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);

        // Act
        log.complete_quest("Q1", 100, Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(log.progress().current_xp, 550);
        assert_eq!(log.progress().level, 2);
        match &log.uncommitted_events()[1].kind {
            QuestEventKind::QuestCompleted(payload) => assert_eq!(payload.level, 2),
            other => panic!("expected QuestCompleted, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_quest_saturates_xp_at_maximum() {
        // Arrange
        let clock = FixedClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress {
            current_xp: u64::MAX - 10,
            ..UserProgress::default()
        });
        log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);

        // Act
        let outcome = log.complete_quest("Q1", 100, Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(outcome, CompletionOutcome::Completed);
        assert_eq!(log.progress().current_xp, u64::MAX);
        assert_eq!(log.progress().level, level_for_xp(u64::MAX));
    }

    #[test]
    fn test_complete_quest_after_deadline_fails_without_xp() {
        // Arrange
        let clock = ManualClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("Q1", 1), Uuid::new_v4(), &clock);
        clock.set_millis(HOUR + 1);

        // Act
        let outcome = log.complete_quest("Q1", 100, Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(outcome, CompletionOutcome::Failed);
        let progress = log.progress();
        assert_eq!(progress.current_xp, 0);
        assert!(progress.active_quests.is_empty());
        assert!(progress.completed_quests.is_empty());
        assert_eq!(progress.failed_quests, vec!["Q1".to_owned()]);
        match &log.uncommitted_events()[1].kind {
            QuestEventKind::QuestFailed(payload) => {
                assert_eq!(payload.reason, FailureReason::LateSubmission);
            }
            other => panic!("expected QuestFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_quest_not_active_is_noop() {
        let clock = FixedClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());

        let outcome = log.complete_quest("Q1", 100, Uuid::new_v4(), &clock);

        assert_eq!(outcome, CompletionOutcome::NotActive);
        assert!(!log.has_changes());
        assert_eq!(log.progress(), &UserProgress::default());
    }

    #[test]
    fn test_check_expired_quests_fails_only_overdue_entries() {
        // Arrange
        let clock = ManualClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("short", 1), Uuid::new_v4(), &clock);
        log.accept_quest(&quest("long", 24), Uuid::new_v4(), &clock);
        clock.set_millis(3_700_000);

        // Act
        let expired = log.check_expired_quests(Uuid::new_v4(), &clock);

        // Assert
        assert_eq!(expired, vec!["short".to_owned()]);
        assert_eq!(log.progress().failed_quests, vec!["short".to_owned()]);
        assert!(log.progress().is_active("long"));
    }

    #[test]
    fn test_check_expired_quests_is_idempotent() {
        // Arrange
        let clock = ManualClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("Q2", 1), Uuid::new_v4(), &clock);
        clock.set_millis(3_700_000);
        log.check_expired_quests(Uuid::new_v4(), &clock);
        let once = log.progress().clone();

        // Act
        let second = log.check_expired_quests(Uuid::new_v4(), &clock);

        // Assert
        assert!(second.is_empty());
        assert_eq!(log.progress(), &once);
    }

    #[test]
    fn test_retry_after_expiry_clears_failure_and_restarts_timer() {
        // Arrange
        let clock = ManualClock::at_millis(0);
        let mut log = QuestLog::new(UserProgress::default());
        log.accept_quest(&quest("Q2", 1), Uuid::new_v4(), &clock);
        clock.set_millis(3_700_000);
        log.check_expired_quests(Uuid::new_v4(), &clock);

        // Act
        let changed = log.accept_quest(&quest("Q2", 1), Uuid::new_v4(), &clock);

        // Assert
        assert!(changed);
        let progress = log.progress();
        assert!(progress.failed_quests.is_empty());
        assert_eq!(
            progress.active_quests,
            vec![ActiveQuest {
                quest_id: "Q2".to_owned(),
                start_time: 3_700_000,
                end_time: 3_700_000 + HOUR,
            }]
        );
        match &log.uncommitted_events().last().unwrap().kind {
            QuestEventKind::QuestAccepted(payload) => assert!(payload.retry),
            other => panic!("expected QuestAccepted, got {other:?}"),
        }
    }
}
