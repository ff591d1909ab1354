//! Command handlers for the Guild Hall context.
//!
//! Each handler takes the store's update lock, loads the progress record,
//! runs the operation on a `QuestLog`, saves when anything changed, and
//! returns the outcome. A failed save is logged and the in-memory result is
//! still returned.

use layoutquest_core::clock::Clock;
use layoutquest_core::command::Command;
use layoutquest_core::error::DomainError;
use layoutquest_core::event::DomainEvent;
use layoutquest_core::generation::TextGenerator;
use layoutquest_oracle::verify_submission;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::application::store::ProgressStore;
use crate::application::submission::SubmissionDesk;
use crate::domain::aggregates::{CompletionOutcome, QuestLog};
use crate::domain::catalog::QuestCatalog;
use crate::domain::commands::{AcceptQuest, CheckExpiredQuests, CompleteQuest, SubmitQuest};
use crate::domain::events::QuestEvent;
use crate::domain::progress::UserProgress;

/// Result of accepting a quest.
#[derive(Debug, Serialize)]
pub struct GuildCommandResult {
    /// Progress after the command.
    pub progress: UserProgress,
    /// Events produced; empty when the command was a no-op.
    pub events: Vec<QuestEvent>,
}

/// Result of completing a quest.
#[derive(Debug, Serialize)]
pub struct CompletionResult {
    pub outcome: CompletionOutcome,
    pub progress: UserProgress,
    pub events: Vec<QuestEvent>,
}

/// Result of an expiry sweep.
#[derive(Debug, Serialize)]
pub struct ExpiryCheckResult {
    /// Quests that failed during this sweep.
    pub expired: Vec<String>,
    pub progress: UserProgress,
    pub events: Vec<QuestEvent>,
}

/// Result of handing in a quest.
#[derive(Debug, Serialize)]
pub struct SubmissionResult {
    /// Guild-master flavor text.
    pub feedback: String,
    pub outcome: CompletionOutcome,
    pub progress: UserProgress,
    pub events: Vec<QuestEvent>,
}

/// Saves the log if it changed and hands back its parts.
async fn commit(
    log: QuestLog,
    store: &ProgressStore,
    command: &dyn Command,
) -> (UserProgress, Vec<QuestEvent>) {
    if log.has_changes() {
        if let Err(e) = store.save(log.progress()).await {
            warn!(
                command_type = command.command_type(),
                error = %e,
                "failed to save progress; returning unsaved result"
            );
        }
    }
    let (progress, events) = log.into_parts();
    for event in &events {
        info!(
            command_type = command.command_type(),
            event_type = event.event_type(),
            quest_id = event.kind.quest_id(),
            correlation_id = %event.metadata().correlation_id,
            "quest event recorded"
        );
        debug!(payload = %event.to_payload(), "quest event payload");
    }
    (progress, events)
}

/// Handles the `AcceptQuest` command: starts the quest's countdown unless it
/// is already active or completed.
///
/// # Errors
///
/// Returns `DomainError::QuestNotFound` if the quest is not on the board.
pub async fn handle_accept_quest(
    command: &AcceptQuest,
    catalog: &QuestCatalog,
    clock: &dyn Clock,
    store: &ProgressStore,
) -> Result<GuildCommandResult, DomainError> {
    let quest = catalog.require(&command.quest_id)?;
    let _guard = store.lock().await;
    let mut log = QuestLog::new(store.load().await);

    if !log.accept_quest(quest, command.correlation_id(), clock) {
        info!(quest_id = %quest.id, "quest already active or completed");
    }

    let (progress, events) = commit(log, store, command).await;
    Ok(GuildCommandResult { progress, events })
}

/// Handles the `CompleteQuest` command, awarding the quest's XP reward when
/// the deadline has not passed.
///
/// # Errors
///
/// Returns `DomainError::QuestNotFound` if the quest is not on the board.
pub async fn handle_complete_quest(
    command: &CompleteQuest,
    catalog: &QuestCatalog,
    clock: &dyn Clock,
    store: &ProgressStore,
) -> Result<CompletionResult, DomainError> {
    let quest = catalog.require(&command.quest_id)?;
    let _guard = store.lock().await;
    let mut log = QuestLog::new(store.load().await);

    let outcome = log.complete_quest(&quest.id, quest.xp_reward, command.correlation_id(), clock);

    let (progress, events) = commit(log, store, command).await;
    Ok(CompletionResult {
        outcome,
        progress,
        events,
    })
}

/// Handles the `CheckExpiredQuests` command. Never fails; a record that
/// cannot be read or saved degrades as described on [`ProgressStore`].
pub async fn handle_check_expired_quests(
    command: &CheckExpiredQuests,
    clock: &dyn Clock,
    store: &ProgressStore,
) -> ExpiryCheckResult {
    let _guard = store.lock().await;
    let mut log = QuestLog::new(store.load().await);

    let expired = log.check_expired_quests(command.correlation_id(), clock);

    let (progress, events) = commit(log, store, command).await;
    ExpiryCheckResult {
        expired,
        progress,
        events,
    }
}

/// Handles the `SubmitQuest` command: reserves the quest's submission slot,
/// asks the generator for feedback, then completes the quest.
///
/// The update lock is not held during the generator call. The record is
/// reloaded under the lock afterwards so changes made while it was in flight
/// are kept.
///
/// # Errors
///
/// Returns `DomainError::QuestNotFound` if the quest is not on the board,
/// `DomainError::SubmissionPending` if a submission for it is in flight, and
/// `DomainError::Validation` if the quest is not active.
pub async fn handle_submit_quest(
    command: &SubmitQuest,
    catalog: &QuestCatalog,
    clock: &dyn Clock,
    store: &ProgressStore,
    generator: &dyn TextGenerator,
    desk: &SubmissionDesk,
) -> Result<SubmissionResult, DomainError> {
    let quest = catalog.require(&command.quest_id)?;
    let _slot = desk.reserve(&quest.id)?;

    if !store.load().await.is_active(&quest.id) {
        return Err(DomainError::Validation(format!(
            "quest {} is not active",
            quest.id
        )));
    }

    info!(quest_id = %quest.id, "verifying submission");
    let feedback = verify_submission(generator, &quest.title, &command.link).await;

    let _guard = store.lock().await;
    let mut log = QuestLog::new(store.load().await);
    let outcome = log.complete_quest(&quest.id, quest.xp_reward, command.correlation_id(), clock);

    let (progress, events) = commit(log, store, command).await;
    Ok(SubmissionResult {
        feedback,
        outcome,
        progress,
        events,
    })
}
