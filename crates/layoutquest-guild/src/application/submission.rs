//! Tracks quest submissions whose verification is still in flight.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use layoutquest_core::error::DomainError;

/// Set of quest ids with a submission being verified.
///
/// Cloning shares the underlying set.
#[derive(Debug, Clone, Default)]
pub struct SubmissionDesk {
    pending: Arc<Mutex<HashSet<String>>>,
}

impl SubmissionDesk {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the submission slot for `quest_id`. The slot is released when
    /// the returned guard is dropped.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::SubmissionPending` if a submission for the same
    /// quest is already in flight.
    pub fn reserve(&self, quest_id: &str) -> Result<SubmissionSlot, DomainError> {
        if !self.lock().insert(quest_id.to_owned()) {
            return Err(DomainError::SubmissionPending(quest_id.to_owned()));
        }
        Ok(SubmissionSlot {
            desk: self.clone(),
            quest_id: quest_id.to_owned(),
        })
    }

    /// Whether a submission for `quest_id` is in flight.
    #[must_use]
    pub fn is_pending(&self, quest_id: &str) -> bool {
        self.lock().contains(quest_id)
    }

    // The set stays consistent even if a holder panicked, so poisoning is ignored.
    fn lock(&self) -> MutexGuard<'_, HashSet<String>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A reserved submission slot; dropping it frees the quest for another
/// submission.
#[derive(Debug)]
pub struct SubmissionSlot {
    desk: SubmissionDesk,
    quest_id: String,
}

impl SubmissionSlot {
    #[must_use]
    pub fn quest_id(&self) -> &str {
        &self.quest_id
    }
}

impl Drop for SubmissionSlot {
    fn drop(&mut self) {
        self.desk.lock().remove(&self.quest_id);
    }
}
