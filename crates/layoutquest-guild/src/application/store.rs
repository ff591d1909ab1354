//! Loading and saving the player's progress record.

use std::sync::Arc;

use layoutquest_core::error::DomainError;
use layoutquest_core::store::RecordStore;
use tokio::sync::{Mutex, MutexGuard};
use tracing::warn;

use crate::domain::progress::{UserProgress, level_for_xp};

/// Key the progress record is stored under. Bump the version suffix when
/// the record shape changes incompatibly.
pub const PROGRESS_STORAGE_KEY: &str = "guild-hall.progress.v1";

/// The single progress record, kept as JSON in a [`RecordStore`].
///
/// Clones share one update lock. Every load, change and save sequence holds
/// it through [`ProgressStore::lock`] so concurrent updates never start from
/// the same snapshot.
#[derive(Clone)]
pub struct ProgressStore {
    records: Arc<dyn RecordStore>,
    update_lock: Arc<Mutex<()>>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(records: Arc<dyn RecordStore>) -> Self {
        Self {
            records,
            update_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Waits for exclusive update access to the record. Release the guard
    /// after saving.
    pub async fn lock(&self) -> MutexGuard<'_, ()> {
        self.update_lock.lock().await
    }

    /// Loads the record, falling back to a fresh one when it is missing,
    /// unreadable, or malformed.
    pub async fn load(&self) -> UserProgress {
        match self.records.read(PROGRESS_STORAGE_KEY).await {
            Ok(Some(raw)) => parse_progress(&raw).unwrap_or_else(|reason| {
                warn!(key = PROGRESS_STORAGE_KEY, %reason, "discarding stored progress");
                UserProgress::default()
            }),
            Ok(None) => UserProgress::default(),
            Err(e) => {
                warn!(key = PROGRESS_STORAGE_KEY, error = %e, "failed to read stored progress");
                UserProgress::default()
            }
        }
    }

    /// Overwrites the stored record.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Infrastructure` if serialization or the
    /// underlying write fails.
    pub async fn save(&self, progress: &UserProgress) -> Result<(), DomainError> {
        let raw = serde_json::to_string(progress)
            .map_err(|e| DomainError::Infrastructure(format!("progress serialization failed: {e}")))?;
        self.records.write(PROGRESS_STORAGE_KEY, &raw).await
    }
}

impl std::fmt::Debug for ProgressStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProgressStore")
            .field("key", &PROGRESS_STORAGE_KEY)
            .finish_non_exhaustive()
    }
}

fn parse_progress(raw: &str) -> Result<UserProgress, String> {
    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if !value.get("activeQuests").is_some_and(serde_json::Value::is_array) {
        return Err("activeQuests is not a list".to_owned());
    }
    let mut progress: UserProgress = serde_json::from_value(value).map_err(|e| e.to_string())?;
    progress.level = level_for_xp(progress.current_xp);
    Ok(progress)
}
