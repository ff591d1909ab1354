//! Background task that periodically fails expired quests.

use std::sync::Arc;
use std::time::Duration;

use layoutquest_core::clock::Clock;
use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::{debug, info};
use uuid::Uuid;

use crate::application::command_handlers::handle_check_expired_quests;
use crate::application::store::ProgressStore;
use crate::domain::commands::CheckExpiredQuests;

/// How often the expiry sweep runs unless configured otherwise.
pub const DEFAULT_EXPIRY_INTERVAL: Duration = Duration::from_secs(60);

/// Handle to the running sweep. Dropping it stops the task.
#[derive(Debug)]
pub struct ExpiryTicker {
    handle: JoinHandle<()>,
}

impl ExpiryTicker {
    /// Starts sweeping: once right away, then every `period`.
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn spawn(clock: Arc<dyn Clock>, store: ProgressStore, period: Duration) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticks = interval(period);
            ticks.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticks.tick().await;
                let command = CheckExpiredQuests {
                    correlation_id: Uuid::new_v4(),
                };
                let result = handle_check_expired_quests(&command, clock.as_ref(), &store).await;
                if result.expired.is_empty() {
                    debug!("expiry sweep found nothing");
                } else {
                    info!(expired = ?result.expired, "expiry sweep failed quests");
                }
            }
        });
        info!(period_secs = period.as_secs(), "expiry ticker started");
        Self { handle }
    }

    /// Whether the task is still running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Stops the task.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for ExpiryTicker {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
