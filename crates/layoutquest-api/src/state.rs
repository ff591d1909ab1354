//! Shared application state.

use std::sync::Arc;

use layoutquest_core::clock::Clock;
use layoutquest_core::generation::TextGenerator;
use layoutquest_guild::application::store::ProgressStore;
use layoutquest_guild::application::submission::SubmissionDesk;
use layoutquest_guild::domain::catalog::QuestCatalog;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Clock for deterministic time.
    pub clock: Arc<dyn Clock>,
    /// The player's progress record.
    pub progress_store: ProgressStore,
    /// Quests on the board.
    pub catalog: Arc<QuestCatalog>,
    /// Produces submission feedback.
    pub generator: Arc<dyn TextGenerator>,
    /// Submissions currently being verified.
    pub submissions: SubmissionDesk,
}

impl AppState {
    /// Create new application state.
    #[must_use]
    pub fn new(
        clock: Arc<dyn Clock>,
        progress_store: ProgressStore,
        catalog: QuestCatalog,
        generator: Arc<dyn TextGenerator>,
    ) -> Self {
        Self {
            clock,
            progress_store,
            catalog: Arc::new(catalog),
            generator,
            submissions: SubmissionDesk::new(),
        }
    }
}
