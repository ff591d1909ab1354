//! Domain error types.

use thiserror::Error;

/// Top-level domain error type.
#[derive(Debug, Error)]
pub enum DomainError {
    /// No quest with this identifier exists in the catalog.
    #[error("quest not found: {0}")]
    QuestNotFound(String),

    /// A submission for this quest is already awaiting verification.
    #[error("submission already pending for quest {0}")]
    SubmissionPending(String),

    /// A validation error in domain logic or authored content.
    #[error("validation error: {0}")]
    Validation(String),

    /// An infrastructure/persistence error.
    #[error("infrastructure error: {0}")]
    Infrastructure(String),
}
