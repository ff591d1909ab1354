//! Remote text generation abstraction.

use async_trait::async_trait;
use thiserror::Error;

/// Failure of a remote text generation call.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The service is not configured (e.g. no API key).
    #[error("text generation is not configured: {0}")]
    NotConfigured(String),

    /// The request could not be sent or the service rejected it.
    #[error("text generation request failed: {0}")]
    RequestFailed(String),

    /// The service answered with a body that could not be understood.
    #[error("invalid text generation response: {0}")]
    InvalidResponse(String),
}

/// One-shot prompt to text port.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Sends `prompt` and returns the generated text.
    ///
    /// `Ok(None)` means the service answered but produced no text.
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError>;
}
