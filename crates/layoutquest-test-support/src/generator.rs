//! Test text generators: mock `TextGenerator` implementations for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use layoutquest_core::generation::{GenerationError, TextGenerator};

/// A generator that always answers with the same text and records every
/// prompt it receives.
#[derive(Debug)]
pub struct CannedTextGenerator {
    reply: String,
    prompts: Mutex<Vec<String>>,
}

impl CannedTextGenerator {
    /// Creates a generator that answers every prompt with `reply`.
    #[must_use]
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_owned(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Returns a snapshot of all prompts received.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for CannedTextGenerator {
    async fn generate(&self, prompt: &str) -> Result<Option<String>, GenerationError> {
        self.prompts.lock().unwrap().push(prompt.to_owned());
        Ok(Some(self.reply.clone()))
    }
}

/// A generator whose responses never carry any text.
#[derive(Debug)]
pub struct SilentTextGenerator;

#[async_trait]
impl TextGenerator for SilentTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, GenerationError> {
        Ok(None)
    }
}

/// A generator that always fails as if the remote service were unreachable.
#[derive(Debug)]
pub struct FailingTextGenerator;

#[async_trait]
impl TextGenerator for FailingTextGenerator {
    async fn generate(&self, _prompt: &str) -> Result<Option<String>, GenerationError> {
        Err(GenerationError::RequestFailed("quota exceeded".into()))
    }
}
