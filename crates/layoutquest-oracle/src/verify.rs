//! Call-and-fallback wrapper around the text generator.

use layoutquest_core::generation::TextGenerator;
use tracing::{debug, warn};

/// Returned when the generator answers without any text.
pub const DEFAULT_FEEDBACK: &str =
    "Quest verified! The Guild Master nods in approval. Well done, adventurer.";

/// Returned when the generator call fails.
pub const FALLBACK_FEEDBACK: &str = "The Guild Master is away from the hall, but your \
     submission has been recorded in the ledger. Quest complete!";

/// Builds the prompt sent for a submission.
#[must_use]
pub fn build_prompt(quest_title: &str, submission_link: &str) -> String {
    format!(
        "You are the Guild Master of an adventurers' guild that trains Jetpack Compose \
         developers. An adventurer has completed the quest \"{quest_title}\" and submitted \
         their work at {submission_link}. Assume the submission is valid and complete. \
         Reply with two or three sentences of in-character praise that congratulate them \
         and name the layout skill the quest trained."
    )
}

/// Produces feedback text for a quest submission.
///
/// Never fails: an empty answer yields [`DEFAULT_FEEDBACK`] and any error
/// yields [`FALLBACK_FEEDBACK`]. The link is not inspected.
pub async fn verify_submission(
    generator: &dyn TextGenerator,
    quest_title: &str,
    submission_link: &str,
) -> String {
    let prompt = build_prompt(quest_title, submission_link);
    match generator.generate(&prompt).await {
        Ok(Some(text)) if !text.trim().is_empty() => {
            debug!(quest_title, "received submission feedback");
            text
        }
        Ok(_) => {
            debug!(quest_title, "generator returned no text, using default feedback");
            DEFAULT_FEEDBACK.to_owned()
        }
        Err(e) => {
            warn!(quest_title, error = %e, "submission verification failed, using fallback");
            FALLBACK_FEEDBACK.to_owned()
        }
    }
}
