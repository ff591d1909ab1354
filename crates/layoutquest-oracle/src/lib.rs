//! Layout Quest: verification adapter.
//!
//! Turns a quest hand-in into a line of guild-master flavor text using a
//! remote text generator. Nothing is actually graded: every submission is
//! approved, and any failure of the remote call is absorbed here.

pub mod gemini;
pub mod verify;

pub use gemini::{GeminiClient, GeminiConfig};
pub use verify::{DEFAULT_FEEDBACK, FALLBACK_FEEDBACK, build_prompt, verify_submission};
