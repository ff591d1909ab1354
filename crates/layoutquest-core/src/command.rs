//! Commands: requests to change guild state.

use uuid::Uuid;

/// Implemented by every command a handler accepts.
pub trait Command: Send + Sync + std::fmt::Debug {
    /// Stable name such as `guild.accept_quest`, used in logs.
    fn command_type(&self) -> &'static str;

    /// Carried into every event the command produces.
    fn correlation_id(&self) -> Uuid;
}
