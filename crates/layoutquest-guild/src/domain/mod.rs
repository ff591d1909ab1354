//! Quest board domain model.

pub mod aggregates;
pub mod catalog;
pub mod commands;
pub mod events;
pub mod progress;
pub mod quest;
pub mod status;
