//! Layout Quest Core: shared domain abstractions.
//!
//! This crate defines the fundamental traits and types that the stage games,
//! the guild hall, and the adapters depend on. It contains no infrastructure
//! code.

pub mod clock;
pub mod command;
pub mod error;
pub mod event;
pub mod generation;
pub mod store;
