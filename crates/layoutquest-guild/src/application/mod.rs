//! Application services for the Guild Hall context.

pub mod command_handlers;
pub mod query_handlers;
pub mod store;
pub mod submission;
pub mod ticker;

#[cfg(test)]
pub(crate) mod fixtures;
