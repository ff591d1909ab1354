//! Layout Quest: HTTP API.
//!
//! Exposes the Guild Hall quest board and the game catalog over JSON.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
