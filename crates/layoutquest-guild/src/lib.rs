//! Layout Quest: Guild Hall bounded context.
//!
//! Responsible for the quest board: authored quests, the player's
//! accept/complete/expire lifecycle, XP and level, persistence of the
//! progress record, and submission of finished work for flavor-text
//! feedback.

pub mod application;
pub mod domain;
