//! Layout Quest: stage sequencing for the layout teaching games.
//!
//! Every game is a linear run of stages (intro, interactive demos, a quiz,
//! victory). The sequencing rules are shared and live in
//! [`domain::machine::StageMachine`]; each game contributes only data: its
//! stage list, per-stage defaults, gate predicates and a reducer.

pub mod domain;
pub mod games;
