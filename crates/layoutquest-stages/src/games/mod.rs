//! The layout games, declared as data over [`StageMachine`].
//!
//! [`StageMachine`]: crate::domain::machine::StageMachine

pub mod arrangement;
pub mod axis;
pub mod clickable;
pub mod clipping;

use serde::Serialize;

/// Listing entry for a game, used by menus.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    /// Stable game identifier.
    pub name: &'static str,
    /// Display title.
    pub title: &'static str,
    /// Stage identifiers in play order.
    pub stages: Vec<String>,
}

fn summarize<S: std::fmt::Debug, E, A>(
    spec: &crate::domain::machine::GameSpec<S, E, A>,
    title: &'static str,
) -> GameSummary {
    GameSummary {
        name: spec.name,
        title,
        stages: spec.stages.iter().map(|stage| format!("{stage:?}")).collect(),
    }
}

/// Every shipped game, in menu order.
#[must_use]
pub fn all_games() -> Vec<GameSummary> {
    vec![
        summarize(&axis::AXIS_EXPLORER, axis::TITLE),
        summarize(&arrangement::ARRANGEMENT_PLAYGROUND, arrangement::TITLE),
        summarize(&clipping::CLIPPING_LAB, clipping::TITLE),
        summarize(&clickable::CLICKABLE_ORDER, clickable::TITLE),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_games_have_unique_names_and_end_in_victory() {
        let games = all_games();

        let mut names: Vec<_> = games.iter().map(|g| g.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), games.len());

        for game in &games {
            assert_eq!(game.stages.first().map(String::as_str), Some("Intro"));
            assert_eq!(game.stages.last().map(String::as_str), Some("Victory"));
        }
    }
}
