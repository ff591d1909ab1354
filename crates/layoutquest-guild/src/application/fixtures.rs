//! Small quest board shared by the application tests.

use crate::domain::catalog::QuestCatalog;

const BOARD: &str = r"
- id: Q1
  rank: F
  title: Row basics
  subtitle: Line things up
  description: Build a row.
  xp_reward: 100
  countdown_hours: 1
  reference_url: https://developer.android.com/develop/ui/compose/layouts/basics
- id: Q2
  rank: E
  title: Clip shapes
  subtitle: Round the corners
  description: Clip a box.
  xp_reward: 450
  countdown_hours: 1
  requirements: [Use Modifier.clip]
  reference_url: https://developer.android.com/develop/ui/compose/graphics/draw/modifiers
";

pub(crate) fn catalog() -> QuestCatalog {
    QuestCatalog::from_yaml(BOARD).unwrap()
}
