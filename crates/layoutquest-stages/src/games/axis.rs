//! Axis explorer: main axis vs cross axis in `Row` and `Column`.

use serde::Serialize;

use crate::domain::machine::{GameSpec, StageMachine};
use crate::domain::quiz::{Quiz, QuizState};
use layoutquest_core::error::DomainError;

/// Display title.
pub const TITLE: &str = "Axis Explorer";

/// Stages of the axis explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AxisStage {
    Intro,
    /// Reveal both axes of a `Row`.
    RowAxes,
    /// Rotate the demo into a `Column`.
    ColumnAxes,
    Quiz,
    Victory,
}

/// Direction of the demo container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Direction {
    Row,
    Column,
}

/// Ephemeral state for one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxisState {
    pub direction: Direction,
    pub show_main_axis: bool,
    pub show_cross_axis: bool,
    pub quiz: QuizState,
}

/// Player actions.
#[derive(Debug, Clone, Copy)]
pub enum AxisAction {
    SetDirection(Direction),
    ToggleMainAxis,
    ToggleCrossAxis,
    Answer(usize),
}

pub static QUIZ: Quiz = Quiz {
    prompt: "Inside a Column, which way does the main axis run?",
    options: &["Horizontally", "Vertically", "Diagonally", "It depends on the children"],
    answer: 1,
    explanation: "Column places children one below another, so its main axis is vertical \
                  and its cross axis horizontal.",
};

fn initial(_stage: AxisStage) -> AxisState {
    AxisState {
        direction: Direction::Row,
        show_main_axis: false,
        show_cross_axis: false,
        quiz: QuizState::default(),
    }
}

fn gate(stage: AxisStage, state: &AxisState) -> bool {
    match stage {
        AxisStage::Intro => true,
        AxisStage::RowAxes => state.show_main_axis && state.show_cross_axis,
        AxisStage::ColumnAxes => state.direction == Direction::Column,
        AxisStage::Quiz => state.quiz.correct,
        AxisStage::Victory => false,
    }
}

fn reduce(stage: AxisStage, state: &mut AxisState, action: AxisAction) {
    match action {
        AxisAction::SetDirection(direction) => state.direction = direction,
        AxisAction::ToggleMainAxis => state.show_main_axis = !state.show_main_axis,
        AxisAction::ToggleCrossAxis => state.show_cross_axis = !state.show_cross_axis,
        AxisAction::Answer(option) if stage == AxisStage::Quiz => state.quiz.select(&QUIZ, option),
        AxisAction::Answer(_) => {}
    }
}

pub static AXIS_EXPLORER: GameSpec<AxisStage, AxisState, AxisAction> = GameSpec {
    name: "axis-explorer",
    stages: &[
        AxisStage::Intro,
        AxisStage::RowAxes,
        AxisStage::ColumnAxes,
        AxisStage::Quiz,
        AxisStage::Victory,
    ],
    initial,
    gate,
    reduce,
};

/// Starts a new axis explorer session.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the game declaration is malformed.
pub fn new_session() -> Result<StageMachine<AxisStage, AxisState, AxisAction>, DomainError> {
    StageMachine::new(&AXIS_EXPLORER)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::machine::NextControl;

    #[test]
    fn test_row_stage_unlocks_only_when_both_axes_revealed() {
        // Arrange
        let mut game = new_session().unwrap();
        game.advance();

        // Act
        game.dispatch(AxisAction::ToggleMainAxis);
        let after_one = game.next_control();
        game.dispatch(AxisAction::ToggleCrossAxis);

        // Assert
        assert_eq!(after_one, NextControl::Locked);
        assert_eq!(game.next_control(), NextControl::Available);
    }

    #[test]
    fn test_answers_outside_quiz_stage_are_ignored() {
        let mut game = new_session().unwrap();

        game.dispatch(AxisAction::Answer(QUIZ.answer));

        assert_eq!(game.ephemeral().quiz, QuizState::default());
    }

    #[test]
    fn test_full_walkthrough_reaches_victory() {
        // Arrange
        let mut game = new_session().unwrap();

        // Act
        assert!(game.try_advance());
        game.dispatch(AxisAction::ToggleMainAxis);
        game.dispatch(AxisAction::ToggleCrossAxis);
        assert!(game.try_advance());
        assert_eq!(game.ephemeral().direction, Direction::Row);
        game.dispatch(AxisAction::SetDirection(Direction::Column));
        assert!(game.try_advance());
        game.dispatch(AxisAction::Answer(0));
        assert!(!game.try_advance());
        game.dispatch(AxisAction::Answer(QUIZ.answer));
        assert!(game.try_advance());

        // Assert
        assert_eq!(game.stage(), AxisStage::Victory);
        assert_eq!(game.next_control(), NextControl::Finished);
    }
}
