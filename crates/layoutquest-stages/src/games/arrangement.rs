//! Arrangement playground: `Arrangement` on the main axis, `Alignment` on
//! the cross axis.

use serde::Serialize;

use crate::domain::machine::{GameSpec, StageMachine};
use crate::domain::quiz::{Quiz, QuizState};
use layoutquest_core::error::DomainError;

/// Display title.
pub const TITLE: &str = "Arrangement Playground";

/// Stages of the arrangement playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ArrangementStage {
    Intro,
    /// Spread three boxes along the main axis.
    Arrangement,
    /// Center them on the cross axis.
    Alignment,
    Quiz,
    Victory,
}

/// `Arrangement.Horizontal` values offered by the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Arrangement {
    Start,
    Center,
    End,
    SpaceBetween,
    SpaceAround,
    SpaceEvenly,
}

/// `Alignment.Vertical` values offered by the playground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Alignment {
    Top,
    CenterVertically,
    Bottom,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArrangementState {
    pub arrangement: Arrangement,
    pub alignment: Alignment,
    pub quiz: QuizState,
}

#[derive(Debug, Clone, Copy)]
pub enum ArrangementAction {
    SetArrangement(Arrangement),
    SetAlignment(Alignment),
    Answer(usize),
}

/// Target of the arrangement stage.
pub const TARGET_ARRANGEMENT: Arrangement = Arrangement::SpaceBetween;

/// Target of the alignment stage.
pub const TARGET_ALIGNMENT: Alignment = Alignment::CenterVertically;

pub static QUIZ: Quiz = Quiz {
    prompt: "Which Row parameter positions children along its main axis?",
    options: &[
        "verticalAlignment",
        "horizontalArrangement",
        "contentAlignment",
        "Modifier.padding",
    ],
    answer: 1,
    explanation: "A Row's main axis is horizontal, so horizontalArrangement distributes the \
                  children; verticalAlignment works on the cross axis.",
};

fn initial(_stage: ArrangementStage) -> ArrangementState {
    ArrangementState {
        arrangement: Arrangement::Start,
        alignment: Alignment::Top,
        quiz: QuizState::default(),
    }
}

fn gate(stage: ArrangementStage, state: &ArrangementState) -> bool {
    match stage {
        ArrangementStage::Intro => true,
        ArrangementStage::Arrangement => state.arrangement == TARGET_ARRANGEMENT,
        ArrangementStage::Alignment => state.alignment == TARGET_ALIGNMENT,
        ArrangementStage::Quiz => state.quiz.correct,
        ArrangementStage::Victory => false,
    }
}

fn reduce(stage: ArrangementStage, state: &mut ArrangementState, action: ArrangementAction) {
    match action {
        ArrangementAction::SetArrangement(arrangement) => state.arrangement = arrangement,
        ArrangementAction::SetAlignment(alignment) => state.alignment = alignment,
        ArrangementAction::Answer(option) if stage == ArrangementStage::Quiz => {
            state.quiz.select(&QUIZ, option);
        }
        ArrangementAction::Answer(_) => {}
    }
}

pub static ARRANGEMENT_PLAYGROUND: GameSpec<ArrangementStage, ArrangementState, ArrangementAction> =
    GameSpec {
        name: "arrangement-playground",
        stages: &[
            ArrangementStage::Intro,
            ArrangementStage::Arrangement,
            ArrangementStage::Alignment,
            ArrangementStage::Quiz,
            ArrangementStage::Victory,
        ],
        initial,
        gate,
        reduce,
    };

/// Starts a new arrangement playground session.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the game declaration is malformed.
pub fn new_session()
-> Result<StageMachine<ArrangementStage, ArrangementState, ArrangementAction>, DomainError> {
    StageMachine::new(&ARRANGEMENT_PLAYGROUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::machine::NextControl;

    #[test]
    fn test_arrangement_stage_requires_space_between() {
        // Arrange
        let mut game = new_session().unwrap();
        game.advance();

        // Act
        game.dispatch(ArrangementAction::SetArrangement(Arrangement::SpaceEvenly));
        let near_miss = game.can_advance();
        game.dispatch(ArrangementAction::SetArrangement(Arrangement::SpaceBetween));

        // Assert
        assert!(!near_miss);
        assert!(game.can_advance());
    }

    #[test]
    fn test_advancing_resets_playground_controls() {
        // Arrange
        let mut game = new_session().unwrap();
        game.advance();
        game.dispatch(ArrangementAction::SetArrangement(TARGET_ARRANGEMENT));

        // Act
        assert!(game.try_advance());

        // Assert
        assert_eq!(game.stage(), ArrangementStage::Alignment);
        assert_eq!(game.ephemeral().arrangement, Arrangement::Start);
        assert_eq!(game.next_control(), NextControl::Locked);
    }

    #[test]
    fn test_wrong_answer_keeps_quiz_locked() {
        // Arrange
        let mut game = new_session().unwrap();
        for _ in 0..3 {
            game.advance();
        }

        // Act
        game.dispatch(ArrangementAction::Answer(0));

        // Assert
        assert_eq!(game.stage(), ArrangementStage::Quiz);
        assert_eq!(game.ephemeral().quiz.selected, Some(0));
        assert_eq!(game.next_control(), NextControl::Locked);
    }
}
