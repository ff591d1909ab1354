//! Clipping lab: content overflowing a `Box`, then `Modifier.clip`.

use serde::Serialize;

use crate::domain::machine::{GameSpec, StageMachine};
use crate::domain::quiz::{Quiz, QuizState};
use layoutquest_core::error::DomainError;

/// Display title.
pub const TITLE: &str = "Clipping Lab";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClipStage {
    Intro,
    /// Watch an oversized child spill out of its parent.
    Overflow,
    /// Turn clipping on.
    Clip,
    Quiz,
    Victory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClipShape {
    Rectangle,
    RoundedCorner,
    Circle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClipState {
    pub clip_enabled: bool,
    pub shape: ClipShape,
    pub quiz: QuizState,
}

#[derive(Debug, Clone, Copy)]
pub enum ClipAction {
    ToggleClip,
    SetShape(ClipShape),
    Answer(usize),
}

pub static QUIZ: Quiz = Quiz {
    prompt: "What happens to a child drawn outside a Box that has Modifier.clip(CircleShape)?",
    options: &[
        "It is still drawn in full",
        "Only the part inside the circle is drawn",
        "The Box grows to fit it",
        "It wraps onto the next line",
    ],
    answer: 1,
    explanation: "clip restricts drawing to the shape's outline; layout is unchanged.",
};

fn initial(_stage: ClipStage) -> ClipState {
    ClipState {
        clip_enabled: false,
        shape: ClipShape::Rectangle,
        quiz: QuizState::default(),
    }
}

fn gate(stage: ClipStage, state: &ClipState) -> bool {
    match stage {
        ClipStage::Intro | ClipStage::Overflow => true,
        ClipStage::Clip => state.clip_enabled,
        ClipStage::Quiz => state.quiz.correct,
        ClipStage::Victory => false,
    }
}

fn reduce(stage: ClipStage, state: &mut ClipState, action: ClipAction) {
    match action {
        ClipAction::ToggleClip => state.clip_enabled = !state.clip_enabled,
        ClipAction::SetShape(shape) => state.shape = shape,
        ClipAction::Answer(option) if stage == ClipStage::Quiz => state.quiz.select(&QUIZ, option),
        ClipAction::Answer(_) => {}
    }
}

pub static CLIPPING_LAB: GameSpec<ClipStage, ClipState, ClipAction> = GameSpec {
    name: "clipping-lab",
    stages: &[
        ClipStage::Intro,
        ClipStage::Overflow,
        ClipStage::Clip,
        ClipStage::Quiz,
        ClipStage::Victory,
    ],
    initial,
    gate,
    reduce,
};

/// Starts a new clipping lab session.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the game declaration is malformed.
pub fn new_session() -> Result<StageMachine<ClipStage, ClipState, ClipAction>, DomainError> {
    StageMachine::new(&CLIPPING_LAB)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_stage_unlocks_when_clip_enabled_regardless_of_shape() {
        // Arrange
        let mut game = new_session().unwrap();
        game.advance();
        game.advance();
        assert!(!game.can_advance());

        // Act
        game.dispatch(ClipAction::SetShape(ClipShape::Circle));
        game.dispatch(ClipAction::ToggleClip);

        // Assert
        assert!(game.can_advance());
    }

    #[test]
    fn test_toggling_clip_twice_locks_again() {
        let mut game = new_session().unwrap();
        game.advance();
        game.advance();

        game.dispatch(ClipAction::ToggleClip);
        game.dispatch(ClipAction::ToggleClip);

        assert!(!game.can_advance());
    }

    #[test]
    fn test_reset_all_clears_progress_mid_game() {
        // Arrange
        let mut game = new_session().unwrap();
        game.advance();
        game.advance();
        game.dispatch(ClipAction::ToggleClip);

        // Act
        game.reset_all();

        // Assert
        assert_eq!(game.stage(), ClipStage::Intro);
        assert!(!game.ephemeral().clip_enabled);
        assert_eq!(game.furthest(), 0);
    }
}
