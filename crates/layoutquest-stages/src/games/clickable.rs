//! Clickable modifier order: which modifiers a tappable card needs, and why
//! `clickable` before `padding` enlarges the touch target.

use serde::Serialize;

use crate::domain::machine::{GameSpec, StageMachine};
use crate::domain::quiz::{Quiz, QuizState};
use layoutquest_core::error::DomainError;

/// Display title.
pub const TITLE: &str = "Clickable Modifier Order";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ClickableStage {
    Intro,
    /// Switch on every modifier the card needs.
    Checklist,
    /// Put `clickable` ahead of `padding`.
    OrderMatters,
    Quiz,
    Victory,
}

/// Modifiers offered on the checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ModifierKind {
    Background,
    Padding,
    Clickable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClickableState {
    pub background: bool,
    pub padding: bool,
    pub clickable: bool,
    /// `true` when `clickable` is applied before `padding` in the chain.
    pub clickable_first: bool,
    pub quiz: QuizState,
}

#[derive(Debug, Clone, Copy)]
pub enum ClickableAction {
    Toggle(ModifierKind),
    SwapOrder,
    Answer(usize),
}

pub static QUIZ: Quiz = Quiz {
    prompt: "Which chain gives the larger touch target?",
    options: &[
        "Modifier.clickable { }.padding(16.dp)",
        "Modifier.padding(16.dp).clickable { }",
        "Both are the same",
    ],
    answer: 0,
    explanation: "Modifiers apply outside-in: clickable first covers the padded area too.",
};

fn initial(stage: ClickableStage) -> ClickableState {
    let wired = stage == ClickableStage::OrderMatters;
    ClickableState {
        background: wired,
        padding: wired,
        clickable: wired,
        clickable_first: false,
        quiz: QuizState::default(),
    }
}

fn gate(stage: ClickableStage, state: &ClickableState) -> bool {
    match stage {
        ClickableStage::Intro => true,
        ClickableStage::Checklist => state.background && state.padding && state.clickable,
        ClickableStage::OrderMatters => state.clickable_first,
        ClickableStage::Quiz => state.quiz.correct,
        ClickableStage::Victory => false,
    }
}

fn reduce(stage: ClickableStage, state: &mut ClickableState, action: ClickableAction) {
    match action {
        ClickableAction::Toggle(ModifierKind::Background) => state.background = !state.background,
        ClickableAction::Toggle(ModifierKind::Padding) => state.padding = !state.padding,
        ClickableAction::Toggle(ModifierKind::Clickable) => state.clickable = !state.clickable,
        ClickableAction::SwapOrder => state.clickable_first = !state.clickable_first,
        ClickableAction::Answer(option) if stage == ClickableStage::Quiz => {
            state.quiz.select(&QUIZ, option);
        }
        ClickableAction::Answer(_) => {}
    }
}

pub static CLICKABLE_ORDER: GameSpec<ClickableStage, ClickableState, ClickableAction> =
    GameSpec {
        name: "clickable-order",
        stages: &[
            ClickableStage::Intro,
            ClickableStage::Checklist,
            ClickableStage::OrderMatters,
            ClickableStage::Quiz,
            ClickableStage::Victory,
        ],
        initial,
        gate,
        reduce,
    };

/// Starts a new clickable modifier session.
///
/// # Errors
///
/// Returns `DomainError::Validation` if the game declaration is malformed.
pub fn new_session()
-> Result<StageMachine<ClickableStage, ClickableState, ClickableAction>, DomainError> {
    StageMachine::new(&CLICKABLE_ORDER)
}
