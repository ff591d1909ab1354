//! Multiple-choice quiz shared by every game's quiz stage.

use serde::Serialize;

/// One authored multiple-choice question.
#[derive(Debug, Serialize)]
pub struct Quiz {
    /// The question shown to the player.
    pub prompt: &'static str,
    /// Answer options, in display order.
    pub options: &'static [&'static str],
    /// Index into `options` of the correct answer.
    pub answer: usize,
    /// Shown once the player picks the right option.
    pub explanation: &'static str,
}

/// Player's current pick for a quiz.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct QuizState {
    /// Index of the chosen option, if any.
    pub selected: Option<usize>,
    /// Whether the chosen option is the right one.
    pub correct: bool,
}

impl QuizState {
    /// Records a pick. Out-of-range indices are ignored. Picks can be changed
    /// freely until the stage is left.
    pub fn select(&mut self, quiz: &Quiz, option: usize) {
        if option >= quiz.options.len() {
            return;
        }
        self.selected = Some(option);
        self.correct = option == quiz.answer;
    }
}
