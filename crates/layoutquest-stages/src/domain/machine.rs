//! Generic linear stage machine.

use std::fmt::Debug;

use layoutquest_core::error::DomainError;
use serde::Serialize;
use tracing::debug;

/// Static description of one game: its stages and the pure functions that
/// drive per-stage state.
///
/// Games are declared as `static` values; the machine borrows them for the
/// lifetime of a session.
#[derive(Debug)]
pub struct GameSpec<S: 'static, E, A> {
    /// Stable game identifier.
    pub name: &'static str,
    /// Ordered, distinct stage identifiers.
    pub stages: &'static [S],
    /// Ephemeral state a stage starts with whenever it is entered.
    pub initial: fn(S) -> E,
    /// Whether the "next" control is unlocked for a stage and its state.
    pub gate: fn(S, &E) -> bool,
    /// Applies a player action to the active stage's ephemeral state.
    pub reduce: fn(S, &mut E, A),
}

/// The affordance the UI shows for moving forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NextControl {
    /// The gate is open; "next" works.
    Available,
    /// The gate is closed; render a disabled/locked "next".
    Locked,
    /// Already on the last stage.
    Finished,
}

/// Cursor over a game's stages plus the active stage's ephemeral state.
///
/// The cursor only ever moves by one in either direction or jumps back to
/// zero, so it is always a valid index into the game's stage list.
#[derive(Debug)]
pub struct StageMachine<S: 'static, E: 'static, A: 'static> {
    spec: &'static GameSpec<S, E, A>,
    cursor: usize,
    furthest: usize,
    ephemeral: E,
}

impl<S: 'static, E: 'static, A: 'static> StageMachine<S, E, A>
where
    S: Copy + PartialEq + Debug,
    E: Debug,
{
    /// Starts a session at the first stage.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the game has no stages or lists
    /// a stage twice.
    pub fn new(spec: &'static GameSpec<S, E, A>) -> Result<Self, DomainError> {
        let Some(&first) = spec.stages.first() else {
            return Err(DomainError::Validation(format!(
                "game {} has no stages",
                spec.name
            )));
        };
        for (index, stage) in spec.stages.iter().enumerate() {
            if spec.stages[..index].contains(stage) {
                return Err(DomainError::Validation(format!(
                    "game {} lists stage {stage:?} more than once",
                    spec.name
                )));
            }
        }

        Ok(Self {
            spec,
            cursor: 0,
            furthest: 0,
            ephemeral: (spec.initial)(first),
        })
    }

    /// The game this session plays.
    #[must_use]
    pub fn spec(&self) -> &'static GameSpec<S, E, A> {
        self.spec
    }

    /// Zero-based index of the active stage.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The active stage.
    #[must_use]
    pub fn stage(&self) -> S {
        self.spec.stages[self.cursor]
    }

    /// Number of stages in the game.
    #[must_use]
    pub fn stage_count(&self) -> usize {
        self.spec.stages.len()
    }

    /// Highest cursor reached since the session started or was reset.
    #[must_use]
    pub fn furthest(&self) -> usize {
        self.furthest
    }

    /// Whether the active stage is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.cursor + 1 == self.spec.stages.len()
    }

    /// Ephemeral state of the active stage.
    #[must_use]
    pub fn ephemeral(&self) -> &E {
        &self.ephemeral
    }

    /// Percentage of the game completed, for progress bars.
    #[must_use]
    pub fn progress_percent(&self) -> usize {
        if self.spec.stages.len() == 1 {
            return 100;
        }
        self.cursor * 100 / (self.spec.stages.len() - 1)
    }

    /// Applies a player action to the active stage's ephemeral state.
    pub fn dispatch(&mut self, action: A) {
        (self.spec.reduce)(self.stage(), &mut self.ephemeral, action);
    }

    /// Evaluates the active stage's gate.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        (self.spec.gate)(self.stage(), &self.ephemeral)
    }

    /// What the "next" control should look like right now.
    #[must_use]
    pub fn next_control(&self) -> NextControl {
        if self.is_last() {
            NextControl::Finished
        } else if self.can_advance() {
            NextControl::Available
        } else {
            NextControl::Locked
        }
    }

    /// Moves to the next stage and resets ephemeral state to that stage's
    /// defaults. Does nothing on the last stage. Returns whether the cursor
    /// moved.
    ///
    /// The gate is not consulted; see [`Self::try_advance`].
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.cursor += 1;
        self.furthest = self.furthest.max(self.cursor);
        self.ephemeral = (self.spec.initial)(self.stage());
        debug!(game = self.spec.name, stage = ?self.stage(), "advanced stage");
        true
    }

    /// Advances only if the active stage's gate is open.
    pub fn try_advance(&mut self) -> bool {
        self.next_control() == NextControl::Available && self.advance()
    }

    /// Moves back one stage. Does nothing on the first stage. Returns whether
    /// the cursor moved.
    ///
    /// The earlier stage comes back with its defaults; whatever it held when
    /// it was left is not restored.
    pub fn retreat(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.ephemeral = (self.spec.initial)(self.stage());
        debug!(game = self.spec.name, stage = ?self.stage(), "retreated stage");
        true
    }

    /// Returns to the first stage with fresh state.
    pub fn reset_all(&mut self) {
        self.cursor = 0;
        self.furthest = 0;
        self.ephemeral = (self.spec.initial)(self.stage());
        debug!(game = self.spec.name, "reset game");
    }
}
