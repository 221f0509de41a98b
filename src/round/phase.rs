//! Round phases and outcomes.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// How a round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "result", rename_all = "lowercase")]
pub enum RoundOutcome {
    /// Board cleared before time ran out.
    Won {
        difficulty: Difficulty,
        /// Seconds left on the clock.
        remaining: u32,
        /// Bonus points awarded.
        bonus: i64,
    },
    /// Time ran out.
    Lost { difficulty: Difficulty },
}

impl RoundOutcome {
    #[must_use]
    pub fn is_win(&self) -> bool {
        matches!(self, RoundOutcome::Won { .. })
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        match self {
            RoundOutcome::Won { difficulty, .. } | RoundOutcome::Lost { difficulty } => *difficulty,
        }
    }

    /// Headline for the end-of-round message.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            RoundOutcome::Won { .. } => "Congratulations!",
            RoundOutcome::Lost { .. } => "Time's Up!",
        }
    }

    /// Body of the end-of-round message.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            RoundOutcome::Won { remaining, .. } => {
                format!("You finished the game with {remaining} seconds left!")
            }
            RoundOutcome::Lost { .. } => "You ran out of time.".to_string(),
        }
    }
}

/// Where a round is in its lifecycle.
///
/// `AwaitingDifficulty -> InProgress -> Ended`. `Ended` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum RoundPhase {
    #[default]
    AwaitingDifficulty,
    InProgress { difficulty: Difficulty },
    Ended { outcome: RoundOutcome },
}

impl RoundPhase {
    /// Difficulty of the round, once chosen.
    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        match self {
            RoundPhase::AwaitingDifficulty => None,
            RoundPhase::InProgress { difficulty } => Some(*difficulty),
            RoundPhase::Ended { outcome } => Some(outcome.difficulty()),
        }
    }

    /// Outcome, once the round has ended.
    #[must_use]
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self {
            RoundPhase::Ended { outcome } => Some(*outcome),
            _ => None,
        }
    }
}

/// Result of one countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not in progress; nothing happened.
    Ignored,
    /// One second elapsed; the round continues.
    Counted { remaining: u32 },
    /// The round ended on this tick.
    Ended(RoundOutcome),
}
