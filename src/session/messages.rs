//! Session message and snapshot types.

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;

use crate::cards::CardId;
use crate::core::Difficulty;
use crate::engine::{ChooseOutcome, GameSnapshot};
use crate::round::RoundPhase;

/// Messages that can be sent to a `SessionActor`
#[derive(Debug)]
pub enum SessionMessage {
    /// Start the round
    SelectDifficulty {
        difficulty: Difficulty,
        response: oneshot::Sender<bool>,
    },

    /// Player picked a card
    Choose {
        card_id: CardId,
        response: oneshot::Sender<ChooseOutcome>,
    },

    /// Reshuffle the table
    Shuffle { response: oneshot::Sender<()> },

    /// Get the current state
    GetSnapshot {
        response: oneshot::Sender<SessionSnapshot>,
    },
}

/// Score change caused by the most recent choice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreChange {
    /// Points gained (positive) or lost (negative). Zero for a plain reveal.
    pub amount: i64,

    /// Card whose choice caused the change.
    pub card_id: CardId,
}

impl ScoreChange {
    /// The change to show next to a card: `amount` for the causing card,
    /// zero for every other card.
    #[must_use]
    pub fn caused_by(&self, card_id: &str) -> i64 {
        if self.card_id.as_str() == card_id {
            self.amount
        } else {
            0
        }
    }
}

/// Everything a view needs to draw the session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub game: GameSnapshot<String>,
    pub phase: RoundPhase,
    pub remaining_time: u32,
    /// `remaining_time` as `MM:SS`
    pub clock: String,
    pub last_score_change: Option<ScoreChange>,
}

impl SessionSnapshot {
    #[must_use]
    pub fn score(&self) -> i64 {
        self.game.score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_change_caused_by() {
        let change = ScoreChange {
            amount: -2,
            card_id: CardId::new("4b"),
        };
        assert_eq!(change.caused_by("4b"), -2);
        assert_eq!(change.caused_by("4a"), 0);
    }
}
