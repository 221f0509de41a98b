//! Read-only projections of a game for presentation layers.
//!
//! A `GameSnapshot` is a plain, serializable copy of what a player can see:
//! the cards in table order, the score, and whether the board is cleared.
//! Snapshots encode to JSON through serde or to compact bytes through bincode.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::cards::Card;

/// Serializable copy of a game's visible state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot<C> {
    /// Cards in table order.
    pub cards: Vec<Card<C>>,

    /// Current score.
    pub score: i64,

    /// Every card has been matched.
    pub all_matched: bool,
}

impl<C> GameSnapshot<C> {
    /// Number of matched cards.
    #[must_use]
    pub fn matched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_matched()).count()
    }
}

impl<C: Serialize> GameSnapshot<C> {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }
}

impl<C: DeserializeOwned> GameSnapshot<C> {
    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}
