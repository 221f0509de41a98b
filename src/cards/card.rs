//! Cards and card identifiers.
//!
//! A `Card` is one physical card on the table. Its content decides matching;
//! its flags record what the player has done with it:
//!
//! - `face_up`: currently showing its content
//! - `seen`: has been turned back face-down at least once (never cleared)
//! - `matched`: paired with its twin and out of play
//!
//! Flags only change through crate-internal transitions so that the engine
//! can keep its invariants.

use serde::{Deserialize, Serialize};

/// Identifier of a physical card, e.g. `"3a"` or `"3b"`.
///
/// The two cards of pair `n` (0-based) are `"{n+1}a"` and `"{n+1}b"`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a card ID from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// IDs of both cards of a pair.
    #[must_use]
    pub fn pair(pair_index: usize) -> (Self, Self) {
        let n = pair_index + 1;
        (Self(format!("{n}a")), Self(format!("{n}b")))
    }

    /// The raw ID string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A card on the table.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<C> {
    id: CardId,
    content: C,
    face_up: bool,
    seen: bool,
    matched: bool,
}

impl<C> Card<C> {
    /// Create a face-down, unseen, unmatched card.
    pub fn new(id: impl Into<CardId>, content: C) -> Self {
        Self {
            id: id.into(),
            content,
            face_up: false,
            seen: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn id(&self) -> &CardId {
        &self.id
    }

    #[must_use]
    pub fn content(&self) -> &C {
        &self.content
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// True once the card has been turned face-down after being revealed.
    #[must_use]
    pub fn has_been_seen(&self) -> bool {
        self.seen
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    /// Still in play and showing its content.
    #[must_use]
    pub fn is_potential_match(&self) -> bool {
        self.face_up && !self.matched
    }

    pub(crate) fn turn_face_up(&mut self) {
        self.face_up = true;
    }

    /// Turn face-down. A card that was face-up becomes seen.
    pub(crate) fn turn_face_down(&mut self) {
        if self.face_up {
            self.face_up = false;
            self.seen = true;
        }
    }

    pub(crate) fn mark_matched(&mut self) {
        self.matched = true;
    }
}

impl<C: std::fmt::Display> std::fmt::Display for Card<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}: {} {}",
            self.id,
            self.content,
            if self.face_up { "up" } else { "down" }
        )?;
        if self.matched {
            write!(f, " matched")?;
        }
        Ok(())
    }
}
