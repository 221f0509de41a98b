//! The game engine: cards, matching rules and score.
//!
//! `MemoryGame` is pure state and logic with no notion of time.
//! `GameSnapshot` is its serializable projection.

pub mod game;
pub mod snapshot;

pub use game::{ChooseOutcome, MemoryGame, MATCH_POINTS, SEEN_PENALTY};
pub use snapshot::GameSnapshot;
