//! # memory-match
//!
//! A timed single-player memory matching card game.
//!
//! ## Design Principles
//!
//! 1. **Pure engine**: `MemoryGame` holds cards and score and enforces the
//!    matching rules. It has no clock and no I/O.
//!
//! 2. **Explicit invariants**: at most one unmatched card is face-up. The
//!    only transition that turns a card face-up also turns every other card
//!    face-down, and debug builds assert the invariant after every choice.
//!
//! 3. **Total operations**: unknown cards, repeated difficulty selection and
//!    stray ticks are no-ops reported through return values, never errors.
//!
//! ## Architecture
//!
//! - **Round on top of game**: `RoundController` adds difficulty, countdown,
//!   win/lose and the time bonus around a `MemoryGame`.
//!
//! - **One task per session**: `SessionActor` runs events and ticks on a
//!   single tokio task and publishes snapshots on a `watch` channel.
//!
//! - **Persistent data structures**: cards live in an `im::Vector`, so game
//!   states clone in O(1).
//!
//! ## Modules
//!
//! - `core`: RNG, difficulty rules, configuration, errors
//! - `cards`: cards, card IDs, emoji palette
//! - `engine`: the matching state machine and snapshots
//! - `round`: round lifecycle and countdown
//! - `session`: the async session actor
//!
//! ## Example
//!
//! ```
//! use memory_match::{ChooseOutcome, Difficulty, MemoryGame, RoundController, RoundPhase};
//!
//! let game = MemoryGame::with_seed(2, 42, |pair| ["A", "B"][pair]);
//! let mut round = RoundController::new(game);
//! round.select_difficulty(Difficulty::Medium);
//!
//! assert_eq!(round.choose("1a"), ChooseOutcome::Revealed);
//! assert_eq!(round.choose("1b"), ChooseOutcome::Matched);
//! round.choose("2a");
//! round.choose("2b");
//!
//! round.on_tick();
//! assert!(matches!(round.phase(), RoundPhase::Ended { .. }));
//! assert_eq!(round.game().score(), 4 + 45 * 10);
//! ```

pub mod cards;
pub mod core;
pub mod engine;
pub mod round;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, Difficulty, DifficultyRules, GameConfig, GameRng, ParseDifficultyError,
    RoundRules, SessionError,
};

pub use crate::cards::{palette, Card, CardId};

pub use crate::engine::{ChooseOutcome, GameSnapshot, MemoryGame, MATCH_POINTS, SEEN_PENALTY};

pub use crate::round::{format_clock, RoundController, RoundOutcome, RoundPhase, TickOutcome};

pub use crate::session::{ScoreChange, SessionActor, SessionHandle, SessionSnapshot};
