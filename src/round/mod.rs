//! Timed rounds: difficulty selection, countdown, win/lose and bonus.
//!
//! `RoundController` wraps a `MemoryGame` and reacts to a once-per-second
//! tick supplied by its owner (see `session`).

pub mod clock;
pub mod controller;
pub mod phase;

pub use clock::format_clock;
pub use controller::RoundController;
pub use phase::{RoundOutcome, RoundPhase, TickOutcome};
