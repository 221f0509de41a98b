//! Error types for the fallible edges of the crate.
//!
//! Game operations never fail; these cover configuration loading, string
//! parsing, and talking to a session that has shut down.

use thiserror::Error;

use super::config::Difficulty;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Malformed JSON
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// More pairs requested than the palette provides
    #[error("Too many pairs: requested {requested}, palette has {available}")]
    TooManyPairs { requested: usize, available: usize },

    /// Tick period of zero
    #[error("Tick period must be at least 1ms")]
    ZeroTickPeriod,

    /// A difficulty with no time on the clock
    #[error("Countdown for {0} must be at least 1 second")]
    ZeroCountdown(Difficulty),

    /// A negative bonus rate, or one whose full-clock bonus overflows
    #[error("Bonus rate for {0} is out of range")]
    InvalidBonusRate(Difficulty),
}

/// Unrecognized difficulty name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown difficulty '{0}'")]
pub struct ParseDifficultyError(pub String);

/// Session errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The session actor has stopped
    #[error("Session is closed")]
    Closed,
}
