//! Core types: RNG, difficulty rules, configuration and errors.
//!
//! These are shared by the engine, the round controller and the session.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Difficulty, DifficultyRules, GameConfig, RoundRules};
pub use error::{ConfigError, ParseDifficultyError, SessionError};
pub use rng::GameRng;
