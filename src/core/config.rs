//! Difficulty levels, round rules and crate configuration.
//!
//! - `Difficulty`: easy / medium / hard
//! - `DifficultyRules`: countdown budget and bonus rate for one difficulty
//! - `RoundRules`: the rules for all three difficulties
//! - `GameConfig`: everything a session needs to start
//!
//! Configuration is built with `with_*` methods or loaded from JSON. Every
//! field has a default, so `{}` is a valid configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ParseDifficultyError};
use crate::cards::palette;

/// Round difficulty. Harder rounds are shorter but pay more per second left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Default countdown budget in seconds.
    #[must_use]
    pub const fn default_countdown(self) -> u32 {
        match self {
            Difficulty::Easy => 60,
            Difficulty::Medium => 45,
            Difficulty::Hard => 30,
        }
    }

    /// Default bonus points per second left on the clock.
    #[must_use]
    pub const fn default_bonus_rate(self) -> i64 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 10,
            Difficulty::Hard => 20,
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError(s.to_string())),
        }
    }
}

/// Timing and scoring for one difficulty.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRules {
    /// Seconds on the clock when the round starts.
    pub countdown_secs: u32,

    /// Bonus points awarded per second left when the board is cleared.
    pub bonus_rate: i64,
}

impl DifficultyRules {
    /// Create rules for one difficulty.
    #[must_use]
    pub const fn new(countdown_secs: u32, bonus_rate: i64) -> Self {
        Self {
            countdown_secs,
            bonus_rate,
        }
    }

    /// Bonus for clearing the board with the full countdown left.
    ///
    /// `None` if the rate is negative or the product overflows.
    #[must_use]
    pub fn max_bonus(&self) -> Option<i64> {
        if self.bonus_rate < 0 {
            return None;
        }
        i64::from(self.countdown_secs).checked_mul(self.bonus_rate)
    }

    /// The built-in rules for a difficulty.
    #[must_use]
    pub const fn defaults_for(difficulty: Difficulty) -> Self {
        Self::new(difficulty.default_countdown(), difficulty.default_bonus_rate())
    }
}

/// Rules for every difficulty.
///
/// Defaults: easy 60s at 2/s, medium 45s at 10/s, hard 30s at 20/s.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoundRules {
    pub easy: DifficultyRules,
    pub medium: DifficultyRules,
    pub hard: DifficultyRules,
}

impl Default for RoundRules {
    fn default() -> Self {
        Self {
            easy: DifficultyRules::defaults_for(Difficulty::Easy),
            medium: DifficultyRules::defaults_for(Difficulty::Medium),
            hard: DifficultyRules::defaults_for(Difficulty::Hard),
        }
    }
}

impl RoundRules {
    /// Rules for a difficulty.
    #[must_use]
    pub fn get(&self, difficulty: Difficulty) -> DifficultyRules {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Countdown budget in seconds for a difficulty.
    #[must_use]
    pub fn countdown(&self, difficulty: Difficulty) -> u32 {
        self.get(difficulty).countdown_secs
    }

    /// Bonus points per remaining second for a difficulty.
    #[must_use]
    pub fn bonus_rate(&self, difficulty: Difficulty) -> i64 {
        self.get(difficulty).bonus_rate
    }

    /// Override the rules for one difficulty.
    #[must_use]
    pub fn with(mut self, difficulty: Difficulty, rules: DifficultyRules) -> Self {
        match difficulty {
            Difficulty::Easy => self.easy = rules,
            Difficulty::Medium => self.medium = rules,
            Difficulty::Hard => self.hard = rules,
        }
        self
    }
}

/// Complete session configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Number of pairs to deal (at most the palette size, at least 2 are dealt).
    pub pair_count: usize,

    /// Shuffle seed. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Period of the countdown tick in milliseconds.
    pub tick_period_ms: u64,

    /// Per-difficulty countdown and bonus rules.
    pub rules: RoundRules,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pair_count: palette::EMOJIS.len(),
            seed: None,
            tick_period_ms: 1000,
            rules: RoundRules::default(),
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the configuration can drive a session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let available = palette::EMOJIS.len();
        if self.pair_count > available {
            return Err(ConfigError::TooManyPairs {
                requested: self.pair_count,
                available,
            });
        }
        if self.tick_period_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        for difficulty in Difficulty::ALL {
            let rules = self.rules.get(difficulty);
            if rules.countdown_secs == 0 {
                return Err(ConfigError::ZeroCountdown(difficulty));
            }
            if rules.max_bonus().is_none() {
                return Err(ConfigError::InvalidBonusRate(difficulty));
            }
        }
        Ok(())
    }

    /// Set the number of pairs.
    #[must_use]
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the tick period.
    #[must_use]
    pub fn with_tick_period_ms(mut self, millis: u64) -> Self {
        self.tick_period_ms = millis;
        self
    }

    /// Set the round rules.
    #[must_use]
    pub fn with_rules(mut self, rules: RoundRules) -> Self {
        self.rules = rules;
        self
    }

    /// Tick period as a `Duration`.
    #[must_use]
    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_period_ms)
    }
}
