//! Game bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Difficulty, GameConfig};
use crate::engine::{ChooseOutcome, MemoryGame};
use crate::round::{format_clock, RoundController, RoundPhase, TickOutcome};

/// Python wrapper for a round of the emoji memory game.
///
/// Ticks are driven by the caller, one per second of game time.
#[pyclass(name = "MemoryGame")]
pub struct PyMemoryGame {
    round: RoundController<String>,
}

#[pymethods]
impl PyMemoryGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - pair_count: Number of pairs (2-10)
    /// - seed: RNG seed for a deterministic deal, or None
    #[new]
    #[pyo3(signature = (pair_count = 10, seed = None))]
    fn new(pair_count: usize, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::new().with_pair_count(pair_count);
        config.seed = seed;
        config
            .validate()
            .map_err(|e| PyValueError::new_err(e.to_string()))?;

        let game = MemoryGame::<String>::from_config(&config);
        Ok(Self {
            round: RoundController::with_rules(game, config.rules),
        })
    }

    /// Start the round: "easy", "medium" or "hard".
    ///
    /// Returns False if a difficulty was already chosen.
    fn select_difficulty(&mut self, difficulty: &str) -> PyResult<bool> {
        let difficulty: Difficulty = difficulty
            .parse()
            .map_err(|e: crate::core::ParseDifficultyError| PyValueError::new_err(e.to_string()))?;
        Ok(self.round.select_difficulty(difficulty))
    }

    /// Choose a card by ID.
    ///
    /// Returns "ignored", "revealed", "matched" or "mismatched".
    fn choose(&mut self, card_id: &str) -> &'static str {
        match self.round.choose(card_id) {
            ChooseOutcome::Ignored => "ignored",
            ChooseOutcome::Revealed => "revealed",
            ChooseOutcome::Matched => "matched",
            ChooseOutcome::Mismatched { .. } => "mismatched",
        }
    }

    /// Advance the clock one second.
    ///
    /// Returns "ignored", "counted", "won" or "lost".
    fn tick(&mut self) -> &'static str {
        match self.round.on_tick() {
            TickOutcome::Ignored => "ignored",
            TickOutcome::Counted { .. } => "counted",
            TickOutcome::Ended(outcome) if outcome.is_win() => "won",
            TickOutcome::Ended(_) => "lost",
        }
    }

    /// Reshuffle the table.
    fn shuffle(&mut self) {
        self.round.shuffle();
    }

    /// Cards in table order as (id, symbol, face_up, seen, matched).
    fn cards(&self) -> Vec<(String, String, bool, bool, bool)> {
        self.round
            .game()
            .cards()
            .iter()
            .map(|card| {
                (
                    card.id().to_string(),
                    card.content().clone(),
                    card.is_face_up(),
                    card.has_been_seen(),
                    card.is_matched(),
                )
            })
            .collect()
    }

    #[getter]
    fn score(&self) -> i64 {
        self.round.game().score()
    }

    #[getter]
    fn remaining_time(&self) -> u32 {
        self.round.remaining_time()
    }

    /// Remaining time as MM:SS.
    #[getter]
    fn clock(&self) -> String {
        format_clock(self.round.remaining_time())
    }

    /// "awaiting_difficulty", "in_progress", "won" or "lost".
    #[getter]
    fn phase(&self) -> &'static str {
        match self.round.phase() {
            RoundPhase::AwaitingDifficulty => "awaiting_difficulty",
            RoundPhase::InProgress { .. } => "in_progress",
            RoundPhase::Ended { outcome } if outcome.is_win() => "won",
            RoundPhase::Ended { .. } => "lost",
        }
    }

    fn __repr__(&self) -> String {
        format!(
            "MemoryGame(cards={}, score={}, phase={}, clock={})",
            self.round.game().len(),
            self.score(),
            self.phase(),
            self.clock()
        )
    }
}
