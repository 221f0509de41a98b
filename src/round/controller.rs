//! Round lifecycle around a `MemoryGame`.
//!
//! A round waits for a difficulty, then counts down one second per tick.
//! Clearing the board ends it with a bonus of
//! `remaining seconds * bonus rate`, awarded once; running out of time ends
//! it as a loss. Cards can only be chosen while the round is in progress.

use super::phase::{RoundOutcome, RoundPhase, TickOutcome};
use crate::core::{Difficulty, RoundRules};
use crate::engine::{ChooseOutcome, MemoryGame};

/// Drives one timed round of a `MemoryGame`.
#[derive(Clone, Debug)]
pub struct RoundController<C: Clone> {
    game: MemoryGame<C>,
    rules: RoundRules,
    phase: RoundPhase,
    remaining: u32,
    bonus_awarded: bool,
}

impl<C: Clone + PartialEq> RoundController<C> {
    /// Wrap a game with the default rules.
    #[must_use]
    pub fn new(game: MemoryGame<C>) -> Self {
        Self::with_rules(game, RoundRules::default())
    }

    /// Wrap a game with custom rules.
    #[must_use]
    pub fn with_rules(game: MemoryGame<C>, rules: RoundRules) -> Self {
        Self {
            game,
            rules,
            phase: RoundPhase::AwaitingDifficulty,
            remaining: 0,
            bonus_awarded: false,
        }
    }

    // === Queries ===

    #[must_use]
    pub fn game(&self) -> &MemoryGame<C> {
        &self.game
    }

    /// Give back the game, ending the controller's ownership.
    #[must_use]
    pub fn into_game(self) -> MemoryGame<C> {
        self.game
    }

    #[must_use]
    pub fn rules(&self) -> &RoundRules {
        &self.rules
    }

    #[must_use]
    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    /// Seconds left on the clock. Frozen once the round ends.
    #[must_use]
    pub fn remaining_time(&self) -> u32 {
        self.remaining
    }

    #[must_use]
    pub fn difficulty(&self) -> Option<Difficulty> {
        self.phase.difficulty()
    }

    #[must_use]
    pub fn is_in_progress(&self) -> bool {
        matches!(self.phase, RoundPhase::InProgress { .. })
    }

    #[must_use]
    pub fn is_ended(&self) -> bool {
        matches!(self.phase, RoundPhase::Ended { .. })
    }

    #[must_use]
    pub fn bonus_awarded(&self) -> bool {
        self.bonus_awarded
    }

    // === Events ===

    /// Start the round at the given difficulty.
    ///
    /// Only valid while awaiting a difficulty; returns false otherwise.
    pub fn select_difficulty(&mut self, difficulty: Difficulty) -> bool {
        if self.phase != RoundPhase::AwaitingDifficulty {
            log::debug!("Ignoring difficulty {} in phase {:?}", difficulty, self.phase);
            return false;
        }

        self.remaining = self.rules.countdown(difficulty);
        self.bonus_awarded = false;
        self.phase = RoundPhase::InProgress { difficulty };
        log::info!("Round started on {} with {}s", difficulty, self.remaining);
        true
    }

    /// Choose a card. Ignored unless the round is in progress.
    pub fn choose(&mut self, card_id: &str) -> ChooseOutcome {
        if !self.is_in_progress() {
            return ChooseOutcome::Ignored;
        }
        self.game.choose(card_id)
    }

    /// Reshuffle the table.
    pub fn shuffle(&mut self) {
        self.game.shuffle();
    }

    /// Advance the countdown by one second.
    pub fn on_tick(&mut self) -> TickOutcome {
        let RoundPhase::InProgress { difficulty } = self.phase else {
            return TickOutcome::Ignored;
        };

        if self.game.all_matched() && !self.bonus_awarded {
            // Never negative, even with unvalidated rules
            let rate = self.rules.bonus_rate(difficulty).max(0);
            let bonus = i64::from(self.remaining).saturating_mul(rate);
            self.game.add_points(bonus);
            self.bonus_awarded = true;
            return self.end(RoundOutcome::Won {
                difficulty,
                remaining: self.remaining,
                bonus,
            });
        }

        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining > 0 {
            log::trace!("Tick: {}s left", self.remaining);
            return TickOutcome::Counted {
                remaining: self.remaining,
            };
        }

        // Time is up on the tick that empties the clock
        self.end(RoundOutcome::Lost { difficulty })
    }

    fn end(&mut self, outcome: RoundOutcome) -> TickOutcome {
        self.phase = RoundPhase::Ended { outcome };
        log::info!(
            "Round ended: {} (score {}, {}s left)",
            outcome.title(),
            self.game.score(),
            self.remaining
        );
        TickOutcome::Ended(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DifficultyRules;

    fn controller() -> RoundController<char> {
        RoundController::new(MemoryGame::with_seed(2, 42, |i| (b'A' + i as u8) as char))
    }

    fn clear_board(round: &mut RoundController<char>) {
        for id in ["1a", "1b", "2a", "2b"] {
            round.choose(id);
        }
        assert!(round.game().all_matched());
    }

    #[test]
    fn test_starts_awaiting_difficulty() {
        let round = controller();
        assert_eq!(round.phase(), RoundPhase::AwaitingDifficulty);
        assert_eq!(round.remaining_time(), 0);
        assert_eq!(round.difficulty(), None);
    }

    #[test]
    fn test_select_difficulty_sets_budget() {
        for (difficulty, budget) in [
            (Difficulty::Easy, 60),
            (Difficulty::Medium, 45),
            (Difficulty::Hard, 30),
        ] {
            let mut round = controller();
            assert!(round.select_difficulty(difficulty));
            assert_eq!(round.remaining_time(), budget);
            assert_eq!(round.phase(), RoundPhase::InProgress { difficulty });
        }
    }

    #[test]
    fn test_reselect_is_ignored() {
        let mut round = controller();
        round.select_difficulty(Difficulty::Hard);
        round.on_tick();

        assert!(!round.select_difficulty(Difficulty::Easy));
        assert_eq!(round.difficulty(), Some(Difficulty::Hard));
        assert_eq!(round.remaining_time(), 29);
    }

    #[test]
    fn test_tick_before_start_is_ignored() {
        let mut round = controller();
        assert_eq!(round.on_tick(), TickOutcome::Ignored);
        assert_eq!(round.phase(), RoundPhase::AwaitingDifficulty);
    }

    #[test]
    fn test_choose_before_start_is_ignored() {
        let mut round = controller();
        assert_eq!(round.choose("1a"), ChooseOutcome::Ignored);
        assert_eq!(round.game().face_up_unmatched_count(), 0);
    }

    #[test]
    fn test_tick_counts_down() {
        let mut round = controller();
        round.select_difficulty(Difficulty::Medium);

        assert_eq!(round.on_tick(), TickOutcome::Counted { remaining: 44 });
        assert_eq!(round.on_tick(), TickOutcome::Counted { remaining: 43 });
        assert_eq!(round.remaining_time(), 43);
    }

    #[test]
    fn test_time_out_is_a_loss() {
        let mut round = controller();
        round.select_difficulty(Difficulty::Hard);

        for _ in 0..29 {
            assert!(matches!(round.on_tick(), TickOutcome::Counted { .. }));
        }
        let last = round.on_tick();

        let lost = RoundOutcome::Lost {
            difficulty: Difficulty::Hard,
        };
        assert_eq!(last, TickOutcome::Ended(lost));
        assert_eq!(round.phase(), RoundPhase::Ended { outcome: lost });
        assert_eq!(round.remaining_time(), 0);

        // Terminal
        assert_eq!(round.on_tick(), TickOutcome::Ignored);
        assert_eq!(round.choose("1a"), ChooseOutcome::Ignored);
    }

    #[test]
    fn test_clearing_board_wins_with_bonus() {
        let mut round = controller();
        round.select_difficulty(Difficulty::Hard);
        for _ in 0..10 {
            round.on_tick();
        }
        clear_board(&mut round);
        assert_eq!(round.game().score(), 4);

        let outcome = round.on_tick();
        let won = RoundOutcome::Won {
            difficulty: Difficulty::Hard,
            remaining: 20,
            bonus: 400,
        };
        assert_eq!(outcome, TickOutcome::Ended(won));
        assert_eq!(round.game().score(), 404);
        assert!(round.bonus_awarded());

        // No second award, clock frozen
        assert_eq!(round.on_tick(), TickOutcome::Ignored);
        assert_eq!(round.game().score(), 404);
        assert_eq!(round.remaining_time(), 20);
    }

    #[test]
    fn test_huge_bonus_rate_saturates() {
        let rules = RoundRules::default().with(Difficulty::Easy, DifficultyRules::new(60, i64::MAX));
        let mut round = RoundController::with_rules(MemoryGame::with_seed(2, 1, |i| i), rules);
        round.select_difficulty(Difficulty::Easy);
        for id in ["1a", "1b", "2a", "2b"] {
            round.choose(id);
        }

        let won = RoundOutcome::Won {
            difficulty: Difficulty::Easy,
            remaining: 60,
            bonus: i64::MAX,
        };
        assert_eq!(round.on_tick(), TickOutcome::Ended(won));
        assert_eq!(round.game().score(), i64::MAX);
    }

    #[test]
    fn test_negative_bonus_rate_awards_nothing() {
        let rules = RoundRules::default().with(Difficulty::Hard, DifficultyRules::new(30, -20));
        let mut round = RoundController::with_rules(MemoryGame::with_seed(2, 1, |i| i), rules);
        round.select_difficulty(Difficulty::Hard);
        for id in ["1a", "1b", "2a", "2b"] {
            round.choose(id);
        }

        let won = RoundOutcome::Won {
            difficulty: Difficulty::Hard,
            remaining: 30,
            bonus: 0,
        };
        assert_eq!(round.on_tick(), TickOutcome::Ended(won));
        assert_eq!(round.game().score(), 4);
    }

    #[test]
    fn test_custom_rules() {
        let rules = RoundRules::default().with(Difficulty::Easy, DifficultyRules::new(5, 7));
        let mut round = RoundController::with_rules(MemoryGame::with_seed(2, 1, |i| i), rules);
        round.select_difficulty(Difficulty::Easy);
        assert_eq!(round.remaining_time(), 5);

        for id in ["1a", "1b", "2a", "2b"] {
            round.choose(id);
        }
        round.on_tick();
        assert_eq!(round.game().score(), 4 + 5 * 7);
    }
}
