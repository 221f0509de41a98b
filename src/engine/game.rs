//! The memory game state machine.
//!
//! `MemoryGame` owns the cards and the score and enforces the matching
//! rules. It knows nothing about time; `RoundController` adds that.
//!
//! ## Rules
//!
//! - Choosing a face-down, unmatched card with nothing else revealed turns it
//!   face-up and every other card face-down.
//! - Choosing a second card compares contents:
//!   - equal: both cards are matched, +2 points
//!   - different: -1 point for each of the two cards that has been seen
//!     before, as long as the score is above zero at the time of that
//!     deduction; the new card is revealed and the old one turned face-down
//! - A card turned face-down is seen from then on.
//!
//! At most one unmatched card is face-up at any time.

use im::Vector;

use super::snapshot::GameSnapshot;
use crate::cards::{palette, Card, CardId};
use crate::core::{GameConfig, GameRng};

/// Points for finding a pair.
pub const MATCH_POINTS: i64 = 2;

/// Points lost per already-seen card in a mismatch.
pub const SEEN_PENALTY: i64 = 1;

/// Result of choosing a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChooseOutcome {
    /// Unknown, face-up or matched card. Nothing changed.
    Ignored,
    /// The card was turned face-up as the first card of a pair attempt.
    Revealed,
    /// The card completed a pair.
    Matched,
    /// The card did not match the revealed card.
    Mismatched {
        /// Points deducted (0, 1 or 2).
        penalty: i64,
    },
}

impl ChooseOutcome {
    /// Change in score caused by the choice.
    #[must_use]
    pub fn score_delta(self) -> i64 {
        match self {
            ChooseOutcome::Ignored | ChooseOutcome::Revealed => 0,
            ChooseOutcome::Matched => MATCH_POINTS,
            ChooseOutcome::Mismatched { penalty } => -penalty,
        }
    }

    /// Whether the choice changed the game at all.
    #[must_use]
    pub fn is_ignored(self) -> bool {
        self == ChooseOutcome::Ignored
    }
}

/// A game in progress: shuffled cards, score, and the RNG used to shuffle.
///
/// Cards live in an `im::Vector`, so cloning a game is cheap.
#[derive(Clone, Debug)]
pub struct MemoryGame<C: Clone> {
    cards: Vector<Card<C>>,
    score: i64,
    rng: GameRng,
}

impl<C: Clone + PartialEq> MemoryGame<C> {
    /// Fewest pairs a game is dealt.
    pub const MIN_PAIRS: usize = 2;

    /// Create a game with an entropy-seeded shuffle RNG.
    ///
    /// See [`MemoryGame::with_seed`].
    pub fn new<F>(pair_count: usize, content_factory: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        Self::with_rng(pair_count, GameRng::from_entropy(), content_factory)
    }

    /// Create a game with a deterministic shuffle RNG.
    ///
    /// Deals `max(2, pair_count)` pairs. `content_factory` is called once per
    /// pair index, and both cards of the pair get its content. Cards start in
    /// pair order, face-down; call [`shuffle`](Self::shuffle) to mix them.
    pub fn with_seed<F>(pair_count: usize, seed: u64, content_factory: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        Self::with_rng(pair_count, GameRng::new(seed), content_factory)
    }

    fn with_rng<F>(pair_count: usize, rng: GameRng, mut content_factory: F) -> Self
    where
        F: FnMut(usize) -> C,
    {
        let pairs = pair_count.max(Self::MIN_PAIRS);
        let mut cards = Vector::new();

        for pair_index in 0..pairs {
            let content = content_factory(pair_index);
            let (a, b) = CardId::pair(pair_index);
            cards.push_back(Card::new(a, content.clone()));
            cards.push_back(Card::new(b, content));
        }

        log::debug!("Dealt {} pairs (seed {})", pairs, rng.seed());

        Self {
            cards,
            score: 0,
            rng,
        }
    }

    // === Queries ===

    /// All cards in table order.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card<C>> {
        &self.cards
    }

    /// Look up a card by ID.
    #[must_use]
    pub fn card(&self, card_id: &str) -> Option<&Card<C>> {
        self.cards.iter().find(|card| card.id().as_str() == card_id)
    }

    /// Number of cards on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Always false: a game has at least `2 * MIN_PAIRS` cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// True when every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// The face-up unmatched card waiting for its partner, if any.
    #[must_use]
    pub fn potential_match(&self) -> Option<&Card<C>> {
        self.potential_match_index().map(|index| &self.cards[index])
    }

    /// Number of face-up unmatched cards. Never more than one.
    #[must_use]
    pub fn face_up_unmatched_count(&self) -> usize {
        self.cards.iter().filter(|card| card.is_potential_match()).count()
    }

    /// Serializable copy of the visible state.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<C> {
        GameSnapshot {
            cards: self.cards.iter().cloned().collect(),
            score: self.score,
            all_matched: self.all_matched(),
        }
    }

    /// Seed of the shuffle RNG, for replaying a deal.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Operations ===

    /// Choose a card by ID.
    ///
    /// Unknown IDs and cards that are face-up or matched are ignored.
    pub fn choose(&mut self, card_id: &str) -> ChooseOutcome {
        let Some(chosen) = self.index_of(card_id) else {
            return ChooseOutcome::Ignored;
        };
        if self.cards[chosen].is_face_up() || self.cards[chosen].is_matched() {
            return ChooseOutcome::Ignored;
        }

        let outcome = match self.potential_match_index() {
            None => {
                self.set_face_up_at(chosen);
                ChooseOutcome::Revealed
            }
            Some(potential) if self.cards[chosen].content() == self.cards[potential].content() => {
                self.cards[chosen].mark_matched();
                self.cards[potential].mark_matched();
                self.cards[chosen].turn_face_up();
                self.score += MATCH_POINTS;
                log::debug!(
                    "Matched {} with {}",
                    self.cards[chosen].id(),
                    self.cards[potential].id()
                );
                ChooseOutcome::Matched
            }
            Some(potential) => {
                let before = self.score;
                // Each deduction is gated on the score at that moment
                for index in [chosen, potential] {
                    if self.cards[index].has_been_seen() && self.score > 0 {
                        self.score -= SEEN_PENALTY;
                    }
                }
                self.set_face_up_at(chosen);
                let penalty = before - self.score;
                log::debug!(
                    "Mismatch {} / {} (penalty {})",
                    self.cards[chosen].id(),
                    self.cards[potential].id(),
                    penalty
                );
                ChooseOutcome::Mismatched { penalty }
            }
        };

        debug_assert!(
            self.face_up_unmatched_count() <= 1,
            "more than one unmatched card face-up"
        );
        outcome
    }

    /// Turn one card face-up and every other card face-down.
    ///
    /// Returns false (and changes nothing) if the ID is unknown.
    pub fn set_face_up(&mut self, card_id: &str) -> bool {
        match self.index_of(card_id) {
            Some(index) => {
                self.set_face_up_at(index);
                true
            }
            None => false,
        }
    }

    /// Randomly reorder the cards. Flags and score are unchanged.
    pub fn shuffle(&mut self) {
        let mut cards: Vec<Card<C>> = self.cards.iter().cloned().collect();
        self.rng.shuffle(&mut cards);
        self.cards = cards.into_iter().collect();
    }

    /// Add (or with a negative value, remove) points. No lower bound;
    /// saturates at the ends of `i64`.
    pub fn add_points(&mut self, points: i64) {
        self.score = self.score.saturating_add(points);
    }

    // === Internals ===

    fn index_of(&self, card_id: &str) -> Option<usize> {
        self.cards
            .iter()
            .position(|card| card.id().as_str() == card_id)
    }

    fn potential_match_index(&self) -> Option<usize> {
        self.cards.iter().position(Card::is_potential_match)
    }

    fn set_face_up_at(&mut self, index: usize) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            if i == index {
                card.turn_face_up();
            } else {
                card.turn_face_down();
            }
        }
    }
}

impl MemoryGame<String> {
    /// Deal the emoji palette per `config` and shuffle once.
    ///
    /// Pair counts beyond the palette are capped at `palette::EMOJIS.len()`.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let pairs = config.pair_count.min(palette::EMOJIS.len());
        let symbol = |pair_index| {
            palette::content(pair_index)
                .map(str::to_string)
                .unwrap_or_default()
        };
        let mut game = match config.seed {
            Some(seed) => Self::with_seed(pairs, seed, symbol),
            None => Self::new(pairs, symbol),
        };
        game.shuffle();
        game
    }
}
