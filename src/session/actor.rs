//! Session actor with async message handling and the countdown tick.
//!
//! The actor owns the round and is the only code that touches it. User
//! events arrive on an mpsc inbox; the countdown is a `tokio::time::Interval`
//! that exists only while the round is in progress. Both are polled from a
//! single `select!` loop, so events and ticks never interleave.
//!
//! Every change is published on a `watch` channel for observers.

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{self, Duration, Instant, Interval, MissedTickBehavior};

use super::messages::{ScoreChange, SessionMessage, SessionSnapshot};
use crate::cards::CardId;
use crate::core::{ConfigError, Difficulty, GameConfig, SessionError};
use crate::engine::{ChooseOutcome, MemoryGame};
use crate::round::{format_clock, RoundController};

const INBOX_CAPACITY: usize = 64;

/// Session handle for sending messages
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: mpsc::Sender<SessionMessage>,
    updates: watch::Receiver<SessionSnapshot>,
}

impl SessionHandle {
    /// Build a session and run it on the current tokio runtime.
    ///
    /// The session stops when the last handle is dropped.
    pub fn spawn(config: &GameConfig) -> Result<Self, ConfigError> {
        let (actor, handle) = SessionActor::new(config)?;
        tokio::spawn(actor.run());
        Ok(handle)
    }

    /// Start the round. Returns false if a difficulty was already chosen.
    pub async fn select_difficulty(&self, difficulty: Difficulty) -> Result<bool, SessionError> {
        self.request(|response| SessionMessage::SelectDifficulty {
            difficulty,
            response,
        })
        .await
    }

    /// Choose a card.
    pub async fn choose(&self, card_id: impl Into<CardId>) -> Result<ChooseOutcome, SessionError> {
        let card_id = card_id.into();
        self.request(|response| SessionMessage::Choose { card_id, response })
            .await
    }

    /// Reshuffle the table.
    pub async fn shuffle(&self) -> Result<(), SessionError> {
        self.request(|response| SessionMessage::Shuffle { response })
            .await
    }

    /// Current state, straight from the actor.
    pub async fn snapshot(&self) -> Result<SessionSnapshot, SessionError> {
        self.request(|response| SessionMessage::GetSnapshot { response })
            .await
    }

    /// Watch published snapshots.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionSnapshot> {
        self.updates.clone()
    }

    /// Most recently published snapshot.
    #[must_use]
    pub fn latest(&self) -> SessionSnapshot {
        self.updates.borrow().clone()
    }

    async fn request<T>(
        &self,
        message: impl FnOnce(oneshot::Sender<T>) -> SessionMessage,
    ) -> Result<T, SessionError> {
        let (response, receiver) = oneshot::channel();
        self.sender
            .send(message(response))
            .await
            .map_err(|_| SessionError::Closed)?;
        receiver.await.map_err(|_| SessionError::Closed)
    }
}

/// Actor owning one game session
pub struct SessionActor {
    /// Round state (FSM)
    round: RoundController<String>,

    /// Message inbox
    inbox: mpsc::Receiver<SessionMessage>,

    /// Countdown period
    tick_period: Duration,

    /// Published state
    updates: watch::Sender<SessionSnapshot>,

    /// Score change from the last accepted choice
    last_score_change: Option<ScoreChange>,
}

impl SessionActor {
    /// Create a session from a configuration.
    ///
    /// Deals the palette symbols and shuffles once.
    pub fn new(config: &GameConfig) -> Result<(Self, SessionHandle), ConfigError> {
        config.validate()?;

        let game = MemoryGame::<String>::from_config(config);
        let round = RoundController::with_rules(game, config.rules);
        let (sender, inbox) = mpsc::channel(INBOX_CAPACITY);
        let (updates, receiver) = watch::channel(snapshot_of(&round, None));

        let actor = Self {
            round,
            inbox,
            tick_period: config.tick_period(),
            updates,
            last_score_change: None,
        };
        let handle = SessionHandle {
            sender,
            updates: receiver,
        };

        Ok((actor, handle))
    }

    /// Run the session event loop until every handle is dropped.
    pub async fn run(mut self) {
        log::info!("Session starting with {} cards", self.round.game().len());

        let mut ticker: Option<Interval> = None;

        loop {
            tokio::select! {
                message = self.inbox.recv() => {
                    let Some(message) = message else {
                        break;
                    };
                    self.handle_message(message);

                    if ticker.is_none() && self.round.is_in_progress() {
                        ticker = Some(self.start_ticker());
                    }
                }

                () = next_tick(&mut ticker) => {
                    self.round.on_tick();
                    if self.round.is_ended() {
                        ticker = None;
                        log::debug!("Countdown stopped");
                    }
                    self.publish();
                }
            }
        }

        log::info!("Session closed");
    }

    fn handle_message(&mut self, message: SessionMessage) {
        match message {
            SessionMessage::SelectDifficulty {
                difficulty,
                response,
            } => {
                let started = self.round.select_difficulty(difficulty);
                if started {
                    self.publish();
                }
                let _ = response.send(started);
            }

            SessionMessage::Choose { card_id, response } => {
                let outcome = self.round.choose(card_id.as_str());
                if !outcome.is_ignored() {
                    self.last_score_change = Some(ScoreChange {
                        amount: outcome.score_delta(),
                        card_id,
                    });
                    self.publish();
                }
                let _ = response.send(outcome);
            }

            SessionMessage::Shuffle { response } => {
                self.round.shuffle();
                self.publish();
                let _ = response.send(());
            }

            SessionMessage::GetSnapshot { response } => {
                let _ = response.send(self.snapshot());
            }
        }
    }

    fn start_ticker(&self) -> Interval {
        // First tick one full period after the round starts
        let mut interval = time::interval_at(Instant::now() + self.tick_period, self.tick_period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        log::debug!("Countdown started ({:?} per tick)", self.tick_period);
        interval
    }

    fn snapshot(&self) -> SessionSnapshot {
        snapshot_of(&self.round, self.last_score_change.clone())
    }

    fn publish(&self) {
        self.updates.send_replace(self.snapshot());
    }
}

async fn next_tick(ticker: &mut Option<Interval>) {
    match ticker {
        Some(interval) => {
            interval.tick().await;
        }
        None => std::future::pending().await,
    }
}

fn snapshot_of(
    round: &RoundController<String>,
    last_score_change: Option<ScoreChange>,
) -> SessionSnapshot {
    SessionSnapshot {
        game: round.game().snapshot(),
        phase: round.phase(),
        remaining_time: round.remaining_time(),
        clock: format_clock(round.remaining_time()),
        last_score_change,
    }
}
