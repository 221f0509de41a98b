//! Session actor tests.
//!
//! The countdown runs on tokio's paused clock, so sleeping in a test advances
//! game time deterministically.

use std::time::Duration;

use memory_match::{
    ChooseOutcome, Difficulty, GameConfig, RoundOutcome, RoundPhase, SessionActor, SessionError,
    SessionHandle,
};

fn config() -> GameConfig {
    GameConfig::new().with_seed(42)
}

fn all_card_ids(pairs: usize) -> Vec<String> {
    (1..=pairs)
        .flat_map(|pair| [format!("{pair}a"), format!("{pair}b")])
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_countdown_runs_once_started() {
    let session = SessionHandle::spawn(&config()).unwrap();

    // No countdown before a difficulty is chosen
    tokio::time::sleep(Duration::from_secs(5)).await;
    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.phase, RoundPhase::AwaitingDifficulty);
    assert_eq!(snapshot.remaining_time, 0);

    assert!(session.select_difficulty(Difficulty::Hard).await.unwrap());
    tokio::time::sleep(Duration::from_millis(10_500)).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.remaining_time, 20);
    assert_eq!(snapshot.clock, "00:20");
    assert!(matches!(snapshot.phase, RoundPhase::InProgress { .. }));
}

#[tokio::test(start_paused = true)]
async fn test_hard_round_times_out() {
    let session = SessionHandle::spawn(&config()).unwrap();
    session.select_difficulty(Difficulty::Hard).await.unwrap();

    tokio::time::sleep(Duration::from_secs(31)).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(
        snapshot.phase,
        RoundPhase::Ended {
            outcome: RoundOutcome::Lost {
                difficulty: Difficulty::Hard
            }
        }
    );
    assert_eq!(snapshot.remaining_time, 0);

    // Clock stays stopped
    tokio::time::sleep(Duration::from_secs(10)).await;
    assert_eq!(session.snapshot().await.unwrap(), snapshot);
    assert_eq!(session.choose("1a").await.unwrap(), ChooseOutcome::Ignored);
}

#[tokio::test(start_paused = true)]
async fn test_medium_win_with_bonus() {
    let session = SessionHandle::spawn(&config()).unwrap();
    session.select_difficulty(Difficulty::Medium).await.unwrap();

    tokio::time::sleep(Duration::from_millis(35_500)).await;
    assert_eq!(session.snapshot().await.unwrap().remaining_time, 10);

    for id in all_card_ids(10) {
        session.choose(id).await.unwrap();
    }
    assert_eq!(session.snapshot().await.unwrap().score(), 20);

    tokio::time::sleep(Duration::from_secs(1)).await;

    let snapshot = session.snapshot().await.unwrap();
    assert_eq!(snapshot.score(), 120);
    assert!(snapshot.game.all_matched);
    assert_eq!(
        snapshot.phase,
        RoundPhase::Ended {
            outcome: RoundOutcome::Won {
                difficulty: Difficulty::Medium,
                remaining: 10,
                bonus: 100,
            }
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_choose_before_start_is_ignored() {
    let session = SessionHandle::spawn(&config()).unwrap();

    assert_eq!(session.choose("1a").await.unwrap(), ChooseOutcome::Ignored);
    let snapshot = session.snapshot().await.unwrap();
    assert!(snapshot.game.cards.iter().all(|card| !card.is_face_up()));
    assert!(snapshot.last_score_change.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_last_score_change() {
    let session = SessionHandle::spawn(&config()).unwrap();
    session.select_difficulty(Difficulty::Easy).await.unwrap();

    session.choose("3a").await.unwrap();
    let change = session.snapshot().await.unwrap().last_score_change.unwrap();
    assert_eq!(change.amount, 0);

    assert_eq!(session.choose("3b").await.unwrap(), ChooseOutcome::Matched);
    let change = session.snapshot().await.unwrap().last_score_change.unwrap();
    assert_eq!(change.amount, 2);
    assert_eq!(change.caused_by("3b"), 2);
    assert_eq!(change.caused_by("3a"), 0);
}

#[tokio::test(start_paused = true)]
async fn test_subscribers_see_ticks() {
    let session = SessionHandle::spawn(&config()).unwrap();
    let mut updates = session.subscribe();
    updates.borrow_and_update();

    session.select_difficulty(Difficulty::Easy).await.unwrap();
    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().remaining_time, 60);

    updates.changed().await.unwrap();
    assert_eq!(updates.borrow_and_update().remaining_time, 59);
    assert_eq!(session.latest().clock, "00:59");
}

#[tokio::test(start_paused = true)]
async fn test_shuffle_keeps_cards() {
    let session = SessionHandle::spawn(&config()).unwrap();
    let mut before: Vec<_> = session.snapshot().await.unwrap().game.cards;

    session.shuffle().await.unwrap();
    let mut after: Vec<_> = session.snapshot().await.unwrap().game.cards;

    before.sort_by(|a, b| a.id().cmp(b.id()));
    after.sort_by(|a, b| a.id().cmp(b.id()));
    assert_eq!(before, after);
}

#[tokio::test(start_paused = true)]
async fn test_session_stops_when_handles_drop() {
    let (actor, handle) = SessionActor::new(&config()).unwrap();
    let task = tokio::spawn(actor.run());

    handle.select_difficulty(Difficulty::Easy).await.unwrap();
    drop(handle);

    // The running countdown does not keep the session alive
    tokio::time::timeout(Duration::from_secs(1), task)
        .await
        .expect("session did not stop")
        .unwrap();
}

#[tokio::test]
async fn test_closed_session() {
    let (actor, handle) = SessionActor::new(&config()).unwrap();
    drop(actor);

    assert_eq!(
        handle.choose("1a").await.unwrap_err(),
        SessionError::Closed
    );
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let config = GameConfig::new().with_pair_count(11);
    assert!(SessionHandle::spawn(&config).is_err());
}
