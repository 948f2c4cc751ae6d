use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::fixtures::letters_puzzle;
use crate::game::{GameStatus, INCORRECT_MESSAGE, LOST_MESSAGE, ONE_AWAY_MESSAGE, WON_MESSAGE};
use crate::puzzle::GroupColor;

/// Letters puzzle in authored order: indices 0-3 are yellow, 4-7 green, and so on.
fn session() -> PlaySession {
    let state = game::initialize_with_rng(letters_puzzle(), &mut StdRng::seed_from_u64(7));
    PlaySession::new(state, &Config::default())
}

fn guess(session: &PlaySession, indices: [usize; 4]) -> GuessOutcome {
    for index in indices {
        session.select(index);
    }
    session.submit()
}

fn toast_message(session: &PlaySession) -> Option<String> {
    session.snapshot().toast.current().map(|t| t.message.clone())
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn events_drive_the_game_without_a_runtime() {
    let session = session();
    assert_eq!(guess(&session, [0, 1, 2, 3]), GuessOutcome::Correct(GroupColor::Yellow));

    let state = session.snapshot();
    assert_eq!(state.solved.len(), 1);
    assert!(state.slots[..4].iter().all(game::Slot::is_blank));
    // Nothing clears the toast without a runtime.
    assert!(state.toast.current().is_some());
}

#[test]
fn deselect_all_clears_selection() {
    let session = session();
    session.select(5);
    session.select(9);
    session.deselect_all();
    assert_eq!(game::selected_count(&session.snapshot().slots), 0);
}

#[test]
fn shuffle_keeps_the_same_words() {
    let session = session();
    guess(&session, [0, 1, 2, 3]);
    session.shuffle_with_rng(&mut StdRng::seed_from_u64(3));

    let state = session.snapshot();
    assert!(state.slots[..4].iter().all(game::Slot::is_blank));
    let mut texts: Vec<_> = state.slots.iter().filter_map(|s| s.text().map(str::to_owned)).collect();
    texts.sort();
    let mut expected: Vec<_> = letters_puzzle().words().skip(4).map(str::to_owned).collect();
    expected.sort();
    assert_eq!(texts, expected);
}

#[test]
fn submit_with_short_selection_is_ignored() {
    let session = session();
    session.select(0);
    assert_eq!(session.submit(), GuessOutcome::Ignored);
    assert_eq!(session.snapshot().mistakes, 0);
}

#[test]
fn clones_share_one_game() {
    let session = session();
    let other = session.clone();
    session.select(0);
    assert!(other.snapshot().slots[0].is_selected());
}

#[test]
fn reveal_after_loss() {
    let session = session();
    assert!(session.reveal().is_empty());
    for _ in 0..4 {
        guess(&session, [0, 4, 8, 12]);
    }
    assert_eq!(session.snapshot().status, GameStatus::Lost);
    assert_eq!(toast_message(&session).as_deref(), Some(LOST_MESSAGE));

    let colors: Vec<_> = session.reveal().iter().map(|g| g.color).collect();
    assert_eq!(colors, GroupColor::ALL);
}

// =============================================================
// Toast timer
// =============================================================

#[tokio::test(start_paused = true)]
async fn transient_toast_clears_after_delay() {
    let session = session();
    assert_eq!(guess(&session, [0, 4, 8, 12]), GuessOutcome::Incorrect);
    assert_eq!(toast_message(&session).as_deref(), Some(INCORRECT_MESSAGE));

    advance(1_900).await;
    assert_eq!(toast_message(&session).as_deref(), Some(INCORRECT_MESSAGE));

    advance(200).await;
    assert_eq!(toast_message(&session), None);
}

#[tokio::test(start_paused = true)]
async fn stale_timer_leaves_newer_toast() {
    let session = session();
    guess(&session, [0, 4, 8, 12]);

    advance(1_000).await;
    assert_eq!(guess(&session, [0, 1, 2, 4]), GuessOutcome::OneAway);

    // First timer fires here but its toast has been replaced.
    advance(1_100).await;
    assert_eq!(toast_message(&session).as_deref(), Some(ONE_AWAY_MESSAGE));

    advance(1_000).await;
    assert_eq!(toast_message(&session), None);
}

#[tokio::test(start_paused = true)]
async fn winning_toast_is_sticky() {
    let session = session();
    for start in [0, 4, 8, 12] {
        guess(&session, [start, start + 1, start + 2, start + 3]);
    }
    assert_eq!(session.snapshot().status, GameStatus::Won);

    advance(10_000).await;
    assert_eq!(toast_message(&session).as_deref(), Some(WON_MESSAGE));
}

#[tokio::test(start_paused = true)]
async fn configured_delay_is_used() {
    let state = game::initialize_with_rng(letters_puzzle(), &mut StdRng::seed_from_u64(7));
    let config = Config::default().with_toast_clear_delay(Duration::from_millis(500));
    let session = PlaySession::new(state, &config);
    guess(&session, [0, 4, 8, 12]);

    advance(600).await;
    assert_eq!(toast_message(&session), None);
}
