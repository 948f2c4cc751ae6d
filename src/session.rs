//! Event-driven play session.
//!
//! DESIGN
//! ======
//! A `PlaySession` owns the current `PlayState` behind a mutex and applies
//! the pure transitions from [`crate::game`] in response to UI events. The
//! only side effect is toast clearing: when a transition shows a transient
//! toast, a tokio task sleeps for the configured delay and then redeems the
//! toast's ticket. A newer toast bumps the generation first, so a stale timer
//! finds nothing to clear.
//!
//! Without a tokio runtime the session still works; toasts simply stay until
//! the next one replaces them.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use rand::Rng;
use tokio::runtime::Handle;

use crate::config::Config;
use crate::game::{self, GuessOutcome, PlayState, SolvedGroup};
use crate::toast::ToastTicket;

/// One player's game, shared between the UI and its toast timers.
#[derive(Debug, Clone)]
pub struct PlaySession {
    state: Arc<Mutex<PlayState>>,
    toast_clear_delay: Duration,
}

impl PlaySession {
    #[must_use]
    pub fn new(state: PlayState, config: &Config) -> Self {
        Self { state: Arc::new(Mutex::new(state)), toast_clear_delay: config.toast_clear_delay }
    }

    /// Copy of the current state, for rendering.
    #[must_use]
    pub fn snapshot(&self) -> PlayState {
        self.lock().clone()
    }

    /// Tile click.
    pub fn select(&self, index: usize) {
        self.apply(|state| (game::select_tile(state, index), ()));
    }

    /// "Deselect all" button.
    pub fn deselect_all(&self) {
        self.apply(|state| (game::deselect_all(state), ()));
    }

    /// "Shuffle" button, using the thread-local RNG.
    pub fn shuffle(&self) {
        self.shuffle_with_rng(&mut rand::rng());
    }

    pub fn shuffle_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) {
        self.apply(|state| (game::shuffle_tiles(state, rng), ()));
    }

    /// "Submit" button.
    pub fn submit(&self) -> GuessOutcome {
        self.apply(game::submit_guess)
    }

    /// Groups the player did not find; empty until the game is over.
    #[must_use]
    pub fn reveal(&self) -> Vec<SolvedGroup> {
        game::reveal(&self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, PlayState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the state with the transition's result and schedule clearing
    /// of any toast the transition showed.
    fn apply<T>(&self, transition: impl FnOnce(&PlayState) -> (PlayState, T)) -> T {
        let (ticket, result) = {
            let mut state = self.lock();
            let before = state.toast.generation();
            let (next, result) = transition(&state);
            *state = next;
            let shown = state.toast.generation() != before;
            (shown.then(|| state.pending_toast()).flatten(), result)
        };
        if let Some(ticket) = ticket {
            self.schedule_toast_clear(ticket);
        }
        result
    }

    fn schedule_toast_clear(&self, ticket: ToastTicket) {
        let Ok(handle) = Handle::try_current() else {
            tracing::warn!("no tokio runtime; toast will not be cleared automatically");
            return;
        };
        let state = Arc::clone(&self.state);
        let delay = self.toast_clear_delay;
        handle.spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().unwrap_or_else(PoisonError::into_inner);
            let next = game::clear_toast(&state, ticket);
            *state = next;
        });
    }
}
