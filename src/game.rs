//! Game engine: pure transitions over an in-memory play state.
//!
//! DESIGN
//! ======
//! Every operation is a free function that takes a snapshot by reference and
//! returns a new one. Nothing is mutated in place and nothing performs I/O, so
//! any sequence of UI events can be replayed exactly (randomness comes in
//! through an explicit `Rng`).
//!
//! Two layers are exposed:
//! - slot-level helpers (`toggle_selection`, `clear_selection`,
//!   `shuffle_remaining`) that know nothing about game status;
//! - state-level transitions (`select_tile`, `submit_guess`, `shuffle_tiles`,
//!   `deselect_all`, `clear_toast`) that refuse to act once the game is over.
//!
//! Guesses are compared as multisets of normalized words (trimmed, upper
//! case), so order and case never matter and a repeated word can only count
//! as many times as it appears in the group.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::consts::{GROUP_COUNT, GROUP_SIZE, MAX_SELECTED, ONE_AWAY_MATCHES};
use crate::puzzle::{Group, GroupColor, PuzzleDocument};
use crate::toast::{Toast, ToastState, ToastTicket};

pub const CORRECT_MESSAGE: &str = "Correct!";
pub const WON_MESSAGE: &str = "Congratulations! You solved it!";
pub const ONE_AWAY_MESSAGE: &str = "One away...";
pub const INCORRECT_MESSAGE: &str = "Not quite!";
pub const LOST_MESSAGE: &str = "Game Over!";

// =============================================================================
// TYPES
// =============================================================================

/// One grid position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
    /// A live tile.
    Word { text: String, selected: bool },
    /// A tile whose group has been solved. Never selectable.
    Blank,
}

impl Slot {
    /// An unselected word tile.
    #[must_use]
    pub fn word(text: impl Into<String>) -> Self {
        Self::Word { text: text.into(), selected: false }
    }

    /// Tile text, or `None` for a blank.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Word { text, .. } => Some(text),
            Self::Blank => None,
        }
    }

    #[must_use]
    pub fn is_selected(&self) -> bool {
        match self {
            Self::Word { selected, .. } => *selected,
            Self::Blank => false,
        }
    }

    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank)
    }

    fn deselected(&self) -> Self {
        match self {
            Self::Word { text, .. } => Self::word(text.clone()),
            Self::Blank => Self::Blank,
        }
    }
}

/// Lifecycle of one play session. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Self::Playing)
    }
}

/// A group the player has found (or, after a loss, had revealed).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolvedGroup {
    pub color: GroupColor,
    pub name: Option<String>,
    /// Words in authored casing and order.
    pub words: [String; GROUP_SIZE],
}

impl From<&Group> for SolvedGroup {
    fn from(group: &Group) -> Self {
        Self { color: group.color, name: group.name.clone(), words: group.words.clone() }
    }
}

/// What a submitted guess did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Matched an unsolved group; play continues.
    Correct(GroupColor),
    /// Matched the last unsolved group.
    Won,
    /// Missed, but three of the four words belong to one unsolved group.
    OneAway,
    /// Missed.
    Incorrect,
    /// Missed and used up the mistake budget.
    Lost,
    /// Not evaluated: the game is over or fewer than four tiles are selected.
    Ignored,
}

/// Session-local play state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayState {
    pub puzzle: PuzzleDocument,
    pub slots: Vec<Slot>,
    pub mistakes: u8,
    /// Solved groups in the order they were found.
    pub solved: Vec<SolvedGroup>,
    pub toast: ToastState,
    pub status: GameStatus,
}

// =============================================================================
// INITIALIZATION
// =============================================================================

/// Start a session using the thread-local RNG.
#[must_use]
pub fn initialize(puzzle: PuzzleDocument) -> PlayState {
    initialize_with_rng(puzzle, &mut rand::rng())
}

/// Start a session. Tiles follow group order unless the puzzle asks for a
/// shuffle on load, in which case they are uniformly permuted.
#[must_use]
pub fn initialize_with_rng<R: Rng + ?Sized>(puzzle: PuzzleDocument, rng: &mut R) -> PlayState {
    let mut words: Vec<&str> = puzzle.words().collect();
    if puzzle.settings.shuffle_on_load {
        words.shuffle(rng);
    }
    let slots: Vec<Slot> = words.into_iter().map(Slot::word).collect();

    PlayState {
        puzzle,
        slots,
        mistakes: 0,
        solved: Vec::new(),
        toast: ToastState::default(),
        status: GameStatus::Playing,
    }
}

// =============================================================================
// SLOT HELPERS
// =============================================================================

/// Trimmed, upper-cased form used for every word comparison.
#[must_use]
pub fn normalize_word(word: &str) -> String {
    word.trim().to_uppercase()
}

#[must_use]
pub fn selected_count(slots: &[Slot]) -> usize {
    slots.iter().filter(|slot| slot.is_selected()).count()
}

/// Texts of the selected tiles, in grid order.
#[must_use]
pub fn selected_words(slots: &[Slot]) -> Vec<&str> {
    slots
        .iter()
        .filter(|slot| slot.is_selected())
        .filter_map(Slot::text)
        .collect()
}

/// Flip the selection of one tile.
///
/// Blank tiles, out-of-range indices, and selecting a fifth tile are no-ops.
#[must_use]
pub fn toggle_selection(slots: &[Slot], index: usize) -> Vec<Slot> {
    let mut next = slots.to_vec();
    let at_cap = selected_count(slots) >= MAX_SELECTED;
    if let Some(Slot::Word { selected, .. }) = next.get_mut(index) {
        if *selected || !at_cap {
            *selected = !*selected;
        }
    }
    next
}

/// Deselect every tile. Blanks are untouched.
#[must_use]
pub fn clear_selection(slots: &[Slot]) -> Vec<Slot> {
    slots.iter().map(Slot::deselected).collect()
}

/// Permute the words of the live tiles among themselves and deselect them.
/// Blanks keep their positions.
#[must_use]
pub fn shuffle_remaining<R: Rng + ?Sized>(slots: &[Slot], rng: &mut R) -> Vec<Slot> {
    let mut texts: Vec<&str> = slots.iter().filter_map(Slot::text).collect();
    texts.shuffle(rng);

    let mut texts = texts.into_iter();
    slots
        .iter()
        .map(|slot| match slot {
            Slot::Word { .. } => texts.next().map_or(Slot::Blank, Slot::word),
            Slot::Blank => Slot::Blank,
        })
        .collect()
}

fn blank_selected(slots: &[Slot]) -> Vec<Slot> {
    slots
        .iter()
        .map(|slot| if slot.is_selected() { Slot::Blank } else { slot.deselected() })
        .collect()
}

// =============================================================================
// GROUP MATCHING
// =============================================================================

/// Groups whose color has not been solved yet, in document order.
#[must_use]
pub fn unsolved_groups<'a>(puzzle: &'a PuzzleDocument, solved: &[SolvedGroup]) -> Vec<&'a Group> {
    puzzle
        .groups
        .iter()
        .filter(|group| !solved.iter().any(|s| s.color == group.color))
        .collect()
}

/// The unsolved group whose words equal the guess as a normalized multiset.
#[must_use]
pub fn find_exact_match<'a>(guess: &[&str], unsolved: &[&'a Group]) -> Option<&'a Group> {
    if guess.len() != GROUP_SIZE {
        return None;
    }
    unsolved
        .iter()
        .copied()
        .find(|group| shared_words(guess, group) == GROUP_SIZE)
}

/// Whether some unsolved group shares exactly three normalized words with the guess.
#[must_use]
pub fn is_one_away(guess: &[&str], unsolved: &[&Group]) -> bool {
    unsolved
        .iter()
        .any(|group| shared_words(guess, group) == ONE_AWAY_MATCHES)
}

/// Size of the multiset intersection of the guess and a group's words.
fn shared_words(guess: &[&str], group: &Group) -> usize {
    let mut remaining: Vec<String> = group.words.iter().map(|w| normalize_word(w)).collect();
    guess
        .iter()
        .filter(|word| {
            let word = normalize_word(word);
            let found = remaining.iter().position(|candidate| *candidate == word);
            if let Some(pos) = found {
                remaining.swap_remove(pos);
            }
            found.is_some()
        })
        .count()
}

// =============================================================================
// STATE TRANSITIONS
// =============================================================================

/// Tile click. No-op once the game is over.
#[must_use]
pub fn select_tile(state: &PlayState, index: usize) -> PlayState {
    if state.status.is_terminal() {
        return state.clone();
    }
    PlayState { slots: toggle_selection(&state.slots, index), ..state.clone() }
}

/// "Deselect all". No-op once the game is over.
#[must_use]
pub fn deselect_all(state: &PlayState) -> PlayState {
    if state.status.is_terminal() {
        return state.clone();
    }
    PlayState { slots: clear_selection(&state.slots), ..state.clone() }
}

/// "Shuffle". No-op once the game is over.
#[must_use]
pub fn shuffle_tiles<R: Rng + ?Sized>(state: &PlayState, rng: &mut R) -> PlayState {
    if state.status.is_terminal() {
        return state.clone();
    }
    PlayState { slots: shuffle_remaining(&state.slots, rng), ..state.clone() }
}

/// Evaluate the four selected tiles against the unsolved groups.
///
/// A match solves the group and blanks its tiles; a miss costs a mistake and
/// clears the selection. Non-terminal outcomes show a transient toast (see
/// [`PlayState::pending_toast`]); winning or losing shows a sticky one.
#[must_use]
pub fn submit_guess(state: &PlayState) -> (PlayState, GuessOutcome) {
    if !can_submit(state) {
        return (state.clone(), GuessOutcome::Ignored);
    }

    let guess = selected_words(&state.slots);
    let unsolved = unsolved_groups(&state.puzzle, &state.solved);
    let mut next = state.clone();

    let outcome = if let Some(group) = find_exact_match(&guess, &unsolved) {
        next.solved.push(SolvedGroup::from(group));
        next.slots = blank_selected(&state.slots);
        if next.solved.len() == GROUP_COUNT {
            next.status = GameStatus::Won;
            next.toast.show_sticky(Toast::success(WON_MESSAGE));
            GuessOutcome::Won
        } else {
            next.toast.show(Toast::success(CORRECT_MESSAGE));
            GuessOutcome::Correct(group.color)
        }
    } else {
        next.mistakes = state.mistakes.saturating_add(1);
        next.slots = clear_selection(&state.slots);
        if next.mistakes >= state.puzzle.settings.max_mistakes {
            next.status = GameStatus::Lost;
            next.toast.show_sticky(Toast::error(LOST_MESSAGE));
            GuessOutcome::Lost
        } else if is_one_away(&guess, &unsolved) {
            next.toast.show(Toast::info(ONE_AWAY_MESSAGE));
            GuessOutcome::OneAway
        } else {
            next.toast.show(Toast::error(INCORRECT_MESSAGE));
            GuessOutcome::Incorrect
        }
    };

    tracing::debug!(
        ?outcome,
        mistakes = next.mistakes,
        solved = next.solved.len(),
        "guess evaluated"
    );
    (next, outcome)
}

/// Timer callback: clear the toast the ticket was issued for, if still shown.
#[must_use]
pub fn clear_toast(state: &PlayState, ticket: ToastTicket) -> PlayState {
    let mut next = state.clone();
    next.toast.clear(ticket);
    next
}

// =============================================================================
// QUERIES
// =============================================================================

/// Whether "Submit" should be enabled.
#[must_use]
pub fn can_submit(state: &PlayState) -> bool {
    !state.status.is_terminal() && selected_count(&state.slots) == MAX_SELECTED
}

#[must_use]
pub fn mistakes_remaining(state: &PlayState) -> u8 {
    state.puzzle.settings.max_mistakes.saturating_sub(state.mistakes)
}

/// Groups the player did not find, for the "reveal answers" view.
/// Empty while the game is still being played.
#[must_use]
pub fn reveal(state: &PlayState) -> Vec<SolvedGroup> {
    if !state.status.is_terminal() {
        return Vec::new();
    }
    unsolved_groups(&state.puzzle, &state.solved)
        .into_iter()
        .map(SolvedGroup::from)
        .collect()
}

impl PlayState {
    /// Ticket the host should redeem via [`clear_toast`] after the delay.
    #[must_use]
    pub fn pending_toast(&self) -> Option<ToastTicket> {
        self.toast.pending()
    }
}
