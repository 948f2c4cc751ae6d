//! Shared constants for the puzzle crate.

use std::time::Duration;

// ── Puzzle shape ────────────────────────────────────────────────

/// Number of groups in a puzzle.
pub const GROUP_COUNT: usize = 4;

/// Number of words in each group.
pub const GROUP_SIZE: usize = 4;

/// Only document version this crate reads or writes.
pub const PUZZLE_VERSION: u64 = 1;

// ── Play ────────────────────────────────────────────────────────

/// Hard cap on simultaneously selected tiles; a guess is exactly this many.
pub const MAX_SELECTED: usize = GROUP_SIZE;

/// Normalized words a guess must share with a group to count as "one away".
pub const ONE_AWAY_MATCHES: usize = GROUP_SIZE - 1;

/// Smallest allowed mistake budget.
pub const MIN_MISTAKES: u8 = 1;

/// Largest allowed mistake budget.
pub const MAX_MISTAKES: u8 = 10;

/// Mistake budget pre-filled in the creator form.
pub const DEFAULT_MAX_MISTAKES: u8 = 4;

/// Delay before a transient toast is cleared.
pub const TOAST_CLEAR_DELAY: Duration = Duration::from_secs(2);

// ── Links ───────────────────────────────────────────────────────

/// Route segment inside the fragment that hosts the player page.
pub const DEFAULT_PLAY_ROUTE: &str = "/play";

/// Query parameter carrying the encoded payload.
pub const DEFAULT_PAYLOAD_PARAM: &str = "p";

/// Upper bound on inflated payload JSON, in bytes.
pub const MAX_DECODED_BYTES: u64 = 64 * 1024;
