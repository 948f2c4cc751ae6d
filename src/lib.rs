//! Shareable four-group word puzzles: link codec and game-state engine.
//!
//! A creator fills in four groups of four words; the form is validated and
//! turned into a [`puzzle::PuzzleDocument`], which the codec compresses into a
//! URL-safe payload carried by a shareable link. A player's link is decoded,
//! re-validated against the schema, and handed to the game engine, whose pure
//! transitions drive selection, guessing, and win/loss detection.
//!
//! Nothing here renders or persists anything; the host UI owns the page and
//! calls into these modules for every decision.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`puzzle`] | Versioned puzzle document and its JSON shape |
//! | [`schema`] | Structural validation of untrusted decoded JSON |
//! | [`codec`] | Document ⇄ compressed URL-safe payload |
//! | [`link`] | Shareable link construction, payload extraction, page load |
//! | [`form`] | Creator form validation and document construction |
//! | [`game`] | Pure play-state transitions |
//! | [`toast`] | Transient messages and generation-stamped clear tickets |
//! | [`session`] | Event-driven play session with scheduled toast clearing |
//! | [`share`] | Clipboard seam with fallback |
//! | [`config`] | Typed configuration and defaults |
//! | [`consts`] | Shared constants (grid size, mistake limits, delays) |

pub mod codec;
pub mod config;
pub mod consts;
pub mod form;
pub mod game;
pub mod link;
pub mod puzzle;
pub mod schema;
pub mod session;
pub mod share;
pub mod toast;

#[cfg(test)]
#[path = "fixtures_test.rs"]
pub(crate) mod fixtures;
