//! Shareable links: construction, payload extraction, and page load.
//!
//! DESIGN
//! ======
//! Links are always generated in one canonical form:
//!
//! ```text
//! {base}#{route}?{param}={payload}        e.g. https://host/#/play?p=eJyr...
//! ```
//!
//! The payload lives in the fragment so it never reaches a server. Extraction
//! is more forgiving than generation because players paste whatever they were
//! sent: a full link, a link using a plain query string, a bare `p=...`, a
//! `#p=...` fragment, or the raw payload on its own.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

use rand::Rng;

use crate::codec::{self, DecodeError};
use crate::config::{Config, ShareConfig};
use crate::game::{self, PlayState};
use crate::puzzle::PuzzleDocument;

/// Why a page could not start a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    /// The address carries no payload at all.
    #[error("No puzzle data found in the URL.")]
    MissingPayload,
    /// A payload is present but does not decode to a valid puzzle.
    #[error("Invalid or corrupted puzzle data.")]
    InvalidPayload(#[from] DecodeError),
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Build the canonical shareable link for a document.
///
/// Any fragment already on `share.base_url` is dropped.
#[must_use]
pub fn share_link(doc: &PuzzleDocument, share: &ShareConfig) -> String {
    let base = share
        .base_url
        .split_once('#')
        .map_or(share.base_url.as_str(), |(base, _)| base);
    format!("{base}#{}?{}={}", share.route, share.param, codec::encode(doc))
}

// =============================================================================
// EXTRACTION
// =============================================================================

/// Find the payload in whatever the player supplied.
///
/// The fragment is searched before the address, so a link whose page query
/// and fragment both name the parameter resolves to the fragment's value.
/// Input that looks like neither is accepted as a raw payload when every
/// character belongs to the URL-safe base64 alphabet. An empty value counts
/// as no value.
#[must_use]
pub fn extract_payload<'a>(input: &'a str, param: &str) -> Option<&'a str> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let (address, fragment) = match input.split_once('#') {
        Some((address, fragment)) => (address, Some(fragment)),
        None => (input, None),
    };

    fragment
        .and_then(|fragment| param_value(fragment, param))
        .or_else(|| param_value(address, param))
        .or_else(|| is_raw_payload(input).then_some(input))
}

/// Value of `param` in the query part of `part` (after its last `?`, or the
/// whole of `part` when there is none).
fn param_value<'a>(part: &'a str, param: &str) -> Option<&'a str> {
    let query = part.rsplit_once('?').map_or(part, |(_, query)| query);
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, value)| *key == param && !value.is_empty())
        .map(|(_, value)| value)
}

fn is_raw_payload(input: &str) -> bool {
    input
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

// =============================================================================
// PAGE LOAD
// =============================================================================

/// Extract and decode the puzzle carried by `input`.
///
/// # Errors
///
/// [`LoadError::MissingPayload`] when no payload can be found,
/// [`LoadError::InvalidPayload`] when one is found but fails to decode.
pub fn load_document(input: &str, share: &ShareConfig) -> Result<PuzzleDocument, LoadError> {
    let Some(payload) = extract_payload(input, &share.param) else {
        tracing::debug!(param = %share.param, "no puzzle payload in input");
        return Err(LoadError::MissingPayload);
    };
    codec::decode(payload).map_err(LoadError::from)
}

/// Everything the player page does on mount: find the payload, decode it,
/// and start a session.
///
/// # Errors
///
/// See [`load_document`].
pub fn load<R: Rng + ?Sized>(input: &str, config: &Config, rng: &mut R) -> Result<PlayState, LoadError> {
    let doc = load_document(input, &config.share)?;
    let state = game::initialize_with_rng(doc, rng);
    tracing::debug!(
        title = ?state.puzzle.title,
        max_mistakes = state.puzzle.settings.max_mistakes,
        "puzzle loaded"
    );
    Ok(state)
}
