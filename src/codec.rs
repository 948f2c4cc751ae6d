//! Puzzle document ⇄ URL payload codec.
//!
//! A payload is `base64url(deflate(json(document)))` without padding, so it
//! survives unescaped inside a URL fragment or query string. Encoding is
//! deterministic: the serde field order is fixed and deflate at a fixed level
//! is stable, so the same document always yields the same payload.
//!
//! Decoding is all-or-nothing. Whatever stage fails (base64, inflate, JSON,
//! schema) the caller sees the same [`DecodeError`]; the stage is only
//! visible in `debug` logs.

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

use std::io::{self, Write};

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::write::DeflateEncoder;
use flate2::{Compression, Decompress, FlushDecompress, Status};
use serde_json::Value;

use crate::consts::MAX_DECODED_BYTES;
use crate::puzzle::PuzzleDocument;
use crate::schema;

/// The payload could not be turned into a valid puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid or corrupted puzzle data")]
pub struct DecodeError;

/// Encode a document into a URL-safe payload.
#[must_use]
pub fn encode(doc: &PuzzleDocument) -> String {
    // Serializing strings, booleans and small integers into a Vec cannot fail,
    // and neither can deflating into one.
    let compressed = serde_json::to_vec(doc)
        .map_err(io::Error::from)
        .and_then(|json| deflate(&json))
        .unwrap_or_else(|e| {
            tracing::error!(error = %e, "failed to encode puzzle document");
            Vec::new()
        });
    URL_SAFE_NO_PAD.encode(compressed)
}

/// Decode a payload produced by [`encode`] back into a validated document.
///
/// Surrounding whitespace is ignored. URL scaffolding is not; strip it with
/// [`crate::link::extract_payload`] first.
///
/// # Errors
///
/// Returns [`DecodeError`] for an empty payload, bad base64, a corrupt or
/// oversized deflate stream, malformed JSON, or a schema violation.
pub fn decode(payload: &str) -> Result<PuzzleDocument, DecodeError> {
    let payload = payload.trim();
    if payload.is_empty() {
        return Err(reject("empty", &"no payload"));
    }

    let compressed = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|e| reject("base64", &e))?;
    let json = inflate(&compressed).map_err(|e| reject("inflate", &e))?;
    let raw: Value = serde_json::from_slice(&json).map_err(|e| reject("json", &e))?;
    schema::validate(&raw).map_err(|e| reject("schema", &e))
}

fn reject(stage: &'static str, err: &dyn std::fmt::Display) -> DecodeError {
    tracing::debug!(stage, error = %err, "rejected puzzle payload");
    DecodeError
}

fn deflate(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = DeflateEncoder::new(Vec::with_capacity(bytes.len()), Compression::best());
    encoder.write_all(bytes)?;
    encoder.finish()
}

/// Inflate a complete raw deflate stream. A stream that runs out of input
/// before its final block, or that is followed by extra bytes, is an error.
fn inflate(bytes: &[u8]) -> io::Result<Vec<u8>> {
    let cap = usize::try_from(MAX_DECODED_BYTES).unwrap_or(usize::MAX - 1);
    // One byte of headroom so a stream of exactly `cap` bytes can finish.
    let limit = cap + 1;
    let mut inflater = Decompress::new(false);
    let mut out = Vec::with_capacity(bytes.len().saturating_mul(4).min(limit));

    loop {
        if out.len() == out.capacity() {
            if out.len() >= limit {
                return Err(invalid_data("inflated payload exceeds size cap"));
            }
            out.reserve_exact(out.len().max(1024).min(limit - out.len()));
        }

        let consumed = usize::try_from(inflater.total_in()).unwrap_or(usize::MAX);
        let input = bytes.get(consumed..).unwrap_or_default();
        match inflater.decompress_vec(input, &mut out, FlushDecompress::Finish)? {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError if out.len() < out.capacity() => {
                return Err(invalid_data("deflate stream is truncated"));
            }
            Status::Ok | Status::BufError => {}
        }
    }

    if usize::try_from(inflater.total_in()).map_or(true, |read| read != bytes.len()) {
        return Err(invalid_data("trailing bytes after deflate stream"));
    }
    if out.len() > cap {
        return Err(invalid_data("inflated payload exceeds size cap"));
    }
    Ok(out)
}

fn invalid_data(message: &'static str) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, message)
}
