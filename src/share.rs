//! Clipboard seam for the "copy link" button.
//!
//! Hosts provide two [`Clipboard`] implementations: the platform clipboard
//! and a fallback that works where the platform one is unavailable (an
//! off-screen text selection in a browser, for instance). [`copy_link`] tries
//! them in order.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

/// Something that can receive text on the player's behalf.
pub trait Clipboard {
    /// Put `text` on the clipboard. The error is a human-readable reason.
    ///
    /// # Errors
    ///
    /// Implementations fail when the clipboard is unavailable or refuses the write.
    fn write_text(&mut self, text: &str) -> Result<(), String>;
}

/// Which mechanism ended up holding the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyMethod {
    Primary,
    Fallback,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to copy link (clipboard: {primary}; fallback: {fallback})")]
pub struct ClipboardError {
    pub primary: String,
    pub fallback: String,
}

/// Copy a shareable link, falling back when the primary clipboard fails.
///
/// # Errors
///
/// Returns [`ClipboardError`] with both reasons when neither mechanism works.
pub fn copy_link(
    primary: &mut dyn Clipboard,
    fallback: &mut dyn Clipboard,
    link: &str,
) -> Result<CopyMethod, ClipboardError> {
    let primary_reason = match primary.write_text(link) {
        Ok(()) => return Ok(CopyMethod::Primary),
        Err(reason) => reason,
    };
    tracing::warn!(reason = %primary_reason, "clipboard write failed; trying fallback");

    match fallback.write_text(link) {
        Ok(()) => Ok(CopyMethod::Fallback),
        Err(reason) => {
            tracing::warn!(reason = %reason, "fallback copy failed");
            Err(ClipboardError { primary: primary_reason, fallback: reason })
        }
    }
}
