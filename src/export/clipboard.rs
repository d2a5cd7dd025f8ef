//! Clipboard Operations for HTML Export
//!
//! Cross-platform clipboard support for copying rendered HTML using the
//! arboard crate, so marked-up documents can be pasted into email clients
//! and word processors with the insertion/deletion styling intact.

use super::html::generate_html_fragment;
use arboard::Clipboard;

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Error
// ─────────────────────────────────────────────────────────────────────────────

/// Errors that can occur during clipboard operations.
#[derive(Debug)]
pub enum ClipboardError {
    /// Failed to access the clipboard
    Access(String),
    /// Failed to set clipboard content
    Write(String),
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClipboardError::Access(msg) => write!(f, "Clipboard access error: {}", msg),
            ClipboardError::Write(msg) => write!(f, "Clipboard write error: {}", msg),
        }
    }
}

impl std::error::Error for ClipboardError {}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard Operations
// ─────────────────────────────────────────────────────────────────────────────

/// Render markdown (with CriticMarkup spans) to HTML and copy it to the
/// clipboard, with the markdown source as the plain-text fallback.
///
/// On platforms that support the HTML clipboard format, apps can paste the
/// formatted content; everywhere else the fallback text is used.
pub fn copy_html_to_clipboard(markdown: &str) -> Result<(), ClipboardError> {
    let html = generate_html_fragment(markdown);

    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;

    clipboard
        .set_html(html.as_str(), Some(markdown))
        .map_err(|e| ClipboardError::Write(e.to_string()))?;

    Ok(())
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
