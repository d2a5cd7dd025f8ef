//! CriticMarkup Span Insertion
//!
//! This module provides the editing commands that wrap text in CriticMarkup
//! delimiters:
//! - **Addition**: `{++ text ++}`
//! - **Deletion**: `{-- text --}`
//! - **Substitution**: `{~~old~> new~~}`
//!
//! The commands operate on a text buffer and an optional selection, in the
//! same shape a host editor would drive them: replace the selection with the
//! wrapped text (or insert an empty template at the cursor), then report
//! where the cursor should land so the user can continue typing inside the
//! delimiters.

use crate::string_utils::{ceil_char_boundary, floor_char_boundary};

// ─────────────────────────────────────────────────────────────────────────────
// Span Kinds
// ─────────────────────────────────────────────────────────────────────────────

/// The three CriticMarkup span types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SpanKind {
    /// Addition ({++ text ++})
    Addition,
    /// Deletion ({-- text --})
    Deletion,
    /// Substitution ({~~old~> new~~})
    Substitution,
}

impl SpanKind {
    /// Wrap a selection in this span's delimiters.
    ///
    /// An empty selection produces the empty template, e.g. `{++  ++}`.
    pub fn wrap(&self, selection: &str) -> String {
        match self {
            SpanKind::Addition => format!("{{++ {} ++}}", selection),
            SpanKind::Deletion => format!("{{-- {} --}}", selection),
            SpanKind::Substitution => format!("{{~~{}~> ~~}}", selection),
        }
    }

    /// Cursor offset from the start of the inserted span.
    ///
    /// Addition and deletion land 4 bytes in, just past the opening
    /// delimiter and its space. Substitution lands just past the `~>`
    /// separator: `{~~` plus the replaced text plus `~>`.
    fn cursor_offset(&self, selection_len: usize) -> usize {
        match self {
            SpanKind::Addition | SpanKind::Deletion => 4,
            SpanKind::Substitution => selection_len + 5,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Edit Result
// ─────────────────────────────────────────────────────────────────────────────

/// Result of applying a span insertion command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    /// The new text after insertion
    pub text: String,
    /// New cursor position (byte index), inside the inserted delimiters
    pub cursor: usize,
}

// ─────────────────────────────────────────────────────────────────────────────
// Span Insertion
// ─────────────────────────────────────────────────────────────────────────────

/// Apply a span insertion command to `text`.
///
/// # Arguments
/// * `text` - The full text content
/// * `selection` - Optional selection range (start, end) in byte indices;
///   `None` or an empty range inserts the empty template at that position
/// * `kind` - Which span type to insert
///
/// Indices are snapped to UTF-8 character boundaries, so arbitrary byte
/// positions are tolerated. No delimiter-balance or nesting validation is
/// performed; markup that ends up malformed simply will not match the
/// render pass.
pub fn insert_span(text: &str, selection: Option<(usize, usize)>, kind: SpanKind) -> EditResult {
    let (start, end) = selection.unwrap_or((text.len(), text.len()));

    // Ensure valid range and adjust to UTF-8 char boundaries
    let start = floor_char_boundary(text, start.min(text.len()));
    let end = ceil_char_boundary(text, end.min(text.len()));
    let (start, end) = if start > end {
        (end, start)
    } else {
        (start, end)
    };

    let selected = &text[start..end];
    let wrapped = kind.wrap(selected);
    let new_text = format!("{}{}{}", &text[..start], wrapped, &text[end..]);
    let cursor = start + kind.cursor_offset(selected.len());

    EditResult {
        text: new_text,
        cursor,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ─────────────────────────────────────────────────────────────────────────
    // Addition Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_addition_with_selection() {
        let result = insert_span("Hello world", Some((0, 5)), SpanKind::Addition);
        assert_eq!(result.text, "{++ Hello ++} world");
        // Cursor just past "{++ ", at the start of the wrapped text
        assert_eq!(result.cursor, 4);
    }

    #[test]
    fn test_addition_wraps_selection_literally() {
        // For any plain text t, the command yields the literal "{++ t ++}"
        for t in ["t", "some words", "a + b is fine on insert", ""] {
            let result = insert_span(t, Some((0, t.len())), SpanKind::Addition);
            assert_eq!(result.text, format!("{{++ {} ++}}", t));
        }
    }

    #[test]
    fn test_addition_without_selection_inserts_template() {
        let result = insert_span("Hello", Some((5, 5)), SpanKind::Addition);
        assert_eq!(result.text, "Hello{++  ++}");
        assert_eq!(result.cursor, 5 + 4);
    }

    #[test]
    fn test_addition_none_selection_appends_at_end() {
        let result = insert_span("Hello", None, SpanKind::Addition);
        assert_eq!(result.text, "Hello{++  ++}");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Deletion Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_deletion_with_selection() {
        let result = insert_span("Hello world", Some((6, 11)), SpanKind::Deletion);
        assert_eq!(result.text, "Hello {-- world --}");
        assert_eq!(result.cursor, 6 + 4);
    }

    #[test]
    fn test_deletion_without_selection_inserts_template() {
        let result = insert_span("", Some((0, 0)), SpanKind::Deletion);
        assert_eq!(result.text, "{--  --}");
        assert_eq!(result.cursor, 4);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Substitution Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_substitution_with_selection() {
        let result = insert_span("Hello world", Some((0, 5)), SpanKind::Substitution);
        assert_eq!(result.text, "{~~Hello~> ~~} world");
        // Cursor just past the "~>" separator: "{~~" + "Hello" + "~>"
        assert_eq!(result.cursor, 5 + 5);
        assert_eq!(&result.text[result.cursor..result.cursor + 1], " ");
    }

    #[test]
    fn test_substitution_without_selection_inserts_template() {
        let result = insert_span("Hello", Some((5, 5)), SpanKind::Substitution);
        assert_eq!(result.text, "Hello{~~~> ~~}");
        assert_eq!(result.cursor, 5 + 5);
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Range Handling Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_inverted_selection_is_normalized() {
        let result = insert_span("Hello world", Some((5, 0)), SpanKind::Addition);
        assert_eq!(result.text, "{++ Hello ++} world");
    }

    #[test]
    fn test_selection_past_end_is_clamped() {
        let result = insert_span("Hi", Some((0, 99)), SpanKind::Deletion);
        assert_eq!(result.text, "{-- Hi --}");
    }

    // ─────────────────────────────────────────────────────────────────────────
    // UTF-8 Safety Tests
    // ─────────────────────────────────────────────────────────────────────────

    #[test]
    fn test_addition_multibyte_selection() {
        // "på" spans bytes 4..7 ('å' is 2 bytes)
        let result = insert_span("Hei på deg", Some((4, 7)), SpanKind::Addition);
        assert!(result.text.contains("{++ på ++}"));
    }

    #[test]
    fn test_substitution_cursor_uses_byte_length() {
        let result = insert_span("你好", Some((0, 6)), SpanKind::Substitution);
        assert_eq!(result.text, "{~~你好~> ~~}");
        // "{~~" + 6 bytes of text + "~>"
        assert_eq!(result.cursor, 6 + 5);
        assert!(result.text.is_char_boundary(result.cursor));
    }

    #[test]
    fn test_no_panic_on_any_byte_index() {
        let text = "Hei på deg 你好 🎉";
        for i in 0..=text.len() + 5 {
            for j in 0..=text.len() + 5 {
                let _ = insert_span(text, Some((i, j)), SpanKind::Addition);
                let _ = insert_span(text, Some((i, j)), SpanKind::Deletion);
                let _ = insert_span(text, Some((i, j)), SpanKind::Substitution);
            }
        }
    }
}
