//! CriticMarkup Span Rendering
//!
//! A single combined pass recognizes all three span types in raw markdown
//! and rewrites them as `<ins>`/`<del>` HTML before the markdown itself is
//! converted. Running before conversion keeps the three patterns independent
//! of each other and keeps the `~~` delimiters away from the strikethrough
//! extension, which would otherwise mangle substitution spans.
//!
//! Content character classes exclude the span's own delimiter character, so
//! a span cannot contain a literal `+`, `-`, or `~` respectively. Markup
//! that does not match is left untouched and renders as literal text.

use regex::{Captures, Regex};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Prefix for the CSS classes emitted on rendered spans.
pub const CSS_CLASS_PREFIX: &str = "SIMPLE_CRITIC_MARKUP__";

/// One alternation per span type:
/// 1. `{++ text ++}` (capture 1)
/// 2. `{-- text --}` (capture 2)
/// 3. `{~~old~> new~~}` (captures 3 and 4)
///
/// Whitespace directly inside the delimiters is consumed outside the
/// captures, so span content arrives trimmed.
const SPAN_PATTERN: &str = r"\{\+\+\s*([^+]*?)\s*\+\+\}|\{--\s*([^-]*?)\s*--\}|\{~~\s*([^~]*?)\s*~>\s*([^~]*?)\s*~~\}";

// ─────────────────────────────────────────────────────────────────────────────
// Span Renderer
// ─────────────────────────────────────────────────────────────────────────────

/// Expands CriticMarkup spans into HTML markup.
#[derive(Debug, Clone)]
pub struct SpanRenderer {
    pattern: Regex,
}

impl SpanRenderer {
    /// Create a renderer with the span pattern compiled.
    pub fn new() -> Self {
        Self {
            // The pattern is a constant; failing to compile it is a bug.
            pattern: Regex::new(SPAN_PATTERN).expect("span pattern compiles"),
        }
    }

    /// Replace every CriticMarkup span in `input` with its HTML rendering.
    ///
    /// - `{++ text ++}` → `<ins class="…add">text</ins>`
    /// - `{-- text --}` → `<del class="…delete">text</del>`
    /// - `{~~old~> new~~}` → `<del class="…delete">old</del><ins class="…add">new</ins>`
    pub fn expand(&self, input: &str) -> String {
        self.pattern
            .replace_all(input, |caps: &Captures| {
                if let Some(text) = caps.get(1) {
                    format!(
                        r#"<ins class="{}add">{}</ins>"#,
                        CSS_CLASS_PREFIX,
                        text.as_str()
                    )
                } else if let Some(text) = caps.get(2) {
                    format!(
                        r#"<del class="{}delete">{}</del>"#,
                        CSS_CLASS_PREFIX,
                        text.as_str()
                    )
                } else {
                    let old = caps.get(3).map_or("", |m| m.as_str());
                    let new = caps.get(4).map_or("", |m| m.as_str());
                    format!(
                        r#"<del class="{prefix}delete">{old}</del><ins class="{prefix}add">{new}</ins>"#,
                        prefix = CSS_CLASS_PREFIX,
                        old = old,
                        new = new,
                    )
                }
            })
            .into_owned()
    }
}

impl Default for SpanRenderer {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
