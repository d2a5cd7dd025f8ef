//! Color palettes for exported documents
//!
//! Light and dark palettes consumed by the HTML export CSS. Insertion and
//! deletion colors follow the usual review conventions: green for added
//! text, red for removed text.

use crate::config::Theme;

// ─────────────────────────────────────────────────────────────────────────────
// Color Type
// ─────────────────────────────────────────────────────────────────────────────

/// An sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Render as a CSS color value.
    pub fn css(&self) -> String {
        format!("rgb({}, {}, {})", self.0, self.1, self.2)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme Colors
// ─────────────────────────────────────────────────────────────────────────────

/// The full color palette for one theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColors {
    pub background: Rgb,
    pub text: Rgb,
    pub heading: Rgb,
    pub border: Rgb,
    pub link: Rgb,
    pub blockquote_text: Rgb,
    pub blockquote_border: Rgb,
    pub code_bg: Rgb,
    pub code_text: Rgb,
    /// Foreground for `<ins>` spans
    pub insertion_text: Rgb,
    /// Background for `<ins>` spans
    pub insertion_bg: Rgb,
    /// Foreground for `<del>` spans
    pub deletion_text: Rgb,
    /// Background for `<del>` spans
    pub deletion_bg: Rgb,
    dark: bool,
}

impl ThemeColors {
    /// Light palette.
    pub fn light() -> Self {
        Self {
            background: Rgb(255, 255, 255),
            text: Rgb(36, 41, 47),
            heading: Rgb(31, 35, 40),
            border: Rgb(216, 222, 228),
            link: Rgb(9, 105, 218),
            blockquote_text: Rgb(101, 109, 118),
            blockquote_border: Rgb(208, 215, 222),
            code_bg: Rgb(243, 244, 246),
            code_text: Rgb(36, 41, 47),
            insertion_text: Rgb(26, 127, 55),
            insertion_bg: Rgb(218, 251, 225),
            deletion_text: Rgb(179, 29, 40),
            deletion_bg: Rgb(255, 235, 233),
            dark: false,
        }
    }

    /// Dark palette.
    pub fn dark() -> Self {
        Self {
            background: Rgb(13, 17, 23),
            text: Rgb(230, 237, 243),
            heading: Rgb(240, 246, 252),
            border: Rgb(48, 54, 61),
            link: Rgb(68, 147, 248),
            blockquote_text: Rgb(139, 148, 158),
            blockquote_border: Rgb(48, 54, 61),
            code_bg: Rgb(22, 27, 34),
            code_text: Rgb(230, 237, 243),
            insertion_text: Rgb(63, 185, 80),
            insertion_bg: Rgb(4, 38, 14),
            deletion_text: Rgb(248, 81, 73),
            deletion_bg: Rgb(60, 10, 10),
            dark: true,
        }
    }

    /// Resolve the palette for a configured theme.
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self::light(),
            Theme::Dark => Self::dark(),
        }
    }

    /// Whether this is a dark palette (drives the CSS `color-scheme`).
    pub fn is_dark(&self) -> bool {
        self.dark
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
