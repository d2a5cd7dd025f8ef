//! User settings for criticmd
//!
//! This module defines the `Settings` struct that holds all user-configurable
//! options, with serde support for JSON persistence. Field names serialize in
//! camelCase, so the persisted key for the deletion toggle is exactly
//! `showDeletion`.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Theme Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Available color themes for exported documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Get a display label for the theme.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Main Settings Struct
// ─────────────────────────────────────────────────────────────────────────────

/// User preferences.
///
/// This struct is serialized to JSON and persisted to the user's config
/// directory. All fields have defaults via `Default` and `#[serde(default)]`,
/// so a partial or missing file merges cleanly with the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    /// Whether deletion spans are visible in rendered output
    pub show_deletion: bool,

    /// Color theme for exported documents
    pub theme: Theme,

    /// Whether to open exported files after export
    pub open_after_export: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_deletion: true,
            theme: Theme::default(),
            open_after_export: false,
        }
    }
}

impl Settings {
    /// Value for the `--deletion-display` CSS custom property.
    ///
    /// Deletion spans are classed `SIMPLE_CRITIC_MARKUP__delete` and their
    /// `display` is gated on this property, so flipping `show_deletion`
    /// flips their visibility in every document rendered afterwards.
    pub fn deletion_display(&self) -> &'static str {
        if self.show_deletion {
            "inline-block"
        } else {
            "none"
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
