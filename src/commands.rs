//! Command palette
//!
//! The stable command registry: every user-facing operation has an id and a
//! human-readable name. Front ends (the CLI here, a palette UI elsewhere)
//! dispatch on the id.

// Allow dead code - the registry carries the complete palette API; a front
// end may not wire up every accessor
#![allow(dead_code)]

use crate::markup::SpanKind;

/// User-facing commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CriticCommand {
    /// Wrap the selection in an addition span
    Addition,
    /// Wrap the selection in a deletion span
    Deletion,
    /// Wrap the selection in a substitution span
    Substitution,
    /// Flip the persisted `showDeletion` setting
    ToggleShowDeletion,
}

impl CriticCommand {
    /// Stable command id.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Addition => "addition",
            Self::Deletion => "deletion",
            Self::Substitution => "substitution",
            Self::ToggleShowDeletion => "toggle-show-deletion",
        }
    }

    /// Human-readable command name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Addition => "Insert addition {++ ++}",
            Self::Deletion => "Insert deletion {-- --}",
            Self::Substitution => "Insert substitution {~~ ~> ~~}",
            Self::ToggleShowDeletion => "Toggle deletion setting",
        }
    }

    /// The span this command inserts, if it is an editing command.
    pub fn span_kind(&self) -> Option<SpanKind> {
        match self {
            Self::Addition => Some(SpanKind::Addition),
            Self::Deletion => Some(SpanKind::Deletion),
            Self::Substitution => Some(SpanKind::Substitution),
            Self::ToggleShowDeletion => None,
        }
    }

    /// All commands, in palette order.
    pub fn all() -> &'static [CriticCommand] {
        &[
            Self::Addition,
            Self::Deletion,
            Self::Substitution,
            Self::ToggleShowDeletion,
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
