//! Configuration module for criticmd
//!
//! User preferences with JSON serialization and persistent storage in the
//! platform config directory.

mod persistence;
mod settings;

pub use persistence::*;
pub use settings::*;
