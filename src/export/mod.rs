//! Document Export Module
//!
//! Exports markdown documents with CriticMarkup spans to standalone themed
//! HTML, either as a file or as clipboard content.
//!
//! - `html.rs` - HTML document generation with theme and span styling
//! - `clipboard.rs` - Platform clipboard operations

pub mod clipboard;
pub mod html;

pub use clipboard::{copy_html_to_clipboard, ClipboardError};
pub use html::{export_to_html_file, generate_html_document, generate_html_fragment};
