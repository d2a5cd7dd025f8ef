//! CriticMarkup span editing and rendering
//!
//! Two halves, mirroring what a host editor needs from the markup:
//! - `edit`: wrap a selection in span delimiters and report the cursor
//! - `render`: expand spans into `<ins>`/`<del>` HTML in a single pass

mod edit;
mod render;

pub use edit::{insert_span, EditResult, SpanKind};
pub use render::{SpanRenderer, CSS_CLASS_PREFIX};
