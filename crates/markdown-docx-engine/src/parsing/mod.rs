//! # Parsing
//!
//! Line-oriented Markdown parsing into the [`Document`] model.
//!
//! - **`source`**: `SourceText`, the document as lines
//! - **`cursor`**: byte cursor shared by the inline and fragment scanners
//! - **`blocks`**: line classification and per-block handlers
//! - **`inline`**: paragraph text to styled runs
//! - **`fragment`**: embedded HTML-like markup
//! - **`dispatcher`**: `Dispatcher`, an iterator of parse steps
//! - **`snapshot`**: helpers for snapshot and invariant tests

pub mod blocks;
pub mod cursor;
pub mod dispatcher;
pub mod fragment;
pub mod inline;
pub mod snapshot;
pub mod source;

use crate::images::{ImageProbe, ImageResolver};
use crate::model::{Document, DocumentBuilder};

use blocks::ParseContext;
pub use dispatcher::{Dispatcher, Step};
pub use source::SourceText;

/// Parses the whole source into a document.
///
/// Never fails: problems are recorded as diagnostics on the document and
/// the affected lines degrade to simpler blocks.
pub fn parse_document<P: ImageProbe>(
    source: &SourceText,
    resolver: &ImageResolver<P>,
    fragment_line_cap: usize,
) -> Document {
    let ctx = ParseContext {
        source,
        resolver,
        fragment_line_cap,
    };

    let mut builder = DocumentBuilder::new();
    for step in Dispatcher::new(ctx) {
        for note in step.notes {
            builder.diagnostic(note);
        }
        builder.push(step.lines, step.blocks);
    }

    let doc = builder.finish();
    log::debug!(
        "parsed {} lines into {} blocks ({} diagnostics)",
        source.len(),
        doc.blocks.len(),
        doc.diagnostics.len()
    );
    doc
}
