//! # Block Parsing
//!
//! Block parsing works one opener at a time: each unconsumed line is
//! classified, then the matching handler consumes as many lines as its
//! block needs and hands back the next unconsumed index.
//!
//! ## Modules
//!
//! - **`types`**: `ParseContext` handler inputs and the `Handled` result
//! - **`kinds`**: Block-specific types with owned delimiters (Heading, CodeFence, PipeTable, ...)
//! - **`classify`**: `MarkdownLineClassifier` decides the `BlockOpen` for a line
//!
//! ## Key Invariants
//!
//! - Every handler consumes at least one line
//! - Fenced code blocks are raw zones: no block/inline parsing inside
//! - Blocks come out in source order

pub mod classify;
pub mod kinds;
pub mod types;

use crate::images::ImageProbe;

pub use classify::{BlockOpen, MarkdownLineClassifier};
pub use types::{Handled, ParseContext};

use super::fragment::EmbeddedMarkup;
use kinds::{BlockQuote, CodeFence, Heading, ImageRef, ListMarker, Paragraph, PipeTable};

/// Runs the handler for `open` on the line at `start`.
pub fn handle<P: ImageProbe>(ctx: &ParseContext<'_, P>, open: BlockOpen, start: usize) -> Handled {
    let raw = ctx.line(start).unwrap_or_default();
    let line = raw.trim_end();
    match open {
        BlockOpen::Fragment => EmbeddedMarkup::consume(ctx, start),
        BlockOpen::Heading => Heading::consume(line, start),
        BlockOpen::ImageRef => ImageRef::consume(line, start, ctx.resolver),
        BlockOpen::CodeFence(kind) => CodeFence::consume(ctx.source, start, kind),
        BlockOpen::Table => PipeTable::consume(ctx.source, start),
        BlockOpen::ListItem => ListMarker::consume(ctx.source, start),
        BlockOpen::Quote => BlockQuote::consume(line, start),
        // runs keep the line verbatim, trailing spaces included
        BlockOpen::Paragraph => Paragraph::consume(raw, start),
    }
}
