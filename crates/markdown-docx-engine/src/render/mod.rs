//! # Rendering
//!
//! A renderer consumes a finished [`Document`](crate::model::Document). The
//! office-document writer lives outside this crate; [`OutlineRenderer`] is
//! the plain-text rendering used by the CLI and in tests.

pub mod outline;

pub use outline::OutlineRenderer;

use crate::model::Document;

/// Turns a document model into some output.
pub trait DocumentRenderer {
    type Output;
    type Error;

    fn render(&mut self, doc: Document) -> Result<Self::Output, Self::Error>;
}
