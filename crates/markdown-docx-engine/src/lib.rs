//! # markdown-docx-engine
//!
//! Parses Markdown (with small embedded HTML fragments) into an ordered
//! document model ready to be written into an office document.
//!
//! - **`parsing`**: line dispatch, block handlers, inline runs, fragments
//! - **`images`**: image path resolution and page sizing
//! - **`model`**: the `Document` handed to renderers
//! - **`render`**: the `DocumentRenderer` seam and a plain-text outline
//! - **`io`** / **`convert`**: reading sources and one-call conversion

pub mod convert;
pub mod images;
pub mod io;
pub mod model;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use convert::{ConvertError, ConvertOptions, convert_file, convert_str};
pub use images::{ImageLayout, ImageResolver};
pub use io::*;
pub use model::{
    Block, BlockNode, Diagnostic, DiagnosticKind, Document, ImageFailure, ImageSpec, LineSpan,
    ListItem, ListKind, Run, TableGrid,
};
pub use render::{DocumentRenderer, OutlineRenderer};
