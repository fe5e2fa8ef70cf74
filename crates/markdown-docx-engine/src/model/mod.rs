//! # Document Model
//!
//! The contract between the parser and a renderer: an ordered sequence of
//! [`BlockNode`]s plus the diagnostics recorded while producing them.
//!
//! - **`block`**: `Block` variants, list items, `BlockNode`
//! - **`run`**: styled paragraph runs
//! - **`image`**: `ImageSpec` and why resolution failed
//! - **`table`**: `TableGrid`, the rectangular cell matrix
//! - **`document`**: `Document` and its append-only `DocumentBuilder`

pub mod block;
pub mod diagnostic;
pub mod document;
pub mod image;
pub mod run;
pub mod span;
pub mod table;

pub use block::{Block, BlockNode, ListItem, ListKind};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use document::{Document, DocumentBuilder};
pub use image::{ImageFailure, ImageSpec};
pub use run::Run;
pub use span::LineSpan;
pub use table::TableGrid;
