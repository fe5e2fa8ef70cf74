//! # Inline Kinds
//!
//! Inline span types that own their delimiters.
//!
//! - **`Strong`**: `**` (bold)
//! - **`Emphasis`**: `*` (italic)
//! - **`CodeSpan`**: `` ` `` (code, a raw zone)
//!
//! The parser refers to these constants; it never hardcodes a marker.

pub mod code_span;
pub mod emphasis;

pub use code_span::CodeSpan;
pub use emphasis::{Emphasis, Strong};
