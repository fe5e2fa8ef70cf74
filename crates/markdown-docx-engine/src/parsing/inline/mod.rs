//! # Inline Parsing
//!
//! Cursor-based splitting of a single line into styled runs.
//!
//! ## Modules
//!
//! - **`kinds`**: span types with owned delimiters (Strong, Emphasis, CodeSpan)
//! - **`parser`**: `format_runs()` entry point
//!
//! ## Precedence
//!
//! Spans never nest. Whichever span opens leftmost and closes wins, so
//! `` `*x*` `` is a single code run and `**x**` is a single bold run.

pub mod kinds;
pub mod parser;

pub use parser::format_runs;
