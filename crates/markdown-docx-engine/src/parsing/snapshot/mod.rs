//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`normalize`**: Renders a parsed document as stable text lines for
//!   `insta` snapshot testing
//! - **`invariants`**: Runtime checks for parser correctness (spans in bounds
//!   and ordered, tables rectangular, image specs consistent)
//!
//! Parsing behavior is pinned by snapshot tests over fixture documents
//! rather than by a separate formal grammar.

pub mod invariants;
pub mod normalize;

pub use invariants::check as invariants;
pub use normalize::normalize;
