use std::fmt;

use serde::Serialize;

/// A recoverable problem found while parsing.
///
/// Diagnostics never stop a conversion; they are collected on the
/// [`Document`](super::Document) and logged as they are recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Zero-based source line the problem was found at.
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DiagnosticKind {
    /// An embedded markup fragment could not be parsed and was kept verbatim.
    MalformedEmbeddedMarkup { reason: String },
    /// Fragment collection stopped at the line cap without a closing signal.
    FragmentLineCap { cap: usize },
    /// An image reference did not resolve to a readable file.
    ImageResolution { path: String, reason: String },
    /// A width hint was neither a percentage nor a number.
    InvalidWidthHint { hint: String },
    /// A code fence was still open at end of input.
    UnterminatedCodeFence,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: ", self.line + 1)?;
        match &self.kind {
            DiagnosticKind::MalformedEmbeddedMarkup { reason } => {
                write!(f, "malformed embedded markup ({reason}), kept as raw text")
            }
            DiagnosticKind::FragmentLineCap { cap } => {
                write!(f, "embedded markup reached the {cap}-line limit without closing")
            }
            DiagnosticKind::ImageResolution { path, reason } => {
                write!(f, "image {path}: {reason}")
            }
            DiagnosticKind::InvalidWidthHint { hint } => {
                write!(f, "ignoring unusable width hint {hint:?}")
            }
            DiagnosticKind::UnterminatedCodeFence => {
                write!(f, "code fence not closed before end of input")
            }
        }
    }
}
