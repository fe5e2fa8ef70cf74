use crate::parsing::fragment::EmbeddedMarkup;

use super::kinds::{BlockQuote, CodeFence, FenceKind, Heading, ImageRef, ListMarker, PipeTable};

/// Which handler a line opens, decided from the line alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockOpen {
    Fragment,
    Heading,
    ImageRef,
    CodeFence(FenceKind),
    Table,
    ListItem,
    Quote,
    Paragraph,
}

/// Classifies lines by block opener precedence.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Returns the opener for a line, or `None` for a blank line.
    ///
    /// Trailing whitespace is ignored. The first matching rule wins, so a
    /// line that is both a heading and a table row is a heading.
    pub fn classify(&self, line: &str) -> Option<BlockOpen> {
        let line = line.trim_end();
        if line.is_empty() {
            return None;
        }

        let open = if EmbeddedMarkup::opens(line) {
            BlockOpen::Fragment
        } else if Heading::opens(line) {
            BlockOpen::Heading
        } else if ImageRef::opens(line) {
            BlockOpen::ImageRef
        } else if let Some(kind) = CodeFence::sig(line) {
            BlockOpen::CodeFence(kind)
        } else if PipeTable::opens(line) {
            BlockOpen::Table
        } else if ListMarker::opens(line) {
            BlockOpen::ListItem
        } else if BlockQuote::opens(line) {
            BlockOpen::Quote
        } else {
            BlockOpen::Paragraph
        };
        Some(open)
    }
}
