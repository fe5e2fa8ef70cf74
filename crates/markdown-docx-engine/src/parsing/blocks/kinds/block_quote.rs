use crate::model::Block;

use super::super::types::Handled;

/// Single-line block quote.
///
/// All quote syntax knowledge lives here, not in the classifier.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::PREFIX)
    }

    /// Strips blockquote prefixes from a line, returning (depth, byte_offset).
    ///
    /// Handles various forms: `> text`, `>> nested`, `> > spaced nested`.
    pub fn strip_prefixes(s: &str) -> (u8, usize) {
        let b = s.as_bytes();
        let mut i = 0usize;
        let mut depth = 0u8;

        loop {
            while i < b.len() && b[i] == b' ' {
                i += 1;
            }
            if i < b.len() && b[i] == (Self::PREFIX as u8) {
                depth = depth.saturating_add(1);
                i += 1;
            } else {
                break;
            }
        }
        (depth, i)
    }

    /// Quotes never span lines; a quote with no text after its markers
    /// produces no block.
    pub fn consume(line: &str, start: usize) -> Handled {
        let (depth, idx) = Self::strip_prefixes(line);
        let text = line[idx..].trim();
        let handled = Handled::new(start + 1);
        if text.is_empty() {
            return handled;
        }
        handled.with_block(Block::Quote {
            depth,
            text: text.to_string(),
        })
    }
}
