use crate::model::Block;

use super::super::types::Handled;

/// ATX-style heading: one or more leading `#`.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 6;

    pub fn opens(line: &str) -> bool {
        line.starts_with(Self::MARKER)
    }

    /// Returns `(level, text)`; the level is clamped to `1..=6` and the text
    /// is trimmed. `None` when nothing remains after the markers.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let rest = line.trim_start_matches(Self::MARKER);
        let count = line.len() - rest.len();
        if count == 0 {
            return None;
        }
        let text = rest.trim();
        if text.is_empty() {
            return None;
        }
        let level = u8::try_from(count).unwrap_or(u8::MAX).clamp(1, Self::MAX_LEVEL);
        Some((level, text))
    }

    pub fn consume(line: &str, start: usize) -> Handled {
        let handled = Handled::new(start + 1);
        match Self::parse(line) {
            Some((level, text)) => handled.with_block(Block::Heading {
                level,
                text: text.to_string(),
            }),
            None => handled,
        }
    }
}
