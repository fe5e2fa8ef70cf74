use crate::model::Block;
use crate::parsing::inline::format_runs;

use super::super::types::Handled;

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters - they are the default block when no
/// other opener matches. Each paragraph is one source line, split into
/// runs by the inline formatter.
pub struct Paragraph;

impl Paragraph {
    pub fn consume(line: &str, start: usize) -> Handled {
        let handled = Handled::new(start + 1);
        if line.trim().is_empty() {
            return handled;
        }
        handled.with_block(Block::Paragraph {
            runs: format_runs(line),
        })
    }
}
