use crate::images::ImageProbe;
use crate::model::{Block, Diagnostic, LineSpan};

use super::blocks::{self, MarkdownLineClassifier, ParseContext};

/// One dispatcher iteration: the lines a handler consumed and what it made
/// of them. `blocks` may be empty (an empty heading, an orphan closing tag).
#[derive(Debug)]
pub struct Step {
    pub lines: LineSpan,
    pub blocks: Vec<Block>,
    pub notes: Vec<Diagnostic>,
}

/// Walks the source one block opener at a time.
///
/// Blank lines between blocks are skipped. Each call to `next` runs exactly
/// one handler, so a caller may stop between any two blocks.
pub struct Dispatcher<'a, P: ImageProbe> {
    ctx: ParseContext<'a, P>,
    classifier: MarkdownLineClassifier,
    pos: usize,
}

impl<'a, P: ImageProbe> Dispatcher<'a, P> {
    pub fn new(ctx: ParseContext<'a, P>) -> Self {
        Self {
            ctx,
            classifier: MarkdownLineClassifier,
            pos: 0,
        }
    }

    /// Index of the next line to be examined.
    pub fn position(&self) -> usize {
        self.pos
    }
}

impl<P: ImageProbe> Iterator for Dispatcher<'_, P> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        loop {
            let start = self.pos;
            let line = self.ctx.line(start)?;
            let Some(open) = self.classifier.classify(line) else {
                self.pos += 1;
                continue;
            };

            log::debug!("line {}: {open:?}", start + 1);
            let handled = blocks::handle(&self.ctx, open, start);

            // a handler that made no progress would loop forever
            let end = handled.next.clamp(start + 1, self.ctx.source.len().max(start + 1));
            self.pos = end;

            return Some(Step {
                lines: LineSpan::new(start, end),
                blocks: handled.blocks,
                notes: handled.notes,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::images::ImageResolver;
    use crate::parsing::source::SourceText;
    use pretty_assertions::assert_eq;

    fn steps(text: &str) -> Vec<(LineSpan, Vec<&'static str>)> {
        let source = SourceText::new(text);
        let resolver = ImageResolver::new("/nonexistent-dir", Default::default());
        let ctx = ParseContext {
            source: &source,
            resolver: &resolver,
            fragment_line_cap: 10,
        };
        Dispatcher::new(ctx)
            .map(|s| (s.lines, s.blocks.iter().map(Block::label).collect()))
            .collect()
    }

    #[test]
    fn blank_lines_are_skipped() {
        assert_eq!(
            steps("\n# A\n\n\nbody\n"),
            vec![
                (LineSpan::new(1, 2), vec!["Heading"]),
                (LineSpan::new(4, 5), vec!["Paragraph"]),
            ]
        );
    }

    #[test]
    fn multi_line_handlers_advance_past_their_lines() {
        let text = "```\ncode\n```\n- a\n- b\nx | y\n1 | 2\n> q";
        assert_eq!(
            steps(text),
            vec![
                (LineSpan::new(0, 3), vec!["CodeBlock"]),
                (LineSpan::new(3, 5), vec!["List"]),
                (LineSpan::new(5, 7), vec!["Table"]),
                (LineSpan::new(7, 8), vec!["Quote"]),
            ]
        );
    }

    #[test]
    fn empty_heading_still_advances() {
        assert_eq!(
            steps("###\ntext"),
            vec![
                (LineSpan::new(0, 1), vec![]),
                (LineSpan::new(1, 2), vec!["Paragraph"]),
            ]
        );
    }

    #[test]
    fn caller_can_stop_between_steps() {
        let source = SourceText::new("# a\n# b\n# c");
        let resolver = ImageResolver::new(".", Default::default());
        let ctx = ParseContext {
            source: &source,
            resolver: &resolver,
            fragment_line_cap: 10,
        };
        let mut dispatcher = Dispatcher::new(ctx);
        assert!(dispatcher.next().is_some());
        assert_eq!(dispatcher.position(), 1);
    }
}
