use crate::images::{ImageProbe, ImageResolver};
use crate::model::{Block, Diagnostic, DiagnosticKind};
use crate::parsing::source::SourceText;

/// Read-only inputs shared by every block handler during one parse.
pub struct ParseContext<'a, P: ImageProbe> {
    pub source: &'a SourceText,
    pub resolver: &'a ImageResolver<P>,
    /// Maximum number of lines one embedded markup fragment may span.
    pub fragment_line_cap: usize,
}

impl<'a, P: ImageProbe> ParseContext<'a, P> {
    pub fn line(&self, index: usize) -> Option<&'a str> {
        self.source.line(index)
    }
}

/// What a block handler produced from the lines starting at its input index.
///
/// # Invariants
///
/// - `next` is strictly greater than the handler's start index
/// - `blocks` are in source order
#[derive(Debug, Default)]
pub struct Handled {
    /// Index of the first line the handler did not consume.
    pub next: usize,
    pub blocks: Vec<Block>,
    pub notes: Vec<Diagnostic>,
}

impl Handled {
    pub fn new(next: usize) -> Self {
        Self {
            next,
            ..Self::default()
        }
    }

    pub fn with_block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    pub fn note(&mut self, line: usize, kind: DiagnosticKind) {
        self.notes.push(Diagnostic { line, kind });
    }
}
