use serde::Serialize;

use super::{
    block::{Block, BlockNode},
    diagnostic::Diagnostic,
    span::LineSpan,
};

/// The finished document model handed to a renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub blocks: Vec<BlockNode>,
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// Iterates the blocks without their spans.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks.iter().map(|n| &n.block)
    }
}

/// Append-only accumulator for blocks in document order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    blocks: Vec<BlockNode>,
    diagnostics: Vec<Diagnostic>,
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the blocks produced from `lines`.
    pub fn push(&mut self, lines: LineSpan, blocks: Vec<Block>) {
        debug_assert!(
            self.blocks.last().is_none_or(|prev| prev.lines.end <= lines.start),
            "blocks must be pushed in document order"
        );
        self.blocks
            .extend(blocks.into_iter().map(|block| BlockNode { block, lines }));
    }

    pub fn diagnostic(&mut self, diagnostic: Diagnostic) {
        log::warn!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn finish(self) -> Document {
        Document {
            blocks: self.blocks,
            diagnostics: self.diagnostics,
        }
    }
}
