use serde::Serialize;

use super::{image::ImageSpec, run::Run, span::LineSpan, table::TableGrid};

/// Marker kind of a single list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListKind {
    /// `- `, `* ` or `+ `
    Bullet,
    /// `<digits>. `
    Numbered,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    pub kind: ListKind,
    pub text: String,
}

/// One structural unit of the output document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Block {
    Heading {
        /// Always within `1..=6`.
        level: u8,
        text: String,
    },
    Paragraph {
        runs: Vec<Run>,
    },
    CodeBlock {
        /// Info string following the opening fence, if any.
        language: Option<String>,
        text: String,
    },
    Table(TableGrid),
    List {
        items: Vec<ListItem>,
    },
    Quote {
        /// Number of `>` markers stripped from the line.
        depth: u8,
        text: String,
    },
    Image(ImageSpec),
    /// Source text that could not be interpreted, kept verbatim.
    RawFallback {
        text: String,
    },
}

impl Block {
    /// Short variant label used in logs and snapshots.
    pub fn label(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::Paragraph { .. } => "Paragraph",
            Block::CodeBlock { .. } => "CodeBlock",
            Block::Table(_) => "Table",
            Block::List { .. } => "List",
            Block::Quote { .. } => "Quote",
            Block::Image(_) => "Image",
            Block::RawFallback { .. } => "RawFallback",
        }
    }
}

/// A block together with the source lines it was produced from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockNode {
    pub block: Block,
    pub lines: LineSpan,
}
