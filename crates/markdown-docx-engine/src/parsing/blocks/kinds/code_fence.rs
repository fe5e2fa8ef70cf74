use crate::model::{Block, DiagnosticKind};
use crate::parsing::source::SourceText;

use super::super::types::Handled;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceKind {
    Backticks,
    Tildes,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";
    pub const TILDES: &'static str = "~~~";

    pub fn sig(line: &str) -> Option<FenceKind> {
        if line.starts_with(Self::BACKTICKS) {
            Some(FenceKind::Backticks)
        } else if line.starts_with(Self::TILDES) {
            Some(FenceKind::Tildes)
        } else {
            None
        }
    }

    pub fn closes(kind: FenceKind, sig: Option<FenceKind>) -> bool {
        sig == Some(kind)
    }

    /// The info string after the opening fence, if any.
    pub fn info(line: &str, kind: FenceKind) -> Option<String> {
        let marker = match kind {
            FenceKind::Backticks => Self::BACKTICKS,
            FenceKind::Tildes => Self::TILDES,
        };
        let rest = line.trim_start_matches(&marker[..1]).trim();
        (!rest.is_empty()).then(|| rest.to_string())
    }

    /// Consumes an opening fence at `start`, the raw lines after it, and the
    /// matching closing fence.
    ///
    /// Content lines are captured verbatim; fence lines are not part of the
    /// text. An unterminated fence runs to end of input. An empty fence
    /// produces no block.
    pub fn consume(source: &SourceText, start: usize, kind: FenceKind) -> Handled {
        let opener = source.line(start).unwrap_or_default();
        let language = Self::info(opener, kind);

        let mut i = start + 1;
        let mut content: Vec<&str> = vec![];
        let mut closed = false;
        while let Some(line) = source.line(i) {
            i += 1;
            if Self::closes(kind, Self::sig(line)) {
                closed = true;
                break;
            }
            content.push(line);
        }

        let mut handled = Handled::new(i);
        if !closed {
            handled.note(start, DiagnosticKind::UnterminatedCodeFence);
        }
        if !content.is_empty() {
            handled.push(Block::CodeBlock {
                language,
                text: content.join("\n"),
            });
        }
        handled
    }
}
