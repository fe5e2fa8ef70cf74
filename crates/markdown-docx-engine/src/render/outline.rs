use std::convert::Infallible;

use crate::model::{Block, Document, ImageFailure, ImageSpec, ListKind, run::runs_to_text};

use super::DocumentRenderer;

/// Renders a document as readable plain text, one block per paragraph.
#[derive(Debug, Clone)]
pub struct OutlineRenderer {
    /// Prefix for each code block line.
    pub code_indent: String,
}

impl Default for OutlineRenderer {
    fn default() -> Self {
        Self {
            code_indent: "    ".to_string(),
        }
    }
}

impl OutlineRenderer {
    fn block(&self, block: &Block) -> String {
        match block {
            Block::Heading { level, text } => {
                format!("{} {text}", "#".repeat(usize::from(*level)))
            }
            Block::Paragraph { runs } => runs_to_text(runs),
            Block::CodeBlock { text, .. } => text
                .split('\n')
                .map(|l| {
                    if l.is_empty() {
                        String::new()
                    } else {
                        format!("{}{l}", self.code_indent)
                    }
                })
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Table(grid) => grid
                .rows()
                .iter()
                .map(|r| format!("| {} |", r.join(" | ")))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::List { items } => {
                let mut n = 0;
                items
                    .iter()
                    .map(|item| match item.kind {
                        ListKind::Bullet => format!("- {}", item.text),
                        ListKind::Numbered => {
                            n += 1;
                            format!("{n}. {}", item.text)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            Block::Quote { text, .. } => format!("> {text}"),
            Block::Image(spec) => Self::image(spec),
            Block::RawFallback { text } => text.clone(),
        }
    }

    fn image(spec: &ImageSpec) -> String {
        match (&spec.failure, spec.target_width, spec.target_height) {
            (None, Some(w), Some(h)) => {
                let mut out = format!("[image: {} ({w:.2} x {h:.2} in)]", spec.source_path);
                if let Some(caption) = spec.caption() {
                    out.push_str(&format!("\nFigure: {caption}"));
                }
                out
            }
            (Some(ImageFailure::Unreadable(_)), ..) => {
                format!("[image unavailable: {}]", spec.fallback_label())
            }
            _ => format!("[image not found: {}]", spec.fallback_label()),
        }
    }
}

impl DocumentRenderer for OutlineRenderer {
    type Output = String;
    type Error = Infallible;

    fn render(&mut self, doc: Document) -> Result<String, Infallible> {
        let parts: Vec<String> = doc.iter_blocks().map(|b| self.block(b)).collect();
        let mut out = parts.join("\n\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}
