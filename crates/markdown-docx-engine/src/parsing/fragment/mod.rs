//! # Embedded Markup Fragments
//!
//! Markdown sources often inline small HTML snippets: a centered `<div>`
//! around an `<img>`, or a hand-written `<table>`. This module collects such
//! a snippet (possibly spanning several lines), tokenizes it with a small
//! grammar and turns what it recognizes into blocks.
//!
//! - **`lexer`**: `tokenize` into start tags, end tags and text
//! - **`interpret`**: walks tokens, yielding images and tables in order
//!
//! Nothing here is fatal: a fragment that cannot be read becomes a single
//! `RawFallback` block plus a diagnostic.

pub mod interpret;
pub mod lexer;

use crate::images::ImageProbe;
use crate::model::{Block, DiagnosticKind, Run, TableGrid};

use super::blocks::types::{Handled, ParseContext};
use super::source::SourceText;
use interpret::{FragmentItem, interpret};
use lexer::tokenize;

/// Default number of lines one fragment may span.
pub const DEFAULT_LINE_CAP: usize = 10;

/// Raw text gathered for one fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collected {
    /// Collected lines joined with `\n`.
    pub text: String,
    /// First line not part of the fragment.
    pub next: usize,
    /// Collection stopped at the cap rather than at a closing signal.
    pub capped: bool,
}

/// Inline structured markup (marker struct).
pub struct EmbeddedMarkup;

impl EmbeddedMarkup {
    /// Tags that open a fragment anywhere on a line.
    pub const OPENERS: [&'static str; 3] = ["<img", "<div", "<table"];
    /// Closing tags that open a fragment when a line starts with them.
    pub const ORPHAN_CLOSERS: [&'static str; 2] = ["</div>", "</table>"];
    /// Closing tags that end collection.
    pub const CLOSERS: [&'static str; 4] = ["</div>", "</p>", "</table>", "</html>"];

    pub fn opens(line: &str) -> bool {
        let lower = line.to_ascii_lowercase();
        let trimmed = lower.trim_start();
        Self::OPENERS.iter().any(|o| lower.contains(o))
            || Self::ORPHAN_CLOSERS.iter().any(|c| trimmed.starts_with(c))
    }

    fn closes(line: &str) -> bool {
        let lower = line.to_ascii_lowercase();
        (lower.contains("<img") && lower.contains("/>"))
            || Self::CLOSERS.iter().any(|c| lower.contains(c))
    }

    /// Gathers lines from `start` until a closing signal, a non-markup line
    /// after the first, the end of input, or `cap` lines.
    pub fn collect(source: &SourceText, start: usize, cap: usize) -> Collected {
        let cap = cap.max(1);
        let mut lines: Vec<&str> = vec![];
        let mut i = start;
        let mut closed = false;

        while lines.len() < cap
            && let Some(line) = source.line(i)
        {
            lines.push(line);
            i += 1;
            if Self::closes(line) || (lines.len() > 1 && !line.trim().starts_with('<')) {
                closed = true;
                break;
            }
        }

        Collected {
            text: lines.join("\n"),
            next: i,
            capped: !closed && lines.len() == cap,
        }
    }

    pub fn consume<P: ImageProbe>(ctx: &ParseContext<'_, P>, start: usize) -> Handled {
        let cap = ctx.fragment_line_cap.max(1);
        let collected = Self::collect(ctx.source, start, cap);
        let mut handled = Handled::new(collected.next);

        // capped text is never interpreted
        if collected.capped {
            handled.note(start, DiagnosticKind::FragmentLineCap { cap });
            let reason = format!("no closing tag within {cap} lines");
            return Self::fallback(handled, start, &collected.text, reason);
        }

        let tokens = match tokenize(&collected.text) {
            Ok(tokens) => tokens,
            Err(e) => return Self::fallback(handled, start, &collected.text, e.to_string()),
        };
        let reading = interpret(&tokens);
        if !reading.unclosed.is_empty() {
            log::debug!(
                "fragment at line {} ends with <{}> still open",
                start + 1,
                reading.unclosed.join("> <")
            );
        }

        for item in reading.items {
            match item {
                FragmentItem::Image { src, alt, width } => {
                    let resolution = ctx.resolver.resolve(&src, &alt, width.as_deref());
                    for kind in resolution.notes {
                        handled.note(start, kind);
                    }
                    handled.push(Block::Image(resolution.spec));
                }
                FragmentItem::Table(rows) => match TableGrid::from_rows(rows) {
                    Some(grid) => handled.push(Block::Table(grid)),
                    None => log::debug!("skipping empty embedded table at line {}", start + 1),
                },
            }
        }

        if !reading.saw_image && !reading.saw_table && !reading.text.is_empty() {
            handled.push(Block::Paragraph {
                runs: vec![Run::plain(reading.text)],
            });
        }

        handled
    }

    fn fallback(mut handled: Handled, start: usize, raw: &str, reason: String) -> Handled {
        handled.note(start, DiagnosticKind::MalformedEmbeddedMarkup { reason });
        let text = raw.trim();
        if !text.is_empty() {
            handled.push(Block::RawFallback {
                text: text.to_string(),
            });
        }
        handled
    }
}
