use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Block, ListItem, ListKind};
use crate::parsing::source::SourceText;

use super::super::types::Handled;

/// Bullet (`- `, `* `, `+ `) and numbered (`1. `) list items.
pub struct ListMarker;

impl ListMarker {
    pub const BULLETS: [&'static str; 3] = ["- ", "* ", "+ "];

    fn numbered_regex() -> &'static Regex {
        static NUMBERED: OnceLock<Regex> = OnceLock::new();
        NUMBERED.get_or_init(|| Regex::new(r"^\d+\. ").expect("Invalid list marker regex"))
    }

    /// Classifies `line` as a list item, returning its kind and text.
    pub fn parse(line: &str) -> Option<(ListKind, &str)> {
        if let Some(rest) = Self::BULLETS.iter().find_map(|b| line.strip_prefix(*b)) {
            return Some((ListKind::Bullet, rest.trim()));
        }
        let m = Self::numbered_regex().find(line)?;
        Some((ListKind::Numbered, line[m.end()..].trim()))
    }

    pub fn opens(line: &str) -> bool {
        Self::parse(line).is_some()
    }

    /// Consumes consecutive item lines starting at `start`.
    ///
    /// Item kinds are decided per line, so one list may mix bullets and
    /// numbers. Leading whitespace is ignored on every line. Collection
    /// stops at the first blank line or non-item line.
    pub fn consume(source: &SourceText, start: usize) -> Handled {
        let mut items = vec![];
        let mut i = start;
        while let Some(line) = source.line(i) {
            let Some((kind, text)) = Self::parse(line.trim()) else {
                break;
            };
            items.push(ListItem {
                kind,
                text: text.to_string(),
            });
            i += 1;
        }

        let handled = Handled::new(i.max(start + 1));
        if items.is_empty() {
            return handled;
        }
        handled.with_block(Block::List { items })
    }
}
