use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Block, TableGrid};
use crate::parsing::source::SourceText;

use super::super::types::Handled;

/// Pipe-delimited table rows: `| a | b |` or `a | b`.
pub struct PipeTable;

impl PipeTable {
    pub const PIPE: char = '|';
    /// A line needs this many pipes to open a table.
    pub const MIN_PIPES: usize = 2;

    fn separator_cell_regex() -> &'static Regex {
        static SEPARATOR: OnceLock<Regex> = OnceLock::new();
        SEPARATOR.get_or_init(|| Regex::new(r"^:?-+:?$").expect("Invalid separator cell regex"))
    }

    pub fn opens(line: &str) -> bool {
        line.matches(Self::PIPE).count() >= Self::MIN_PIPES
    }

    /// Rows after the first continue while lines contain any pipe.
    pub fn continues(line: &str) -> bool {
        line.contains(Self::PIPE)
    }

    /// Splits a row into trimmed cells, dropping the empty cell produced by
    /// a leading or trailing pipe.
    pub fn split_row(line: &str) -> Vec<String> {
        let mut cells: Vec<String> = line
            .trim()
            .split(Self::PIPE)
            .map(|c| c.trim().to_string())
            .collect();
        if cells.first().is_some_and(String::is_empty) {
            cells.remove(0);
        }
        if cells.last().is_some_and(String::is_empty) {
            cells.pop();
        }
        cells
    }

    /// Whether a row only separates the header from the body (`|---|:-:|`).
    pub fn is_separator(line: &str) -> bool {
        let cells = Self::split_row(line);
        !cells.is_empty()
            && cells
                .iter()
                .all(|c| Self::separator_cell_regex().is_match(&c.replace(' ', "")))
    }

    /// Consumes the table rows starting at `start`.
    ///
    /// Separator rows and rows without cells are skipped. A table left with
    /// no cells produces no block.
    pub fn consume(source: &SourceText, start: usize) -> Handled {
        let mut rows = vec![];
        let mut i = start;
        while let Some(line) = source.line(i) {
            if !Self::continues(line) {
                break;
            }
            i += 1;
            if Self::is_separator(line) {
                continue;
            }
            let cells = Self::split_row(line);
            if !cells.is_empty() {
                rows.push(cells);
            }
        }

        let handled = Handled::new(i.max(start + 1));
        match TableGrid::from_rows(rows) {
            Some(grid) => handled.with_block(Block::Table(grid)),
            None => {
                log::debug!("table at line {} has no cells, skipped", start + 1);
                handled
            }
        }
    }
}
