use serde::Serialize;

/// A rectangular grid of cell text.
///
/// # Invariants
///
/// - every row has exactly `cols` cells
/// - `rows` and `cols` are both non-zero
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableGrid {
    rows: Vec<Vec<String>>,
    cols: usize,
}

impl TableGrid {
    /// Builds a grid from ragged rows, right-padding short rows with empty cells.
    ///
    /// Returns `None` when there are no rows or no row has any cell.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Option<Self> {
        let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return None;
        }

        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(cols, String::new());
                row
            })
            .collect();

        Some(Self { rows, cols })
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn col_count(&self) -> usize {
        self.cols
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}
