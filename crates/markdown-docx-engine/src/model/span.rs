use serde::Serialize;

/// A line range `[start, end)` into the source text.
///
/// Blocks store the lines they were produced from so that renderers and
/// tests can map output back to the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LineSpan {
    /// Index of the first consumed line.
    pub start: usize,
    /// Index of the first line not consumed.
    pub end: usize,
}

impl LineSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the number of lines covered. Uses saturating subtraction.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn overlaps(self, other: LineSpan) -> bool {
        self.start < other.end && other.start < self.end
    }
}
