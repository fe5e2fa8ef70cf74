use crate::model::{Block, Document};

/// Panics if the document breaks a structural invariant of the parser.
///
/// `line_count` is the number of source lines the document was parsed from.
pub fn check(doc: &Document, line_count: usize) {
    let mut prev = None;
    for node in &doc.blocks {
        let span = node.lines;
        assert!(
            span.start < span.end && span.end <= line_count,
            "block span out of bounds: {span:?} (line count: {line_count})"
        );
        if let Some(p) = prev
            && p != span
        {
            assert!(
                !span.overlaps(p) && p.end <= span.start,
                "block spans out of order: {p:?} then {span:?}"
            );
        }
        prev = Some(span);

        match &node.block {
            Block::Heading { level, .. } => {
                assert!((1..=6).contains(level), "heading level {level} out of range");
            }
            Block::Table(grid) => {
                assert!(grid.row_count() > 0 && grid.col_count() > 0, "empty table");
                assert!(
                    grid.rows().iter().all(|r| r.len() == grid.col_count()),
                    "table is not rectangular: {grid:?}"
                );
            }
            Block::Image(spec) => {
                assert_eq!(
                    spec.resolved,
                    spec.target_width.is_some() && spec.target_height.is_some(),
                    "image sizing disagrees with resolution: {spec:?}"
                );
                assert_eq!(spec.resolved, spec.failure.is_none());
            }
            _ => {}
        }
    }

    for d in &doc.diagnostics {
        assert!(
            d.line < line_count,
            "diagnostic past end of input: {d:?} (line count: {line_count})"
        );
    }
}
