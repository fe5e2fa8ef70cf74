use crate::model::{Block, BlockNode, Document, ImageFailure, ImageSpec, ListKind, run::runs_to_markup};

/// One line per block, `start..end Kind detail`, then one `! message` line
/// per diagnostic.
pub fn normalize(doc: &Document) -> String {
    let mut out: Vec<String> = doc.blocks.iter().map(block_line).collect();
    out.extend(doc.diagnostics.iter().map(|d| format!("! {d}")));
    out.join("\n")
}

fn block_line(node: &BlockNode) -> String {
    let detail = match &node.block {
        Block::Heading { level, text } => format!("Heading({level}) {text}"),
        Block::Paragraph { runs } => format!("Paragraph {}", runs_to_markup(runs)),
        Block::CodeBlock { language, text } => format!(
            "CodeBlock({}) {text:?}",
            language.as_deref().unwrap_or("-")
        ),
        Block::Table(grid) => {
            let rows: Vec<String> = grid
                .rows()
                .iter()
                .map(|r| format!("[{}]", r.join("|")))
                .collect();
            format!(
                "Table {}x{} {}",
                grid.row_count(),
                grid.col_count(),
                rows.join(" ")
            )
        }
        Block::List { items } => {
            let items: Vec<String> = items
                .iter()
                .map(|i| match i.kind {
                    ListKind::Bullet => format!("- {}", i.text),
                    ListKind::Numbered => format!("#. {}", i.text),
                })
                .collect();
            format!("List [{}]", items.join(", "))
        }
        Block::Quote { depth, text } => format!("Quote({depth}) {text}"),
        Block::Image(spec) => format!("Image {}", image_detail(spec)),
        Block::RawFallback { text } => format!("RawFallback {text:?}"),
    };
    format!("{}..{} {detail}", node.lines.start, node.lines.end)
}

fn image_detail(spec: &ImageSpec) -> String {
    let status = match (&spec.failure, spec.target_width, spec.target_height) {
        (None, Some(w), Some(h)) => format!("{w:.2}x{h:.2}in"),
        (Some(ImageFailure::Missing), ..) => "missing".to_string(),
        (Some(ImageFailure::Unreadable(_)), ..) => "unreadable".to_string(),
        _ => "unsized".to_string(),
    };
    format!("{} {status} alt={:?}", spec.source_path, spec.alt_text)
}
