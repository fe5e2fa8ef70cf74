use std::fs;

use markdown_docx_engine::{
    Block, ConvertOptions, DiagnosticKind, DocumentRenderer, OutlineRenderer, Run, convert_file,
    convert_str,
};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn write_png(dir: &TempDir, name: &str, width: u32, height: u32) {
    image::RgbImage::new(width, height)
        .save(dir.path().join(name))
        .unwrap();
}

#[test]
fn missing_image_does_not_fail_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.md");
    fs::write(&path, "Before\n\n![Lost](nowhere/lost.png)\n\nAfter\n").unwrap();

    let doc = convert_file(&path, &ConvertOptions::default()).unwrap();

    let labels: Vec<_> = doc.iter_blocks().map(Block::label).collect();
    assert_eq!(labels, vec!["Paragraph", "Image", "Paragraph"]);
    let Block::Image(spec) = &doc.blocks[1].block else {
        unreachable!()
    };
    assert!(!spec.resolved);
    assert_eq!(spec.alt_text, "Lost");
    assert!(matches!(
        doc.diagnostics[0].kind,
        DiagnosticKind::ImageResolution { .. }
    ));
}

#[test]
fn percent_width_hint_scales_to_page_width() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir, "chart.png", 400, 200);

    let doc = convert_str(
        r#"<div align="center"><img src="chart.png" alt="Chart" width="50%"></div>"#,
        dir.path(),
        &ConvertOptions::default(),
    );

    let Block::Image(spec) = &doc.blocks[0].block else {
        panic!("expected an image, got {:?}", doc.blocks);
    };
    assert!(spec.resolved);
    assert_eq!(spec.target_width, Some(3.25));
    assert_eq!(spec.target_height, Some(1.625));
    assert_eq!(spec.caption(), Some("Chart"));
}

#[test]
fn bad_width_hint_falls_back_to_default_sizing() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir, "tall.png", 300, 600);

    let doc = convert_str(
        r#"<img src="tall.png" width="wide"/>"#,
        dir.path(),
        &ConvertOptions::default(),
    );

    let Block::Image(spec) = &doc.blocks[0].block else {
        panic!("expected an image, got {:?}", doc.blocks);
    };
    assert_eq!(spec.target_height, Some(4.0));
    assert_eq!(spec.target_width, Some(2.0));
    assert_eq!(
        doc.diagnostics[0].kind,
        DiagnosticKind::InvalidWidthHint {
            hint: "wide".into()
        }
    );
}

#[test]
fn runaway_fragment_is_capped_and_parsing_resumes() {
    let mut md = String::from("<div>\n");
    for i in 0..11 {
        md.push_str(&format!("<span>{i}</span>\n"));
    }
    md.push_str("# After\n");

    let doc = convert_str(&md, ".", &ConvertOptions::default());

    assert!(matches!(doc.blocks[0].block, Block::RawFallback { .. }));
    assert_eq!(doc.blocks[0].lines.end, 10);
    // the two span lines past the cap are ordinary paragraphs
    assert_eq!(doc.blocks.len(), 4);
    assert!(matches!(
        doc.blocks.last().map(|b| &b.block),
        Some(Block::Heading { level: 1, text }) if text == "After"
    ));
}

#[test]
fn capped_image_run_degrades_to_raw_text() {
    let md: String = (0..12)
        .map(|i| format!("<img src=\"p{i}.png\" alt=\"a\">\n"))
        .collect();

    let doc = convert_str(&md, ".", &ConvertOptions::default());

    let spans: Vec<_> = doc
        .blocks
        .iter()
        .map(|b| (b.block.label(), b.lines.start, b.lines.end))
        .collect();
    assert_eq!(
        spans,
        vec![
            ("RawFallback", 0, 10),
            ("Image", 10, 13),
            ("Image", 10, 13),
        ]
    );
    assert!(matches!(
        doc.diagnostics[0].kind,
        DiagnosticKind::FragmentLineCap { cap: 10 }
    ));
}

#[test]
fn image_with_blank_target_is_kept_as_missing() {
    let doc = convert_str("![alt]( )\nnext", ".", &ConvertOptions::default());

    let labels: Vec<_> = doc.iter_blocks().map(Block::label).collect();
    assert_eq!(labels, vec!["Image", "Paragraph"]);
    let Block::Image(spec) = &doc.blocks[0].block else {
        unreachable!()
    };
    assert!(!spec.resolved);
    assert_eq!(spec.alt_text, "alt");
    assert_eq!(doc.diagnostics.len(), 1);
}

#[test]
fn pipe_rows_are_padded_into_a_grid() {
    let doc = convert_str("a|b|c\nx|y", ".", &ConvertOptions::default());

    let Block::Table(grid) = &doc.blocks[0].block else {
        panic!("expected a table, got {:?}", doc.blocks);
    };
    assert_eq!((grid.row_count(), grid.col_count()), (2, 3));
    assert_eq!(grid.rows()[1], vec!["x", "y", ""]);
}

#[test]
fn inline_markers_become_runs() {
    let doc = convert_str(
        "**bold** and *italic* and `code`",
        ".",
        &ConvertOptions::default(),
    );

    assert_eq!(
        doc.blocks[0].block,
        Block::Paragraph {
            runs: vec![
                Run::bold("bold"),
                Run::plain(" and "),
                Run::italic("italic"),
                Run::plain(" and "),
                Run::code("code"),
            ]
        }
    );
}

#[test]
fn unterminated_fence_runs_to_end_of_input() {
    let doc = convert_str("```\nlet x = 1;\n\n# not a heading", ".", &ConvertOptions::default());

    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(
        doc.blocks[0].block,
        Block::CodeBlock {
            language: None,
            text: "let x = 1;\n\n# not a heading".into()
        }
    );
    assert_eq!(doc.diagnostics[0].kind, DiagnosticKind::UnterminatedCodeFence);
}

#[test]
fn outline_of_a_small_document() {
    let doc = convert_str(
        "# Notes\n\n1. first\n2. second\n\n> remember",
        ".",
        &ConvertOptions::default(),
    );

    let Ok(out) = OutlineRenderer::default().render(doc);

    assert_eq!(out, "# Notes\n\n1. first\n2. second\n\n> remember\n");
}
