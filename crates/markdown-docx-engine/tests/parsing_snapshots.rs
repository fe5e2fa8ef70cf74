use markdown_docx_engine::{
    ConvertOptions, convert_str,
    parsing::{SourceText, snapshot},
};

/// Image references in fixtures resolve against this (nonexistent) directory
/// so diagnostics do not depend on where the repository is checked out.
const ASSET_DIR: &str = "fixture-assets";

fn normalize_fixture(name: &str) -> String {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/{name}.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();

    let doc = convert_str(&md, ASSET_DIR, &ConvertOptions::default());
    snapshot::invariants(&doc, SourceText::new(&md).len());
    snapshot::normalize(&doc)
}

#[test]
fn fixture_mixed_blocks() {
    insta::assert_snapshot!(normalize_fixture("mixed_blocks"), @r#"
    0..1 Heading(1) Quarterly Report
    2..3 Paragraph Intro with **bold** text and `inline code`.
    4..5 Heading(2) Results
    5..9 Table 3x3 [Metric|Q1|Q2] [Revenue|10|12] [Margin|3|]
    10..13 List [- first point, - second point, #. numbered]
    14..15 Quote(1) Note: figures are unaudited
    16..19 CodeBlock(python) "print(\"hi\")"
    20..21 Paragraph Closing *remarks*.
    "#);
}

#[test]
fn fixture_embedded_markup() {
    insta::assert_snapshot!(normalize_fixture("embedded_markup"), @r#"
    0..3 Image figures/missing.png missing alt="Architecture"
    3..4 Paragraph <p align="center">Centered caption</p>
    5..9 Table 2x2 [Key|Value] [alpha|1 & 2]
    9..10 Image flow.png missing alt="Flow"
    9..10 Image missing2.png missing alt=""
    10..12 RawFallback "<img src=\"broken.png\""
    ! line 1: image figures/missing.png: file not found at fixture-assets/figures/missing.png
    ! line 10: image flow.png: file not found at fixture-assets/flow.png
    ! line 10: image missing2.png: file not found at fixture-assets/missing2.png
    ! line 11: malformed embedded markup (tag <img> is not closed), kept as raw text
    "#);
}

/// Every source line is either blank or inside exactly one step's span.
#[test]
fn spans_cover_all_content_lines() {
    let md = std::fs::read_to_string(format!(
        "{}/tests/fixtures/mixed_blocks.md",
        env!("CARGO_MANIFEST_DIR")
    ))
    .unwrap();
    let source = SourceText::new(&md);
    let doc = convert_str(&md, ASSET_DIR, &ConvertOptions::default());

    for (i, line) in source.lines().iter().enumerate() {
        let covered = doc
            .blocks
            .iter()
            .any(|b| b.lines.start <= i && i < b.lines.end);
        // the empty heading on line 19 yields a step but no block
        assert!(
            covered || line.trim().is_empty() || i == 19,
            "line {i} ({line:?}) not covered by any block"
        );
    }
}
