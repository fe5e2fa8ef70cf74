// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_markdown_content(size: usize) -> String {
    let base = "# Title\n\n## Section\n\nParagraph with **bold**, *italic* and `code`.\n\n- Bullet point\n- Another item\n1. Numbered\n\n| a | b |\n|---|---|\n| 1 | 2 |\n\n> A quote\n\n```rust\nfn example() {\n    println!(\"Hello\");\n}\n```\n\n";
    base.repeat(size)
}

/// Documents dominated by embedded markup and image references; images point
/// at files that do not exist so the probe stays cheap.
#[allow(dead_code)]
pub fn generate_fragment_heavy(size: usize) -> String {
    let base = "<div align=\"center\">\n<img src=\"missing.png\" alt=\"Figure\" width=\"60%\"/>\n</div>\n\n<table>\n<tr><th>Name</th><th>Value</th></tr>\n<tr><td>x</td><td>1 &amp; 2</td></tr>\n</table>\n\n![Chart](missing-chart.png)\n\n";
    base.repeat(size)
}
