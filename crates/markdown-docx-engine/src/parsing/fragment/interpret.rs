use std::borrow::Cow;

use html_escape::decode_html_entities;

use super::lexer::Token;

/// Something recognized inside a fragment, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentItem {
    Image {
        src: String,
        alt: String,
        width: Option<String>,
    },
    /// Ragged rows of trimmed cell text, straight from `<tr>`/`<td>`/`<th>`.
    Table(Vec<Vec<String>>),
}

/// The structured reading of one fragment.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Interpretation {
    pub items: Vec<FragmentItem>,
    /// All text content, entities decoded, trimmed.
    pub text: String,
    /// Whether any `<img>` tag appeared, with or without a usable `src`.
    pub saw_image: bool,
    pub saw_table: bool,
    /// Container elements still open at the end of the fragment, outermost first.
    pub unclosed: Vec<String>,
}

/// Elements whose nesting is tracked to detect unterminated fragments.
const CONTAINERS: [&str; 3] = ["div", "table", "p"];

#[derive(Default)]
struct TableState {
    rows: Vec<Vec<String>>,
    row: Option<Vec<String>>,
    cell: Option<String>,
    /// Depth of tables nested inside a cell; their markup is flattened.
    nested: usize,
}

impl TableState {
    fn finish_cell(&mut self) {
        if let Some(cell) = self.cell.take() {
            self.row
                .get_or_insert_with(Vec::new)
                .push(cell.trim().to_string());
        }
    }

    fn finish_row(&mut self) {
        self.finish_cell();
        if let Some(row) = self.row.take() {
            self.rows.push(row);
        }
    }

    fn finish(mut self) -> Vec<Vec<String>> {
        self.finish_row();
        self.rows
    }
}

fn decode(s: &str) -> Cow<'_, str> {
    decode_html_entities(s)
}

/// Walks fragment tokens, collecting images and tables in order.
///
/// This is a deliberately small grammar: it knows `img`, `table`, `tr`,
/// `td`/`th` and the container elements; every other tag only contributes
/// its text.
pub fn interpret(tokens: &[Token<'_>]) -> Interpretation {
    let mut out = Interpretation::default();
    let mut text = String::new();
    let mut table: Option<TableState> = None;
    let mut open: Vec<String> = vec![];

    for token in tokens {
        match token {
            Token::Text(t) => {
                let t = decode(t);
                text.push_str(&t);
                if let Some(cell) = table.as_mut().and_then(|tb| tb.cell.as_mut()) {
                    cell.push_str(&t);
                }
            }
            Token::Start {
                name, self_closing, ..
            } => {
                if CONTAINERS.contains(&name.as_str()) && !self_closing {
                    open.push(name.clone());
                }
                match name.as_str() {
                    "img" => {
                        out.saw_image = true;
                        let src = token.attr("src").map(|s| decode(s).trim().to_string());
                        if let Some(src) = src.filter(|s| !s.is_empty()) {
                            out.items.push(FragmentItem::Image {
                                src,
                                alt: token.attr("alt").map(|a| decode(a).trim().to_string()).unwrap_or_default(),
                                width: token.attr("width").map(|w| decode(w).trim().to_string()),
                            });
                        }
                    }
                    "table" => {
                        out.saw_table = true;
                        match table.as_mut() {
                            Some(tb) => tb.nested += 1,
                            None => table = Some(TableState::default()),
                        }
                    }
                    "tr" => {
                        if let Some(tb) = table.as_mut().filter(|tb| tb.nested == 0) {
                            tb.finish_row();
                            tb.row = Some(vec![]);
                        }
                    }
                    "td" | "th" => {
                        if let Some(tb) = table.as_mut().filter(|tb| tb.nested == 0) {
                            tb.finish_cell();
                            tb.cell = Some(String::new());
                        }
                    }
                    _ => {}
                }
            }
            Token::End { name } => {
                if let Some(idx) = open.iter().rposition(|n| n == name) {
                    open.truncate(idx);
                }
                match name.as_str() {
                    "td" | "th" => {
                        if let Some(tb) = table.as_mut().filter(|tb| tb.nested == 0) {
                            tb.finish_cell();
                        }
                    }
                    "tr" => {
                        if let Some(tb) = table.as_mut().filter(|tb| tb.nested == 0) {
                            tb.finish_row();
                        }
                    }
                    "table" => match table.take() {
                        Some(mut tb) if tb.nested > 0 => {
                            tb.nested -= 1;
                            table = Some(tb);
                        }
                        Some(tb) => out.items.push(FragmentItem::Table(tb.finish())),
                        None => {}
                    },
                    _ => {}
                }
            }
        }
    }

    // tolerate a table whose closing tag never came
    if let Some(tb) = table {
        out.items.push(FragmentItem::Table(tb.finish()));
    }

    out.text = text.trim().to_string();
    out.unclosed = open;
    out
}
