use thiserror::Error;

use crate::parsing::cursor::Cursor;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FragmentError {
    #[error("tag <{name}> is not closed")]
    UnclosedTag { name: String },
    #[error("attribute {attr:?} of <{name}> has an unterminated value")]
    UnterminatedAttribute { name: String, attr: String },
    #[error("comment is not closed")]
    UnclosedComment,
}

/// One lexical unit of an embedded markup fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'a> {
    Start {
        /// Lowercased tag name.
        name: String,
        /// Attribute names lowercased; values raw (entities not yet decoded).
        attrs: Vec<(String, &'a str)>,
        self_closing: bool,
    },
    End {
        name: String,
    },
    Text(&'a str),
}

impl Token<'_> {
    pub fn attr(&self, key: &str) -> Option<&str> {
        match self {
            Token::Start { attrs, .. } => attrs
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| *v),
            _ => None,
        }
    }
}

const OPEN: u8 = b'<';
const CLOSE: u8 = b'>';
const COMMENT_OPEN: &[u8] = b"<!--";
const COMMENT_CLOSE: &[u8] = b"-->";

fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b':' || b == b'_'
}

/// Splits fragment text into tags and text.
///
/// A `<` not followed by a tag name, `/`, or `!` is ordinary text. Comments,
/// doctypes and processing instructions are dropped.
pub fn tokenize(s: &str) -> Result<Vec<Token<'_>>, FragmentError> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    fn flush_text<'a>(out: &mut Vec<Token<'a>>, s: &'a str, start: usize, end: usize) {
        if end > start {
            out.push(Token::Text(&s[start..end]));
        }
    }

    while !cur.eof() {
        if cur.peek() != Some(OPEN) {
            cur.bump();
            continue;
        }

        let tag_start = cur.pos();
        let token = match cur.peek_at(1) {
            Some(b) if b.is_ascii_alphabetic() => Some(lex_start_tag(&mut cur)?),
            Some(b'/') if cur.peek_at(2).is_some_and(|b| b.is_ascii_alphabetic()) => {
                Some(lex_end_tag(&mut cur)?)
            }
            Some(b'!') | Some(b'?') => {
                skip_markup_declaration(&mut cur)?;
                None
            }
            _ => {
                cur.bump();
                continue;
            }
        };

        flush_text(&mut out, s, text_start, tag_start);
        out.extend(token);
        text_start = cur.pos();
    }

    flush_text(&mut out, s, text_start, cur.pos());
    Ok(out)
}

fn lex_name(cur: &mut Cursor<'_>) -> String {
    let start = cur.pos();
    cur.eat_while(is_name_byte);
    cur.slice_from(start).to_ascii_lowercase()
}

fn lex_start_tag<'a>(cur: &mut Cursor<'a>) -> Result<Token<'a>, FragmentError> {
    cur.bump(); // <
    let name = lex_name(cur);
    let mut attrs = vec![];

    loop {
        cur.eat_while(|b| b.is_ascii_whitespace());
        match cur.peek() {
            None => return Err(FragmentError::UnclosedTag { name }),
            Some(CLOSE) => {
                cur.bump();
                return Ok(Token::Start {
                    name,
                    attrs,
                    self_closing: false,
                });
            }
            Some(b'/') if cur.peek_at(1) == Some(CLOSE) => {
                cur.bump_n(2);
                return Ok(Token::Start {
                    name,
                    attrs,
                    self_closing: true,
                });
            }
            Some(_) => {}
        }

        let key_start = cur.pos();
        cur.eat_while(|b| !b.is_ascii_whitespace() && !matches!(b, b'=' | CLOSE | b'/'));
        let key = cur.slice_from(key_start).to_ascii_lowercase();
        if key.is_empty() {
            // stray `/` or `=`
            cur.bump();
            continue;
        }

        cur.eat_while(|b| b.is_ascii_whitespace());
        if cur.peek() != Some(b'=') {
            attrs.push((key, ""));
            continue;
        }
        cur.bump(); // =
        cur.eat_while(|b| b.is_ascii_whitespace());

        let value = match cur.peek() {
            Some(q @ (b'"' | b'\'')) => {
                cur.bump();
                let Some(end) = cur.find(&[q]) else {
                    return Err(FragmentError::UnterminatedAttribute { name, attr: key });
                };
                let value = &cur.s[cur.pos()..end];
                cur.i = end + 1;
                value
            }
            _ => {
                let value_start = cur.pos();
                cur.eat_while(|b| !b.is_ascii_whitespace() && b != CLOSE);
                let mut value = cur.slice_from(value_start);
                // `width=50%/>` leaves the self-closing slash on the value
                if let Some(v) = value.strip_suffix('/')
                    && cur.peek() == Some(CLOSE)
                {
                    cur.i -= 1;
                    value = v;
                }
                value
            }
        };
        attrs.push((key, value));
    }
}

fn lex_end_tag<'a>(cur: &mut Cursor<'a>) -> Result<Token<'a>, FragmentError> {
    cur.bump_n(2); // </
    let name = lex_name(cur);
    match cur.find(&[CLOSE]) {
        Some(end) => {
            cur.i = end + 1;
            Ok(Token::End { name })
        }
        None => Err(FragmentError::UnclosedTag { name }),
    }
}

fn skip_markup_declaration(cur: &mut Cursor<'_>) -> Result<(), FragmentError> {
    if cur.starts_with(COMMENT_OPEN) {
        let end = cur.find(COMMENT_CLOSE).ok_or(FragmentError::UnclosedComment)?;
        cur.i = end + COMMENT_CLOSE.len();
        return Ok(());
    }
    match cur.find(&[CLOSE]) {
        Some(end) => {
            cur.i = end + 1;
            Ok(())
        }
        None => Err(FragmentError::UnclosedTag {
            name: "!".to_string(),
        }),
    }
}
