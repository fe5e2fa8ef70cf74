use crate::model::Run;
use crate::parsing::cursor::Cursor;

use super::kinds::{CodeSpan, Emphasis, Strong};

/// Splits one line of text into styled [`Run`]s.
///
/// Scanning is left to right. At each position the span kinds are tried in
/// order (bold, italic, code); the first one that closes wins and the scan
/// resumes after its closing marker, so spans never overlap and `**` is
/// preferred over two adjacent `*` spans.
///
/// A span needs non-empty inner text and a closing marker. Markers that do
/// not form a span stay in the surrounding plain run, so re-applying each
/// run's markers reproduces `s` exactly.
pub fn format_runs(s: &str) -> Vec<Run> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<Run>, s: &str, start: usize, end: usize) {
        if end > start {
            out.push(Run::plain(&s[start..end]));
        }
    }

    while !cur.eof() {
        let start = cur.pos();
        let span = try_delimited(&mut cur, Strong::MARKER)
            .map(Run::bold)
            .or_else(|| try_delimited(&mut cur, Emphasis::MARKER).map(Run::italic))
            .or_else(|| try_delimited(&mut cur, CodeSpan::TICK).map(Run::code));

        match span {
            Some(run) => {
                flush_text(&mut out, s, text_start, start);
                out.push(run);
                text_start = cur.pos();
            }
            None => {
                cur.bump();
            }
        }
    }

    flush_text(&mut out, s, text_start, cur.pos());
    out
}

/// Attempts to parse `marker inner marker` at the current position.
///
/// On success the cursor is left after the closing marker and the inner
/// text is returned. On failure the cursor does not move.
fn try_delimited<'a>(cur: &mut Cursor<'a>, marker: &[u8]) -> Option<&'a str> {
    if !cur.starts_with(marker) {
        return None;
    }

    let mut probe = cur.clone();
    probe.bump_n(marker.len());
    let inner_start = probe.pos();
    let close = probe.find(marker)?;
    if close == inner_start {
        return None;
    }

    cur.i = close + marker.len();
    Some(&cur.s[inner_start..close])
}
