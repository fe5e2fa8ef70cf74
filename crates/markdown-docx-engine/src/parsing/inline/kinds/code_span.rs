/// Code span inline type with owned delimiter constant.
///
/// Code spans are "raw zones": emphasis markers inside them are literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick that opens and closes a code span.
    pub const TICK: &'static [u8] = b"`";
}
