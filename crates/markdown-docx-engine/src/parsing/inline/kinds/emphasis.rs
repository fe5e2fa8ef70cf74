/// Bold span: `**text**`.
pub struct Strong;

impl Strong {
    pub const MARKER: &'static [u8] = b"**";
}

/// Italic span: `*text*`.
pub struct Emphasis;

impl Emphasis {
    pub const MARKER: &'static [u8] = b"*";
}
