//! Token classification for word navigation
//!
//! Every byte of the text falls into one [`Group`]. Word motion walks across
//! runs of the same group, so a run of punctuation or a run of blanks is
//! skipped as a single unit.

/// Token group of the character at a byte position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// Position outside the text
    None,
    /// A plain space
    Space,
    /// A line feed
    Newline,
    /// Punctuation, symbols and tab
    Token,
    /// Anything else (letters, digits, non-ASCII bytes)
    Normal,
}

/// Bytes classified as [`Group::Token`]
pub const TOKEN_BYTES: &[u8] = &[
    b'[', b']', b'|', b'(', b')', b'{', b'}', b';', b'.', b'!', b'@', b'#', b'$', b'%', b'^',
    b'&', b'*', b'-', b'=', b'+', b':', b'\'', b'<', b'>', b'?', b'\\', b'/', b',', b'`', b'~',
    b'\t',
];

/// Check if a byte is a punctuation/symbol token
#[inline]
pub fn is_token_byte(byte: u8) -> bool {
    TOKEN_BYTES.contains(&byte)
}

/// Classify a single byte
pub fn group_of(byte: u8) -> Group {
    match byte {
        b' ' => Group::Space,
        b'\n' => Group::Newline,
        b if is_token_byte(b) => Group::Token,
        _ => Group::Normal,
    }
}

/// Group of the byte at `pos`, or [`Group::None`] outside `[0, text.len())`.
///
/// Takes a signed position so callers can look one byte before the start.
pub fn group_at(text: &str, pos: isize) -> Group {
    if pos < 0 {
        return Group::None;
    }
    match text.as_bytes().get(pos as usize) {
        Some(&b) => group_of(b),
        None => Group::None,
    }
}

/// Snap a byte offset down to the nearest char boundary, clamped to the text length
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Snap a byte offset up to the nearest char boundary, clamped to the text length
pub fn ceil_char_boundary(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset += 1;
    }
    offset
}

/// Byte offset of the char boundary before `offset` (0 at the start)
pub fn prev_char_boundary(text: &str, offset: usize) -> usize {
    if offset == 0 {
        return 0;
    }
    floor_char_boundary(text, offset - 1)
}

/// Byte offset of the char boundary after `offset` (text length at the end)
pub fn next_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    ceil_char_boundary(text, offset + 1)
}
