//! Line classification shared by both converters
//!
//! Conversion is line oriented. Each line is classified into exactly one
//! [`LineKind`] given the current [`Mode`], and the mode is the only state
//! carried from one line to the next.

/// Whether the converter is currently inside a code block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    InCode,
}

/// The structural kind of a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    CodeFenceStart,
    CodeBody,
    CodeFenceEnd,
    Blockquote,
    Heading,
    ListItem,
    Plain,
}

impl LineKind {
    /// The mode in effect after a line of this kind has been handled.
    pub fn next_mode(self, current: Mode) -> Mode {
        match self {
            LineKind::CodeFenceStart => Mode::InCode,
            LineKind::CodeFenceEnd => Mode::Normal,
            _ => current,
        }
    }
}

/// Split a document into lines.
///
/// Accepts `\n`, `\r\n` and a lone `\r` as terminators; a trailing
/// terminator does not yield an empty final line.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(text).filter(|t| !t.is_empty());
    std::iter::from_fn(move || {
        let current = rest?;
        match current.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let width = if current[end..].starts_with("\r\n") { 2 } else { 1 };
                let tail = &current[end + width..];
                rest = Some(tail).filter(|t| !t.is_empty());
                Some(&current[..end])
            }
            None => {
                rest = None;
                Some(current)
            }
        }
    })
}
