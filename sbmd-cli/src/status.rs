//! Human-readable status lines.

use sbmd_babel::{Dialect, Direction};

fn decorate(glyph: &str, message: String, emoji: bool) -> String {
    if emoji {
        format!("{glyph} {message}")
    } else {
        message
    }
}

/// Printed on stdout after the clipboard was converted.
pub fn clipboard_converted(direction: Direction, emoji: bool) -> String {
    decorate(
        "✅",
        format!("{} done! The result is on the clipboard.", direction.label()),
        emoji,
    )
}

/// Printed on stderr when the clipboard is empty.
pub fn clipboard_empty(source: Dialect, emoji: bool) -> String {
    decorate(
        "📋",
        format!("The clipboard is empty. Copy some {} text first.", display_name(source)),
        emoji,
    )
}

/// Printed on stderr when stdin or an input file is empty.
pub fn input_empty(input: Option<&str>, emoji: bool) -> String {
    let what = match input {
        Some(path) => format!("Input file '{path}' is empty."),
        None => "Standard input is empty.".to_string(),
    };
    decorate("📋", format!("{what} Nothing to convert."), emoji)
}

/// Printed on stdout after a conversion was written to a file.
pub fn file_written(direction: Direction, path: &str, emoji: bool) -> String {
    decorate("✅", format!("{} done! Wrote {path}.", direction.label()), emoji)
}

/// Printed on stderr while the clipboard is being held open.
pub fn clipboard_held(emoji: bool) -> String {
    decorate(
        "📌",
        "Keeping the result on the clipboard until something else is copied.".to_string(),
        emoji,
    )
}

fn display_name(dialect: Dialect) -> &'static str {
    match dialect {
        Dialect::Markdown => "Markdown",
        Dialect::Scrapbox => "Scrapbox",
    }
}
