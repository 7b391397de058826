//! One conversion, from reading the input to writing the result.
//!
//! Input is read completely before converting and output is written only
//! after the conversion has finished. Empty input is reported back to the
//! caller instead of being converted, and nothing is written in that case.

use crate::clipboard::ClipboardIo;
use anyhow::{Context, Result};
use sbmd_babel::{convert, Direction};
use std::fs;
use std::io::{self, Read};

/// Process exit code when there is nothing to convert.
pub const EXIT_EMPTY_INPUT: i32 = 1;
/// Process exit code for an invalid invocation: unknown dialect or command, bad config.
pub const EXIT_USAGE: i32 = 1;
/// Process exit code when the clipboard or a file cannot be read or written.
pub const EXIT_IO_ERROR: i32 = 2;

/// What a session did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The input was converted and written back.
    Converted { direction: Direction, bytes: usize },
    /// The input was empty; nothing was written.
    EmptyInput,
}

/// Convert the clipboard contents in place.
pub fn run_clipboard_session<C>(clipboard: &mut C, direction: Direction) -> Result<SessionOutcome>
where
    C: ClipboardIo + ?Sized,
{
    let original = clipboard.read_text()?;
    if original.is_empty() {
        tracing::debug!("clipboard is empty");
        return Ok(SessionOutcome::EmptyInput);
    }

    let converted = convert(&original, direction);
    tracing::debug!(
        ?direction,
        input_bytes = original.len(),
        output_bytes = converted.len(),
        "converted clipboard contents"
    );
    clipboard.write_text(&converted)?;

    Ok(SessionOutcome::Converted {
        direction,
        bytes: converted.len(),
    })
}

/// Keep converted clipboard contents alive after a successful session.
///
/// Returns whether the clipboard was held. Nothing is held after empty input
/// or when holding is switched off.
pub fn hold_clipboard<C>(
    clipboard: &mut C,
    outcome: &SessionOutcome,
    enabled: bool,
) -> Result<bool>
where
    C: ClipboardIo + ?Sized,
{
    if !enabled || *outcome == SessionOutcome::EmptyInput {
        return Ok(false);
    }
    clipboard.hold()?;
    Ok(true)
}

/// Where text is read from or written to outside the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stream {
    Std,
    File(String),
}

impl Stream {
    /// `None` and `-` mean the standard stream.
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            None | Some("-") => Stream::Std,
            Some(path) => Stream::File(path.to_string()),
        }
    }

    pub fn path(&self) -> Option<&str> {
        match self {
            Stream::Std => None,
            Stream::File(path) => Some(path.as_str()),
        }
    }

    /// Read the whole stream into memory.
    pub fn read_to_string(&self) -> Result<String> {
        match self {
            Stream::Std => {
                let mut text = String::new();
                io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read stdin")?;
                Ok(text)
            }
            Stream::File(path) => {
                fs::read_to_string(path).with_context(|| format!("Error reading file '{path}'"))
            }
        }
    }

    /// Write `text` to the stream.
    pub fn write(&self, text: &str) -> Result<()> {
        match self {
            Stream::Std => {
                print!("{text}");
                Ok(())
            }
            Stream::File(path) => {
                fs::write(path, text).with_context(|| format!("Error writing file '{path}'"))
            }
        }
    }
}

/// Apply the output policy to converted text.
pub fn finish_output(mut converted: String, trailing_newline: bool) -> String {
    if trailing_newline && !converted.is_empty() {
        converted.push('\n');
    }
    converted
}
