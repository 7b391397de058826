//! Clipboard access.
//!
//! The converters only need two operations from a clipboard, captured by
//! [`ClipboardIo`]. [`SystemClipboard`] talks to the desktop clipboard through
//! `arboard`; [`MemoryClipboard`] keeps the text in memory for tests.

use anyhow::{Context, Result};

/// The narrow clipboard contract used by a conversion session.
pub trait ClipboardIo {
    /// Current text contents. An empty or non-text clipboard reads as `""`.
    fn read_text(&mut self) -> Result<String>;

    /// Replace the clipboard contents with `text`.
    fn write_text(&mut self, text: &str) -> Result<()>;

    /// Keep the last written text available after this process exits.
    ///
    /// May block. Clipboards that keep their contents on their own return
    /// at once.
    fn hold(&mut self) -> Result<()> {
        Ok(())
    }
}

/// The desktop clipboard.
///
/// On X11 and Wayland the process owns the selection, so the contents
/// written here vanish on exit unless a clipboard manager copies them.
/// [`ClipboardIo::hold`] keeps serving them until another program takes the
/// clipboard over.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
    last_written: Option<String>,
}

impl SystemClipboard {
    /// Connect to the system clipboard.
    ///
    /// Fails when no clipboard is available (SSH sessions, headless machines).
    pub fn new() -> Result<Self> {
        let inner = arboard::Clipboard::new().context("Clipboard not available")?;
        Ok(Self {
            inner,
            last_written: None,
        })
    }
}

impl ClipboardIo for SystemClipboard {
    fn read_text(&mut self) -> Result<String> {
        match self.inner.get_text() {
            Ok(text) => Ok(text),
            Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
            Err(e) => Err(e).context("Failed to read the clipboard"),
        }
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.inner
            .set_text(text)
            .context("Failed to write the clipboard")?;
        self.last_written = Some(text.to_string());
        Ok(())
    }

    fn hold(&mut self) -> Result<()> {
        match self.last_written.take() {
            Some(text) => hold_selection(&mut self.inner, text),
            None => Ok(()),
        }
    }
}

/// Re-set the selection and block until another program replaces it.
#[cfg(target_os = "linux")]
fn hold_selection(clipboard: &mut arboard::Clipboard, text: String) -> Result<()> {
    use arboard::SetExtLinux;

    tracing::debug!("serving the clipboard until another program replaces it");
    clipboard
        .set()
        .wait()
        .text(text)
        .context("Failed to hold the clipboard")
}

#[cfg(not(target_os = "linux"))]
fn hold_selection(_clipboard: &mut arboard::Clipboard, _text: String) -> Result<()> {
    Ok(())
}

/// A clipboard that lives in memory and counts writes and holds.
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    pub contents: String,
    pub writes: usize,
    pub holds: usize,
}

impl MemoryClipboard {
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: text.into(),
            ..Self::default()
        }
    }
}

impl ClipboardIo for MemoryClipboard {
    fn read_text(&mut self) -> Result<String> {
        Ok(self.contents.clone())
    }

    fn write_text(&mut self, text: &str) -> Result<()> {
        self.contents = text.to_string();
        self.writes += 1;
        Ok(())
    }

    fn hold(&mut self) -> Result<()> {
        self.holds += 1;
        Ok(())
    }
}
