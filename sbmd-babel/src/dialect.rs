//! Dialect and direction definitions
//!
//! The two plain-text markup dialects handled by this crate, and the
//! direction of a conversion between them.

use crate::error::BabelError;
use std::fmt;
use std::str::FromStr;

/// A markup dialect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// Obsidian-flavored Markdown
    Markdown,
    /// Scrapbox / Cosense wiki markup
    Scrapbox,
}

impl Dialect {
    pub const ALL: [Dialect; 2] = [Dialect::Markdown, Dialect::Scrapbox];

    /// Canonical name, as used on the command line and in the registry.
    pub fn name(self) -> &'static str {
        match self {
            Dialect::Markdown => "markdown",
            Dialect::Scrapbox => "scrapbox",
        }
    }

    /// File extensions associated with this dialect, without the leading dot.
    pub fn file_extensions(self) -> &'static [&'static str] {
        match self {
            Dialect::Markdown => &["md", "markdown"],
            Dialect::Scrapbox => &["sb", "scrapbox", "cosense"],
        }
    }

    /// Resolve a dialect from its name or one of its short aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Some(Dialect::Markdown),
            "scrapbox" | "sb" | "cosense" => Some(Dialect::Scrapbox),
            _ => None,
        }
    }

    /// Resolve a dialect from a file extension (case-sensitive).
    pub fn from_extension(extension: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|dialect| dialect.file_extensions().contains(&extension))
    }

    /// The other dialect.
    pub fn counterpart(self) -> Self {
        match self {
            Dialect::Markdown => Dialect::Scrapbox,
            Dialect::Scrapbox => Dialect::Markdown,
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Dialect {
    type Err = BabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dialect::from_name(s).ok_or_else(|| BabelError::UnknownDialect(s.to_string()))
    }
}

/// Direction of a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    MarkdownToScrapbox,
    ScrapboxToMarkdown,
}

impl Direction {
    /// Build a direction from a source and target dialect.
    ///
    /// Returns `None` when both are the same dialect.
    pub fn from_dialects(from: Dialect, to: Dialect) -> Option<Self> {
        match (from, to) {
            (Dialect::Markdown, Dialect::Scrapbox) => Some(Direction::MarkdownToScrapbox),
            (Dialect::Scrapbox, Dialect::Markdown) => Some(Direction::ScrapboxToMarkdown),
            _ => None,
        }
    }

    pub fn source(self) -> Dialect {
        match self {
            Direction::MarkdownToScrapbox => Dialect::Markdown,
            Direction::ScrapboxToMarkdown => Dialect::Scrapbox,
        }
    }

    pub fn target(self) -> Dialect {
        self.source().counterpart()
    }

    pub fn reverse(self) -> Self {
        match self {
            Direction::MarkdownToScrapbox => Direction::ScrapboxToMarkdown,
            Direction::ScrapboxToMarkdown => Direction::MarkdownToScrapbox,
        }
    }

    /// Human-readable label, e.g. "Markdown → Scrapbox".
    pub fn label(self) -> &'static str {
        match self {
            Direction::MarkdownToScrapbox => "Markdown → Scrapbox",
            Direction::ScrapboxToMarkdown => "Scrapbox → Markdown",
        }
    }
}
