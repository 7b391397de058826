//! Converter trait definition
//!
//! A converter rewrites a whole document from one dialect into the other.
//! Conversion is pure and infallible: anything a converter does not
//! recognise is passed through unchanged.

use crate::dialect::{Dialect, Direction};

/// Trait for document converters
///
/// # Examples
///
/// ```ignore
/// struct Shout;
///
/// impl Converter for Shout {
///     fn name(&self) -> &str {
///         "shout"
///     }
///
///     fn direction(&self) -> Direction {
///         Direction::MarkdownToScrapbox
///     }
///
///     fn convert(&self, source: &str) -> String {
///         source.to_uppercase()
///     }
/// }
/// ```
pub trait Converter: Send + Sync {
    /// The name of this converter (e.g., "markdown-to-scrapbox")
    fn name(&self) -> &str;

    /// Optional description of this converter
    fn description(&self) -> &str {
        ""
    }

    /// Which way this converter goes
    fn direction(&self) -> Direction;

    fn source(&self) -> Dialect {
        self.direction().source()
    }

    fn target(&self) -> Dialect {
        self.direction().target()
    }

    /// Convert a whole document
    fn convert(&self, source: &str) -> String;
}
