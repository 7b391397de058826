//! Conversion between Obsidian-flavored Markdown and Scrapbox/Cosense markup
//!
//!     This crate rewrites a plain-text document from one markup dialect into the other. There is
//!     no syntax tree: each converter walks the document line by line, decides what kind of line
//!     it is looking at, and rewrites inline markup with an ordered list of pattern rules.
//!
//!     This is a pure lib, it powers the sbmd cli but is shell agnostic: nothing in here reads the
//!     clipboard, prints, or looks at the environment.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── dialect.rs              # Dialect and Direction
//!     ├── converter.rs            # Converter trait definition
//!     ├── registry.rs             # ConverterRegistry for lookup by dialect names
//!     ├── line.rs                 # Mode and LineKind, shared by both directions
//!     ├── markdown_to_scrapbox
//!     │   ├── inline.rs           # Inline rule pipeline
//!     │   └── mod.rs              # Line classifier and dispatcher
//!     ├── scrapbox_to_markdown
//!     │   ├── inline.rs
//!     │   └── mod.rs
//!     └── lib.rs
//!
//! Core Algorithm
//!
//!     The only state carried across lines is the [`line::Mode`]: inside a code block or not.
//!     Code bodies are copied verbatim. Every other line is classified (quote, heading, list item,
//!     plain), the block syntax is rewritten by the line handler, and the remaining text goes
//!     through the inline rules of that direction.
//!
//!     Inline rules run in a fixed order, each one a single non-overlapping pass over the text.
//!     Spans do not nest; overlaps are settled by rule order alone.
//!
//! Lossy Conversions
//!
//!     Round-tripping is not the identity:
//!     - Markdown list markers are dropped, and on the way back every Scrapbox line becomes a
//!       bullet, paragraphs included.
//!     - Heading levels 4 to 6 all map to a single star.
//!     - `code:python` has no file extension, so the fence comes back without a language.
//!
//!     Converting already converted text again is not safe either.

pub mod converter;
pub mod dialect;
pub mod error;
pub mod line;
pub mod markdown_to_scrapbox;
pub mod registry;
pub mod scrapbox_to_markdown;

pub use converter::Converter;
pub use dialect::{Dialect, Direction};
pub use error::BabelError;
pub use registry::ConverterRegistry;

/// Convert a whole document in the given direction.
///
/// Lines are split on `\n`, `\r\n` or a lone `\r` and joined with `\n`; the
/// result has no trailing newline.
pub fn convert(text: &str, direction: Direction) -> String {
    match direction {
        Direction::MarkdownToScrapbox => markdown_to_scrapbox::convert_document(text),
        Direction::ScrapboxToMarkdown => scrapbox_to_markdown::convert_document(text),
    }
}
