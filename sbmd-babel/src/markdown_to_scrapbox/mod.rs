//! Markdown → Scrapbox conversion
//!
//! A two-state line machine ([`Mode::Normal`] / [`Mode::InCode`]) walks the
//! document. Every line outside a code block is classified and handed to a
//! handler, which strips the block syntax and runs the [`inline`] rules on
//! what remains.
//!
//! # Line Mapping
//!
//! | Markdown            | Scrapbox                 | Notes                                 |
//! |---------------------|--------------------------|---------------------------------------|
//! | ```` ```lang ````   | `code:lang`              | Bare `code:` without a language       |
//! | ```` ``` ```` (end) | blank line               | Scrapbox ends code blocks on a blank  |
//! | `> quote`           | `> quote`                | Inline rules applied to the remainder |
//! | `# h1` .. `###### h6` | `[**** h1]` .. `[* h6]` | Levels 4-6 all become one star       |
//! | `  - item`          | `  item`                 | Marker dropped, indentation kept      |
//!
//! A fence left open at the end of input is not closed.

pub mod inline;

use crate::converter::Converter;
use crate::dialect::Direction;
use crate::line::{split_lines, LineKind, Mode};
use regex::Regex;
use std::sync::LazyLock;

pub use inline::apply_inline;

const FENCE: &str = "```";

/// Matched against the left-trimmed line.
static HEADING_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(#{1,6})\s+(.+)").unwrap());

/// Matched against the raw line so the indentation survives.
static LIST_ITEM_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^(\s*)-\s+(.*)").unwrap());

/// Converter from Markdown to Scrapbox markup.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownToScrapbox;

impl Converter for MarkdownToScrapbox {
    fn name(&self) -> &str {
        "markdown-to-scrapbox"
    }

    fn description(&self) -> &str {
        "Obsidian-flavored Markdown to Scrapbox/Cosense markup"
    }

    fn direction(&self) -> Direction {
        Direction::MarkdownToScrapbox
    }

    fn convert(&self, source: &str) -> String {
        convert_document(source)
    }
}

/// Classify a Markdown line given the current mode.
pub fn classify(line: &str, mode: Mode) -> LineKind {
    if mode == Mode::InCode {
        return if line.trim().starts_with(FENCE) {
            LineKind::CodeFenceEnd
        } else {
            LineKind::CodeBody
        };
    }

    let stripped = line.trim_start();
    if stripped.starts_with(FENCE) {
        LineKind::CodeFenceStart
    } else if stripped.starts_with('>') {
        LineKind::Blockquote
    } else if HEADING_RE.is_match(stripped) {
        LineKind::Heading
    } else if LIST_ITEM_RE.is_match(line) {
        LineKind::ListItem
    } else {
        LineKind::Plain
    }
}

/// Convert a whole Markdown document to Scrapbox markup.
pub fn convert_document(text: &str) -> String {
    let mut mode = Mode::default();
    let mut out = Vec::new();

    for (index, line) in split_lines(text).enumerate() {
        let kind = classify(line, mode);
        tracing::trace!(line = index + 1, ?kind, "classified markdown line");
        out.push(render_line(line, kind));

        let next = kind.next_mode(mode);
        if next != mode {
            tracing::debug!(line = index + 1, from = ?mode, to = ?next, "code block boundary");
        }
        mode = next;
    }

    if mode == Mode::InCode {
        tracing::debug!("input ended inside a code block; leaving it open");
    }

    out.join("\n")
}

fn render_line(line: &str, kind: LineKind) -> String {
    let stripped = line.trim_start();
    match kind {
        LineKind::CodeBody => line.to_string(),
        // Scrapbox closes a code block with a blank line
        LineKind::CodeFenceEnd => String::new(),
        LineKind::CodeFenceStart => {
            let lang = stripped[FENCE.len()..].trim();
            format!("code:{lang}")
        }
        LineKind::Blockquote => format!("> {}", apply_inline(stripped[1..].trim_start())),
        LineKind::Heading => match HEADING_RE.captures(stripped) {
            Some(caps) => format!(
                "[{} {}]",
                heading_stars(caps[1].len()),
                apply_inline(&caps[2])
            ),
            None => apply_inline(line),
        },
        LineKind::ListItem => match LIST_ITEM_RE.captures(line) {
            Some(caps) => format!("{}{}", &caps[1], apply_inline(&caps[2])),
            None => apply_inline(line),
        },
        LineKind::Plain => apply_inline(line),
    }
}

/// Scrapbox heading weight: more stars means a bigger heading.
fn heading_stars(level: usize) -> &'static str {
    match level {
        1 => "****",
        2 => "***",
        3 => "**",
        _ => "*",
    }
}
