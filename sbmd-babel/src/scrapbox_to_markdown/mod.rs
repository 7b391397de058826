//! Scrapbox → Markdown conversion
//!
//! Mirrors the Markdown → Scrapbox machine with Scrapbox block syntax on the
//! input side.
//!
//! # Line Mapping
//!
//! | Scrapbox           | Markdown             | Notes                                         |
//! |--------------------|----------------------|-----------------------------------------------|
//! | `code:a.py`        | ```` ```py ````      | Language is the text after the last `.`       |
//! | blank line in code | ```` ``` ````        | Also emitted at end of input if still open    |
//! | `> quote`          | `> quote`            | Inline rules applied to the remainder         |
//! | `[**** h]`         | `# h`                | Level is `5 - stars`, clamped to 1..=6        |
//! | `[** h] rest`      | `### h rest`         | Text after the bracket follows the heading    |
//! | anything else      | `- text`             | Two columns of indentation per nesting level  |
//!
//! Scrapbox has no body text outside of bullets, so every remaining line,
//! blank lines and plain paragraphs included, becomes a list item.

pub mod inline;

use crate::converter::Converter;
use crate::dialect::Direction;
use crate::line::{split_lines, LineKind, Mode};
use regex::Regex;
use std::sync::LazyLock;

pub use inline::apply_inline;

const CODE_PREFIX: &str = "code:";
const FENCE: &str = "```";

/// Matched at the start of the left-trimmed line.
static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(\*{1,6})\s+([^\]]+?)\]").unwrap());

/// Converter from Scrapbox markup to Markdown.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScrapboxToMarkdown;

impl Converter for ScrapboxToMarkdown {
    fn name(&self) -> &str {
        "scrapbox-to-markdown"
    }

    fn description(&self) -> &str {
        "Scrapbox/Cosense markup to Obsidian-flavored Markdown"
    }

    fn direction(&self) -> Direction {
        Direction::ScrapboxToMarkdown
    }

    fn convert(&self, source: &str) -> String {
        convert_document(source)
    }
}

/// Classify a Scrapbox line given the current mode.
///
/// Outside a code block there is no plain kind: the fallthrough is a list item.
pub fn classify(line: &str, mode: Mode) -> LineKind {
    if mode == Mode::InCode {
        return if line.trim().is_empty() {
            LineKind::CodeFenceEnd
        } else {
            LineKind::CodeBody
        };
    }

    let stripped = line.trim_start();
    if stripped.starts_with(CODE_PREFIX) {
        LineKind::CodeFenceStart
    } else if stripped.starts_with('>') {
        LineKind::Blockquote
    } else if HEADING_RE.is_match(stripped) {
        LineKind::Heading
    } else {
        LineKind::ListItem
    }
}

/// Convert a whole Scrapbox page to Markdown.
pub fn convert_document(text: &str) -> String {
    let mut mode = Mode::default();
    let mut out = Vec::new();

    for (index, line) in split_lines(text).enumerate() {
        let kind = classify(line, mode);
        tracing::trace!(line = index + 1, ?kind, "classified scrapbox line");
        out.push(render_line(line, kind));

        let next = kind.next_mode(mode);
        if next != mode {
            tracing::debug!(line = index + 1, from = ?mode, to = ?next, "code block boundary");
        }
        mode = next;
    }

    if mode == Mode::InCode {
        tracing::debug!("input ended inside a code block; closing it");
        out.push(FENCE.to_string());
    }

    out.join("\n")
}

fn render_line(line: &str, kind: LineKind) -> String {
    let stripped = line.trim_start();
    match kind {
        LineKind::CodeBody => line.to_string(),
        LineKind::CodeFenceEnd => FENCE.to_string(),
        LineKind::CodeFenceStart => {
            let filename = stripped[CODE_PREFIX.len()..].trim();
            format!("{}{}", FENCE, fence_language(filename))
        }
        LineKind::Blockquote => format!("> {}", apply_inline(stripped[1..].trim_start())),
        LineKind::Heading => match HEADING_RE.captures(stripped) {
            Some(caps) => {
                let hashes = "#".repeat(heading_level(caps[1].len()));
                let rest = stripped[caps[0].len()..].trim_end();
                format!("{} {}{}", hashes, apply_inline(&caps[2]), apply_inline(rest))
            }
            None => list_item(line, stripped),
        },
        LineKind::ListItem | LineKind::Plain => list_item(line, stripped),
    }
}

fn list_item(line: &str, stripped: &str) -> String {
    let indent = line[..line.len() - stripped.len()].chars().count();
    format!("{}- {}", "  ".repeat(indent / 2), apply_inline(stripped))
}

/// `a.py` → `py`, `main.rs.bak` → `bak`, `python` → ``
fn fence_language(filename: &str) -> &str {
    match filename.rsplit_once('.') {
        Some((_, ext)) => ext,
        None => "",
    }
}

/// Four stars is the biggest Scrapbox heading and maps to `#`.
fn heading_level(stars: usize) -> usize {
    (5 - stars as i64).clamp(1, 6) as usize
}
