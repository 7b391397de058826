//! Inline rules for Markdown → Scrapbox
//!
//! Each rule is a single left-to-right, non-overlapping substitution over
//! the whole segment. Rules run in a fixed order and later rules must leave
//! the brackets written by earlier ones alone.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// `$formula$`, no `$` inside
static MATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$([^$]+)\$").unwrap());

/// `[label](http(s)://...)`
static EXTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]+?)\]\((https?://[^)]+?)\)").unwrap());

/// `[[Page]]`
static INTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+?)\]\]").unwrap());

static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());

static STRIKETHROUGH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"~~(.+?)~~").unwrap());

type Rule = fn(&str) -> Cow<'_, str>;

/// Rules in application order.
const RULES: [(&str, Rule); 6] = [
    ("math", math),
    ("external-link", external_link),
    ("internal-link", internal_link),
    ("bold", bold),
    ("italic", italic),
    ("strikethrough", strikethrough),
];

/// Rewrite the Markdown inline markup of one line segment as Scrapbox markup.
///
/// Block structure (quote markers, heading hashes, list markers) must be
/// stripped by the caller. Not idempotent.
pub fn apply_inline(text: &str) -> String {
    RULES.iter().fold(text.to_string(), |acc, (name, rule)| {
        let rewritten = match rule(&acc) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        match rewritten {
            Some(s) => {
                tracing::trace!(rule = *name, "inline rule matched");
                s
            }
            None => acc,
        }
    })
}

fn math(text: &str) -> Cow<'_, str> {
    MATH_RE.replace_all(text, |caps: &Captures| format!("[$ {} ]", &caps[1]))
}

fn external_link(text: &str) -> Cow<'_, str> {
    EXTERNAL_LINK_RE.replace_all(text, |caps: &Captures| format!("[{} {}]", &caps[2], &caps[1]))
}

fn internal_link(text: &str) -> Cow<'_, str> {
    INTERNAL_LINK_RE.replace_all(text, |caps: &Captures| format!("[{}]", &caps[1]))
}

fn bold(text: &str) -> Cow<'_, str> {
    BOLD_RE.replace_all(text, |caps: &Captures| format!("[* {}]", &caps[1]))
}

fn strikethrough(text: &str) -> Cow<'_, str> {
    STRIKETHROUGH_RE.replace_all(text, |caps: &Captures| format!("[- {}]", &caps[1]))
}

/// `*text*` where neither delimiter touches another `*`.
///
/// The `regex` crate has no lookaround, so delimiters are found by scanning:
/// every lone `*` is a candidate, and candidates pair up left to right. The
/// `*` of a `[* ` bold marker is not a candidate.
fn italic(text: &str) -> Cow<'_, str> {
    let bytes = text.as_bytes();
    let candidates: Vec<usize> = (0..bytes.len())
        .filter(|&i| bytes[i] == b'*' && is_lone_star(bytes, i) && !is_bold_marker(bytes, i))
        .collect();

    if candidates.len() < 2 {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() + candidates.len() * 2);
    let mut last = 0;
    for pair in candidates.chunks_exact(2) {
        let (open, close) = (pair[0], pair[1]);
        out.push_str(&text[last..open]);
        out.push_str("[/ ");
        out.push_str(&text[open + 1..close]);
        out.push(']');
        last = close + 1;
    }
    out.push_str(&text[last..]);
    Cow::Owned(out)
}

fn is_lone_star(bytes: &[u8], i: usize) -> bool {
    let before = i.checked_sub(1).map(|j| bytes[j]);
    let after = bytes.get(i + 1).copied();
    before != Some(b'*') && after != Some(b'*')
}

fn is_bold_marker(bytes: &[u8], i: usize) -> bool {
    i > 0 && bytes[i - 1] == b'[' && bytes.get(i + 1) == Some(&b' ')
}
