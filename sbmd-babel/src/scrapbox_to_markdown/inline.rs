//! Inline rules for Scrapbox → Markdown
//!
//! Decorations (`[$ ]`, `[* ]`, `[[ ]]`, `[/ ]`, `[- ]`) are rewritten first.
//! Whatever brackets remain are links: a two-token bracket is an external
//! link when either token is a URL, anything else is a page link. Both link
//! forms are handled by one scan so that the `[label](url)` and `[[Page]]`
//! output is never scanned again.

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// `[$ formula ]`
static MATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\$ ([^\]]+?) \]").unwrap());

/// `[* text]`
static BOLD_STAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[\* ([^\]]+?)\]").unwrap());

/// `[[text]]`, inner whitespace trimmed
static BOLD_DOUBLE_BRACKET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[\s*([^\]\n]+?)\s*\]\]").unwrap());

static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[/ ([^\]]+?)\]").unwrap());

static STRIKETHROUGH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[- ([^\]]+?)\]").unwrap());

/// Two space-separated tokens (groups 1, 2) tried before a single page name (group 3).
static BRACKET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[(?:([^\]\s]+?) ([^\]]+?)|([^\]]+?))\]").unwrap()
});

static URL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^https?://").unwrap());

type Rule = fn(&str) -> Cow<'_, str>;

/// Rules in application order.
const RULES: [(&str, Rule); 6] = [
    ("math", math),
    ("bold", bold_star),
    ("bold-double-bracket", bold_double_bracket),
    ("italic", italic),
    ("strikethrough", strikethrough),
    ("link", link),
];

/// Rewrite the Scrapbox inline markup of one line segment as Markdown.
///
/// Not idempotent: a second pass turns `[label](url)` into a page link.
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
    MATH_RE.replace_all(text, |caps: &Captures| format!("${}$", &caps[1]))
}

fn bold_star(text: &str) -> Cow<'_, str> {
    BOLD_STAR_RE.replace_all(text, |caps: &Captures| format!("**{}**", &caps[1]))
}

fn bold_double_bracket(text: &str) -> Cow<'_, str> {
    BOLD_DOUBLE_BRACKET_RE.replace_all(text, |caps: &Captures| format!("**{}**", &caps[1]))
}

fn italic(text: &str) -> Cow<'_, str> {
    ITALIC_RE.replace_all(text, |caps: &Captures| format!("*{}*", &caps[1]))
}

fn strikethrough(text: &str) -> Cow<'_, str> {
    STRIKETHROUGH_RE.replace_all(text, |caps: &Captures| format!("~~{}~~", &caps[1]))
}

fn link(text: &str) -> Cow<'_, str> {
    BRACKET_RE.replace_all(text, |caps: &Captures| {
        match (caps.get(1), caps.get(2), caps.get(3)) {
            (Some(first), Some(second), _) => labelled_link(first.as_str(), second.as_str()),
            (_, _, Some(page)) => format!("[[{}]]", page.as_str()),
            // One of the two alternatives always participates
            _ => caps[0].to_string(),
        }
    })
}

/// `[url label]` and `[label url]` both become `[label](url)`.
fn labelled_link(first: &str, second: &str) -> String {
    if URL_RE.is_match(first) {
        format!("[{second}]({first})")
    } else if URL_RE.is_match(second) {
        format!("[{first}]({second})")
    } else {
        format!("[[{first} {second}]]")
    }
}
