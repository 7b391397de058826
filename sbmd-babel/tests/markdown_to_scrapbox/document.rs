//! Whole-document Markdown → Scrapbox conversion

use crate::common::{expected, fixture};
use insta::assert_snapshot;
use sbmd_babel::{convert, Direction};

fn md_to_sb(md: &str) -> String {
    convert(md, Direction::MarkdownToScrapbox)
}

#[test]
fn test_heading() {
    assert_snapshot!(md_to_sb("# Title"), @"[**** Title]");
}

#[test]
fn test_bold_and_external_link() {
    assert_snapshot!(
        md_to_sb("**Hi** [OpenAI](https://openai.com)"),
        @"[* Hi] [https://openai.com OpenAI]"
    );
}

#[test]
fn test_code_fence_with_language() {
    let output = md_to_sb("```python\nx=1\n```");
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines, vec!["code:python", "x=1", ""]);
}

#[test]
fn test_code_body_is_verbatim() {
    let md = "```\n# not a heading\n- not a list\n**not bold**\n```";
    assert_eq!(
        md_to_sb(md),
        "code:\n# not a heading\n- not a list\n**not bold**\n"
    );
}

#[test]
fn test_consecutive_code_blocks() {
    let md = "```js\na()\n```\n```\nb()\n```";
    assert_eq!(md_to_sb(md), "code:js\na()\n\ncode:\nb()\n");
}

#[test]
fn test_unterminated_fence_stays_open() {
    assert_eq!(md_to_sb("```\nstill code\n# still code"), "code:\nstill code\n# still code");
}

#[test]
fn test_crlf_input() {
    assert_eq!(md_to_sb("# A\r\n- b\r\n"), "[**** A]\nb");
}

#[test]
fn test_kitchensink() {
    let md = fixture("kitchensink.md");
    assert_eq!(md_to_sb(&md), expected("kitchensink.md.sb"));
}
