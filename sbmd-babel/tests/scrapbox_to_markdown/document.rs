//! Whole-document Scrapbox → Markdown conversion

use crate::common::{expected, fixture};
use insta::assert_snapshot;
use sbmd_babel::{convert, Direction};

fn sb_to_md(sb: &str) -> String {
    convert(sb, Direction::ScrapboxToMarkdown)
}

#[test]
fn test_heading() {
    assert_snapshot!(sb_to_md("[*** Title]"), @"## Title");
}

#[test]
fn test_heading_followed_by_text() {
    assert_snapshot!(sb_to_md("[** Section] (draft)"), @"### Section (draft)");
    assert_snapshot!(sb_to_md("[* Note] see [* this]"), @"#### Note see **this**");
}

#[test]
fn test_link_in_either_order() {
    assert_snapshot!(sb_to_md("[https://openai.com OpenAI]"), @"- [OpenAI](https://openai.com)");
    assert_snapshot!(sb_to_md("[OpenAI https://openai.com]"), @"- [OpenAI](https://openai.com)");
}

#[test]
fn test_code_block_from_filename() {
    let output = sb_to_md("code:a.py\nx=1\n");
    let lines: Vec<&str> = output.split('\n').collect();
    assert_eq!(lines, vec!["```py", "x=1", "```"]);
}

#[test]
fn test_code_block_closed_by_blank_line_then_bullets_resume() {
    assert_eq!(
        sb_to_md("code:x.sh\n echo hi\n\nnext"),
        "```sh\n echo hi\n```\n- next"
    );
}

#[test]
fn test_dangling_code_block_is_closed() {
    assert_eq!(sb_to_md("code:x.sh\n echo hi"), "```sh\n echo hi\n```");
}

#[test]
fn test_kitchensink() {
    let sb = fixture("kitchensink.sb");
    assert_eq!(sb_to_md(&sb), expected("kitchensink.sb.md"));
}
