//! Inline rule ordering, Scrapbox → Markdown

use sbmd_babel::scrapbox_to_markdown::apply_inline;

#[test]
fn test_link_output_is_not_rescanned() {
    assert_eq!(
        apply_inline("[https://a.example A] and [Page]"),
        "[A](https://a.example) and [[Page]]"
    );
}

#[test]
fn test_page_link_with_space_is_not_rescanned() {
    assert_eq!(apply_inline("[Two Words]"), "[[Two Words]]");
}

#[test]
fn test_decorations_are_not_links() {
    assert_eq!(
        apply_inline("[$ x ] [* b] [[ c ]] [/ i] [- s]"),
        "$x$ **b** **c** *i* ~~s~~"
    );
}

#[test]
fn test_http_scheme_is_a_url() {
    assert_eq!(apply_inline("[http://old.example Old]"), "[Old](http://old.example)");
}

#[test]
fn test_unclosed_bracket_passes_through() {
    assert_eq!(apply_inline("[unclosed"), "[unclosed");
}
