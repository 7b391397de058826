//! Inline rule ordering, Markdown → Scrapbox

use sbmd_babel::markdown_to_scrapbox::apply_inline;

#[test]
fn test_bold_is_not_read_as_italic() {
    assert_eq!(apply_inline("**bold**"), "[* bold]");
}

#[test]
fn test_italic_inside_bold_text() {
    assert_eq!(apply_inline("**a *b* c**"), "[* a [/ b] c]");
}

#[test]
fn test_math_before_links() {
    assert_eq!(
        apply_inline("$x$ [site](http://x.org)"),
        "[$ x ] [http://x.org site]"
    );
}

#[test]
fn test_every_rule_on_one_line() {
    assert_eq!(
        apply_inline("$a$ [l](https://u) [[P]] **b** *i* ~~s~~"),
        "[$ a ] [https://u l] [P] [* b] [/ i] [- s]"
    );
}

#[test]
fn test_unbalanced_markers_pass_through() {
    assert_eq!(apply_inline("**open and ~~open"), "**open and ~~open");
}
