//! Properties that hold for every input

use proptest::prelude::*;
use sbmd_babel::{convert, Direction};

fn markup_free_line() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,.!?]{0,30}"
}

proptest! {
    #[test]
    fn markdown_without_markup_is_unchanged(
        lines in prop::collection::vec(markup_free_line(), 0..12)
    ) {
        let doc = lines.join("\n");
        prop_assume!(!doc.ends_with('\n'));
        prop_assert_eq!(convert(&doc, Direction::MarkdownToScrapbox), doc);
    }

    #[test]
    fn scrapbox_plain_lines_become_top_level_bullets(
        lines in prop::collection::vec("[a-zA-Z0-9][a-zA-Z0-9 ,.!?]{0,30}", 1..12)
    ) {
        let doc = lines.join("\n");
        let expected: Vec<String> = lines.iter().map(|line| format!("- {line}")).collect();
        prop_assert_eq!(convert(&doc, Direction::ScrapboxToMarkdown), expected.join("\n"));
    }

    #[test]
    fn scrapbox_code_fences_are_always_balanced(
        lines in prop::collection::vec(
            prop_oneof![
                Just("code:main.rs".to_string()),
                Just(String::new()),
                "[a-z ]{1,10}",
            ],
            0..20,
        )
    ) {
        let output = convert(&lines.join("\n"), Direction::ScrapboxToMarkdown);
        let fences = output.lines().filter(|line| line.starts_with("```")).count();
        prop_assert_eq!(fences % 2, 0);
    }
}

#[test]
fn conversion_is_safe_across_threads() {
    let doc = "# Title\n**bold** and *italic*\n```rs\nlet x = 1;\n```";
    let expected = convert(doc, Direction::MarkdownToScrapbox);

    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || convert(doc, Direction::MarkdownToScrapbox)))
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
