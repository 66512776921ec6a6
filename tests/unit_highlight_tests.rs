//! # Highlight Module Unit Tests / 高亮模块单元测试
//!
//! This module contains unit tests for the `highlight.rs` module: the
//! case-insensitive finder, exhaustive marking of a subtree, and the
//! clearing pass that restores the original markup.
//!
//! 此模块包含 `highlight.rs` 模块的单元测试：大小写不敏感查找、
//! 子树的穷尽式标记，以及恢复原始标记的清除操作。

use karate_consolidator::core::highlight::{
    clear_highlights, find_case_insensitive, mark_subtree, HIGHLIGHT_CLASS,
};
use scraper::{Html, Selector};

fn span_selector() -> Selector {
    Selector::parse(&format!("span.{}", HIGHLIGHT_CLASS)).unwrap()
}

fn mark_document(document: &mut Html, term: &str) -> usize {
    let root = document.tree.root().id();
    mark_subtree(&mut document.tree, root, term)
}

#[cfg(test)]
mod find_case_insensitive_tests {
    use super::*;

    #[test]
    fn test_finds_ignoring_case() {
        assert_eq!(find_case_insensitive("Hello World", "world", 0), Some(6..11));
        assert_eq!(find_case_insensitive("Hello World", "HELLO", 0), Some(0..5));
    }

    #[test]
    fn test_respects_the_start_offset() {
        assert_eq!(find_case_insensitive("aaa", "a", 0), Some(0..1));
        assert_eq!(find_case_insensitive("aaa", "a", 1), Some(1..2));
        assert_eq!(find_case_insensitive("abcabc", "abc", 1), Some(3..6));
    }

    #[test]
    fn test_returns_none_when_absent() {
        assert_eq!(find_case_insensitive("Hello World", "moon", 0), None);
        assert_eq!(find_case_insensitive("short", "longer than it", 0), None);
    }

    #[test]
    fn test_empty_needle_and_out_of_range_offset() {
        assert_eq!(find_case_insensitive("Hello", "", 0), None);
        assert_eq!(find_case_insensitive("Hello", "h", 99), None);
    }

    #[test]
    fn test_range_indexes_the_original_text() {
        let haystack = "say CAFÉ twice";
        let range = find_case_insensitive(haystack, "café", 0).unwrap();
        assert_eq!(&haystack[range], "CAFÉ");
    }

    #[test]
    fn test_multi_char_lowercase_expansion_matches() {
        // 'İ' lowercases to "i\u{307}", two characters wide.
        assert_eq!(
            find_case_insensitive("İSTANBUL", "İstanbul", 0),
            Some(0..9)
        );
    }

    #[test]
    fn test_never_splits_a_character() {
        // A plain "i" must not consume half of the 'İ' expansion.
        assert_eq!(find_case_insensitive("İSTANBUL", "istanbul", 0), None);
    }
}

#[cfg(test)]
mod mark_tests {
    use super::*;

    #[test]
    fn test_marks_every_occurrence_in_one_text_node() {
        let mut document =
            Html::parse_document("<html><body><p>Alpha beta ALPHA</p></body></html>");

        let inserted = mark_document(&mut document, "alpha");

        assert_eq!(inserted, 2);
        let markup = document.html();
        assert!(markup.contains("<span class=\"search-highlight\">Alpha</span>"));
        assert!(markup.contains("<span class=\"search-highlight\">ALPHA</span>"));
        assert!(markup.contains(" beta "));
    }

    #[test]
    fn test_marked_spans_keep_the_original_casing() {
        let mut document = Html::parse_document("<html><body><p>AA aa Aa</p></body></html>");

        let inserted = mark_document(&mut document, "aa");

        assert_eq!(inserted, 3);
        let texts: Vec<String> = document
            .select(&span_selector())
            .map(|span| span.text().collect())
            .collect();
        assert_eq!(texts, vec!["AA", "aa", "Aa"]);
    }

    #[test]
    fn test_adjacent_occurrences_do_not_overlap() {
        let mut document = Html::parse_document("<html><body><p>aaaa</p></body></html>");

        let inserted = mark_document(&mut document, "aa");

        assert_eq!(inserted, 2);
    }

    #[test]
    fn test_marks_across_nested_elements() {
        let mut document = Html::parse_document(
            "<html><body><div><p>alpha</p><ul><li>alpha <b>alpha</b></li></ul></div></body></html>",
        );

        let inserted = mark_document(&mut document, "alpha");

        assert_eq!(inserted, 3);
    }

    #[test]
    fn test_script_and_style_content_is_left_alone() {
        let mut document = Html::parse_document(
            "<html><head><style>.alpha { color: red; }</style></head>\
             <body><p>alpha</p><script>var alpha = 1;</script></body></html>",
        );

        let inserted = mark_document(&mut document, "alpha");

        assert_eq!(inserted, 1);
        let markup = document.html();
        assert!(markup.contains("var alpha = 1;"));
        assert!(markup.contains(".alpha { color: red; }"));
    }

    #[test]
    fn test_non_ascii_terms_highlight() {
        let mut document = Html::parse_document("<html><body><p>Visit CAFÉ café</p></body></html>");

        let inserted = mark_document(&mut document, "café");

        assert_eq!(inserted, 2);
        let texts: Vec<String> = document
            .select(&span_selector())
            .map(|span| span.text().collect())
            .collect();
        assert_eq!(texts, vec!["CAFÉ", "café"]);
    }

    #[test]
    fn test_term_spanning_sibling_text_nodes_is_not_matched() {
        // Occurrences live inside single text nodes; markup boundaries break them.
        let mut document = Html::parse_document("<html><body><p>al<b></b>pha</p></body></html>");

        let inserted = mark_document(&mut document, "alpha");

        assert_eq!(inserted, 0);
    }

    #[test]
    fn test_empty_term_marks_nothing() {
        let mut document = Html::parse_document("<html><body><p>anything</p></body></html>");

        assert_eq!(mark_document(&mut document, ""), 0);
    }
}

#[cfg(test)]
mod clear_tests {
    use super::*;

    #[test]
    fn test_mark_then_clear_restores_the_markup_exactly() {
        let mut document =
            Html::parse_document("<html><body><p>Alpha beta ALPHA</p></body></html>");
        let original = document.html();

        let inserted = mark_document(&mut document, "alpha");
        assert_eq!(inserted, 2);
        assert_ne!(document.html(), original);

        let removed = clear_highlights(&mut document);
        assert_eq!(removed, 2);
        assert_eq!(document.html(), original);
    }

    #[test]
    fn test_clear_merges_the_split_text_nodes() {
        let mut document =
            Html::parse_document("<html><body><p>Alpha beta ALPHA</p></body></html>");
        mark_document(&mut document, "alpha");

        clear_highlights(&mut document);

        let p_selector = Selector::parse("p").unwrap();
        let paragraph = document.select(&p_selector).next().unwrap();
        assert_eq!(paragraph.children().count(), 1);
        let text: String = paragraph.text().collect();
        assert_eq!(text, "Alpha beta ALPHA");
    }

    #[test]
    fn test_clear_unwraps_nested_spans() {
        // Marking twice without clearing wraps the first pass's spans again.
        let mut document =
            Html::parse_document("<html><body><p>Alpha beta ALPHA</p></body></html>");
        let original = document.html();

        assert_eq!(mark_document(&mut document, "alpha"), 2);
        assert_eq!(mark_document(&mut document, "alpha"), 2);

        let removed = clear_highlights(&mut document);
        assert_eq!(removed, 4);
        assert_eq!(document.html(), original);
    }

    #[test]
    fn test_clear_on_a_clean_document_is_a_no_op() {
        let mut document = Html::parse_document("<html><body><p>plain text</p></body></html>");
        let original = document.html();

        assert_eq!(clear_highlights(&mut document), 0);
        assert_eq!(document.html(), original);
    }

    #[test]
    fn test_round_trip_with_non_ascii_text() {
        let mut document =
            Html::parse_document("<html><body><p>Visit CAFÉ café tomorrow</p></body></html>");
        let original = document.html();

        assert_eq!(mark_document(&mut document, "café"), 2);
        assert_eq!(clear_highlights(&mut document), 2);
        assert_eq!(document.html(), original);
    }
}
