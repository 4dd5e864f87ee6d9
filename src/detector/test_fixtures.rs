//! Shared test fixtures for detector and counter tests.

use crate::language::{BlockComment, LanguageRule};

use super::{Detection, SpanKind};

/// C-style rule without nesting
pub fn c_rule() -> LanguageRule {
    LanguageRule::builder()
        .line_comment("//")
        .block_comment(BlockComment::new("/*", "*/"))
        .string_delimiters(['"', '\''])
        .escape('\\')
        .build()
        .unwrap()
}

/// Rust-style rule WITH nesting
pub fn nested_rule() -> LanguageRule {
    LanguageRule::builder()
        .line_comment("//")
        .block_comment(BlockComment::new("/*", "*/").with_nesting())
        .string_delimiters(['"'])
        .escape('\\')
        .build()
        .unwrap()
}

/// Hash-comment rule (Python, Shell)
pub fn hash_rule() -> LanguageRule {
    LanguageRule::builder()
        .line_comment("#")
        .string_delimiters(['"', '\''])
        .escape('\\')
        .build()
        .unwrap()
}

/// Python-style rule with triple-quoted doc strings
pub fn doc_rule() -> LanguageRule {
    LanguageRule::builder()
        .line_comment("#")
        .string_delimiters(['"', '\''])
        .doc_strings(["\"\"\"", "'''"])
        .escape('\\')
        .build()
        .unwrap()
}

/// Shell-style rule where single quotes ignore escapes
pub fn shell_rule() -> LanguageRule {
    LanguageRule::builder()
        .line_comment("#")
        .string_delimiters(['"'])
        .raw_string_delimiters(['\''])
        .escape('\\')
        .build()
        .unwrap()
}

/// Lua rule where `--[[` and `--` share a prefix
pub fn lua_rule() -> LanguageRule {
    LanguageRule::builder()
        .line_comment("--")
        .block_comment(BlockComment::new("--[[", "]]"))
        .string_delimiters(['"', '\''])
        .escape('\\')
        .build()
        .unwrap()
}

/// Spans as `(kind, start, end)` triples for compact assertions
pub fn triples(detection: &Detection) -> Vec<(SpanKind, usize, usize)> {
    detection
        .spans
        .iter()
        .map(|span| (span.kind, span.start, span.end))
        .collect()
}

/// Spans as `(kind, text)` pairs
pub fn texts<'s>(detection: &Detection, source: &'s str) -> Vec<(SpanKind, &'s str)> {
    detection
        .spans
        .iter()
        .map(|span| (span.kind, span.text(source)))
        .collect()
}

/// Assert the spans tile `source` exactly.
pub fn assert_covers(detection: &Detection, source: &str) {
    let mut expected_start = 0;
    for span in &detection.spans {
        assert_eq!(span.start, expected_start, "gap or overlap at {span}");
        assert!(span.start < span.end, "empty span {span}");
        assert!(source.is_char_boundary(span.start));
        assert!(source.is_char_boundary(span.end));
        expected_start = span.end;
    }
    assert_eq!(expected_start, source.len());
    assert_eq!(detection.covered_len(), source.len());
}
