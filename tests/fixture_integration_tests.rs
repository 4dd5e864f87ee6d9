//! Built-in language rules against fixture files full of fake comment markers.

mod common;

use comment_spans::counter::{LineCounter, LineStats};
use comment_spans::language::LanguageRegistry;
use comment_spans::{SpanKind, detect};

use common::{assert_tiles, texts_of};

const EDGE_CASES_TS: &str = include_str!("fixtures/edge_cases.ts");
const COMPLEX_PY: &str = include_str!("fixtures/complex.py");

#[test]
fn typescript_fixture_spans() {
    let registry = LanguageRegistry::default();
    let rule = &registry.get_by_extension("ts").unwrap().rule;
    let detection = detect(EDGE_CASES_TS, rule);

    assert_tiles(&detection, EDGE_CASES_TS);
    assert!(!detection.has_warnings());

    let strings = texts_of(&detection, EDGE_CASES_TS, SpanKind::String);
    assert!(strings.contains(&"\"http://example.com//not-a-comment\""));
    assert!(strings.contains(&"\"//\""));
    assert!(strings.contains(&"\"/*\""));
    assert!(strings.contains(&"\"*/\""));
    assert!(strings.contains(&"`line // ${value} /* not */`"));

    let comments = texts_of(&detection, EDGE_CASES_TS, SpanKind::Comment);
    assert_eq!(comments.len(), 4);
    assert!(comments[0].starts_with("// Edge case tests"));
    assert!(comments[0].ends_with("مرحبا بالعالم\n"));
    assert_eq!(comments[1], "// Windows path\n");
    assert_eq!(
        comments[2],
        "/* block comment with \"quote\n   spanning lines */"
    );
    assert_eq!(comments[3], "// Comment after spaces\n");
}

#[test]
fn typescript_fixture_line_counts() {
    let registry = LanguageRegistry::default();
    let rule = &registry.get_by_extension("ts").unwrap().rule;
    let stats = LineCounter::new(rule).count(EDGE_CASES_TS);

    assert_eq!(
        stats,
        LineStats {
            total: 15,
            code: 8,
            comment: 6,
            blank: 3,
        }
    );
}

#[test]
fn python_fixture_spans() {
    let registry = LanguageRegistry::default();
    let rule = &registry.get("Python").unwrap().rule;
    let detection = detect(COMPLEX_PY, rule);

    assert_tiles(&detection, COMPLEX_PY);
    assert!(!detection.has_warnings());

    let comments = texts_of(&detection, COMPLEX_PY, SpanKind::Comment);
    assert!(comments.contains(
        &"\"\"\"\n    A class for \"processing data's # not a comment\n    \"\"\""
    ));
    assert!(comments.iter().all(|c| !c.contains("it's not a comment")));
    assert_eq!(comments.last(), Some(&"# Regex for matching comments\n"));

    let strings = texts_of(&detection, COMPLEX_PY, SpanKind::String);
    assert!(strings.contains(&"\"This string contains # but it's not a comment\""));
    assert!(strings.contains(&"\"#.*$\""));
}

#[test]
fn python_fixture_line_counts() {
    let registry = LanguageRegistry::default();
    let rule = &registry.get_by_extension("py").unwrap().rule;
    let stats = LineCounter::new(rule).count(COMPLEX_PY);

    assert_eq!(
        stats,
        LineStats {
            total: 24,
            code: 11,
            comment: 8,
            blank: 7,
        }
    );
}

#[test]
fn fixture_lines_accumulate_across_files() {
    let registry = LanguageRegistry::default();
    let mut total = LineStats::new();
    for (ext, source) in [("ts", EDGE_CASES_TS), ("py", COMPLEX_PY)] {
        let rule = &registry.get_by_extension(ext).unwrap().rule;
        total += LineCounter::new(rule).count(source);
    }

    assert_eq!(total.total, 39);
    assert_eq!(total.sloc(), 19);
}
