use serde_json::Value;

use super::*;
use crate::detector::{detect, test_fixtures::c_rule};

fn render(formatter: JsonFormatter, source: &str) -> Value {
    let rule = c_rule();
    let detection = detect(source, &rule);
    let output = formatter.format(source, &detection).unwrap();
    serde_json::from_str(&output).unwrap()
}

#[test]
fn json_lists_spans_in_order() {
    let json = render(JsonFormatter::new(), "// real comment\ncode();");

    let spans = json["spans"].as_array().unwrap();
    assert_eq!(spans.len(), 2);
    assert_eq!(spans[0]["kind"], "comment");
    assert_eq!(spans[0]["start"], 0);
    assert_eq!(spans[0]["end"], 16);
    assert_eq!(spans[1]["kind"], "code");
    assert_eq!(spans[1]["end"], 23);
    assert!(spans[0].get("text").is_none());
}

#[test]
fn json_summary_counts_bytes_per_kind() {
    let json = render(JsonFormatter::new(), r#"x = "s"; // c"#);

    assert_eq!(json["summary"]["total_bytes"], 13);
    assert_eq!(json["summary"]["string_bytes"], 3);
    assert_eq!(json["summary"]["comment_bytes"], 4);
    assert_eq!(json["summary"]["code_bytes"], 6);
}

#[test]
fn json_includes_text_when_requested() {
    let json = render(JsonFormatter::new().with_text(true), r#"a = "b""#);

    let spans = json["spans"].as_array().unwrap();
    assert_eq!(spans[0]["text"], "a = ");
    assert_eq!(spans[1]["text"], "\"b\"");
}

#[test]
fn json_reports_warnings() {
    let json = render(JsonFormatter::new(), "x /* open");

    let warnings = json["warnings"].as_array().unwrap();
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0]["type"], "unterminated_region");
    assert_eq!(warnings[0]["kind"], "comment");
    assert_eq!(warnings[0]["start"], 2);
}

#[test]
fn json_empty_input() {
    let json = render(JsonFormatter::new(), "");

    assert!(json["spans"].as_array().unwrap().is_empty());
    assert!(json["warnings"].as_array().unwrap().is_empty());
    assert_eq!(json["summary"]["total_bytes"], 0);
}
