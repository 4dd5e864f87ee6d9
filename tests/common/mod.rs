#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use comment_spans::{Detection, SpanKind};
use tempfile::TempDir;

/// Creates a temporary directory with config files for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
        path
    }
}

/// Source text of every span of `kind`.
pub fn texts_of<'s>(detection: &Detection, source: &'s str, kind: SpanKind) -> Vec<&'s str> {
    detection
        .spans_of(kind)
        .map(|span| span.text(source))
        .collect()
}

/// Assert the spans tile `source` exactly with no adjacent spans of one kind.
pub fn assert_tiles(detection: &Detection, source: &str) {
    let mut expected_start = 0;
    for span in &detection.spans {
        assert_eq!(span.start, expected_start, "gap or overlap at {span}");
        assert!(span.start < span.end, "empty span {span}");
        expected_start = span.end;
    }
    assert_eq!(expected_start, source.len());
    for pair in detection.spans.windows(2) {
        assert_ne!(pair[0].kind, pair[1].kind);
    }
}
