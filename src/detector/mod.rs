mod scan;
mod span;

pub use scan::CommentSpanDetector;
pub use span::{Detection, Span, SpanKind, Warning};

use crate::language::LanguageRule;

/// Scan `source` with `rule`. Shorthand for [`CommentSpanDetector::detect`].
#[must_use]
pub fn detect(source: &str, rule: &LanguageRule) -> Detection {
    CommentSpanDetector::new(rule).detect(source)
}

#[cfg(test)]
pub(crate) mod test_fixtures;

#[cfg(test)]
#[path = "detector_tests/mod.rs"]
mod tests;
