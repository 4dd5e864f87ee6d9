//! Split source text into code, comment and string spans.
//!
//! ```
//! use comment_spans::{LanguageRule, SpanKind, detect};
//!
//! let rule = LanguageRule::builder()
//!     .line_comment("//")
//!     .string_delimiters(['"'])
//!     .escape('\\')
//!     .build()?;
//!
//! let detection = detect(r#"url = "http://x"; // home"#, &rule);
//! let kinds: Vec<SpanKind> = detection.spans.iter().map(|s| s.kind).collect();
//! assert_eq!(
//!     kinds,
//!     [SpanKind::Code, SpanKind::String, SpanKind::Code, SpanKind::Comment]
//! );
//! # Ok::<(), comment_spans::CommentSpanError>(())
//! ```

pub mod config;
pub mod counter;
pub mod detector;
pub mod error;
pub mod language;
pub mod output;

pub use detector::{CommentSpanDetector, Detection, Span, SpanKind, Warning, detect};
pub use error::{CommentSpanError, Result};
pub use language::{BlockComment, LanguageRule};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
