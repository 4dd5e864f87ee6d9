use serde::Serialize;

use crate::detector::{Detection, SpanKind, Warning};
use crate::error::Result;

use super::OutputFormatter;

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFormatter {
    include_text: bool,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary,
    spans: Vec<JsonSpan<'a>>,
    warnings: &'a [Warning],
}

#[derive(Serialize, Default)]
struct Summary {
    total_bytes: usize,
    code_bytes: usize,
    comment_bytes: usize,
    string_bytes: usize,
}

#[derive(Serialize)]
struct JsonSpan<'a> {
    kind: SpanKind,
    start: usize,
    end: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

impl JsonFormatter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            include_text: false,
        }
    }

    /// Include each span's source text in the output.
    #[must_use]
    pub const fn with_text(mut self, include: bool) -> Self {
        self.include_text = include;
        self
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, source: &str, detection: &Detection) -> Result<String> {
        let mut summary = Summary {
            total_bytes: source.len(),
            ..Summary::default()
        };
        for span in &detection.spans {
            match span.kind {
                SpanKind::Code => summary.code_bytes += span.len(),
                SpanKind::Comment => summary.comment_bytes += span.len(),
                SpanKind::String => summary.string_bytes += span.len(),
            }
        }

        let output = JsonOutput {
            summary,
            spans: detection
                .spans
                .iter()
                .map(|span| JsonSpan {
                    kind: span.kind,
                    start: span.start,
                    end: span.end,
                    text: self.include_text.then(|| span.text(source)),
                })
                .collect(),
            warnings: &detection.warnings,
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
