use std::io::BufRead;
use std::ops::AddAssign;

use serde::Serialize;

use crate::detector::{CommentSpanDetector, Detection, SpanKind};
use crate::language::LanguageRule;

/// Per-line classification counts.
///
/// A line holding both code and a comment counts toward both `code` and
/// `comment`, so `code + comment + blank` can exceed `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineStats {
    pub total: usize,
    pub code: usize,
    pub comment: usize,
    pub blank: usize,
}

impl LineStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            code: 0,
            comment: 0,
            blank: 0,
        }
    }

    #[must_use]
    pub const fn sloc(&self) -> usize {
        self.code
    }

    /// Classify each line of `source` using spans previously detected on it.
    ///
    /// Lines end at `\r\n`, `\n` or a lone `\r`, the same terminators that end
    /// a line comment. A trailing terminator does not start another line.
    /// Whitespace-only lines are blank unless they sit inside a comment span
    /// that continues past them (the middle of a block comment).
    #[must_use]
    pub fn from_detection(source: &str, detection: &Detection) -> Self {
        let spans = &detection.spans;
        let mut stats = Self::new();
        let mut first = 0;

        for (line_start, content_end) in lines(source) {
            while first < spans.len() && spans[first].end <= line_start {
                first += 1;
            }

            let mut has_code = false;
            let mut has_comment = false;
            for span in spans[first..]
                .iter()
                .take_while(|span| span.start < content_end)
            {
                let from = span.start.max(line_start);
                let to = span.end.min(content_end);
                if source[from..to].trim().is_empty() {
                    continue;
                }
                match span.kind {
                    SpanKind::Comment => has_comment = true,
                    SpanKind::Code | SpanKind::String => has_code = true,
                }
            }

            stats.total += 1;
            if has_code || has_comment {
                stats.code += usize::from(has_code);
                stats.comment += usize::from(has_comment);
            } else if spans.get(first).is_some_and(|span| {
                span.kind == SpanKind::Comment && span.start < line_start && span.end > content_end
            }) {
                stats.comment += 1;
            } else {
                stats.blank += 1;
            }
        }

        stats
    }
}

/// `(start, content_end)` byte offsets of each line, excluding terminators.
fn lines(source: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let bytes = source.as_bytes();
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= bytes.len() {
            return None;
        }
        let line_start = start;
        let content_end = bytes[start..]
            .iter()
            .position(|&b| b == b'\n' || b == b'\r')
            .map_or(bytes.len(), |offset| start + offset);

        start = match bytes.get(content_end) {
            Some(b'\r') if bytes.get(content_end + 1) == Some(&b'\n') => content_end + 2,
            Some(_) => content_end + 1,
            None => content_end,
        };
        Some((line_start, content_end))
    })
}

impl AddAssign for LineStats {
    fn add_assign(&mut self, other: Self) {
        self.total += other.total;
        self.code += other.code;
        self.comment += other.comment;
        self.blank += other.blank;
    }
}

/// Counts code, comment and blank lines for one language.
pub struct LineCounter<'a> {
    detector: CommentSpanDetector<'a>,
}

impl<'a> LineCounter<'a> {
    #[must_use]
    pub const fn new(rule: &'a LanguageRule) -> Self {
        Self {
            detector: CommentSpanDetector::new(rule),
        }
    }

    #[must_use]
    pub fn count(&self, source: &str) -> LineStats {
        let detection = self.detector.detect(source);
        LineStats::from_detection(source, &detection)
    }

    /// Count lines from a buffered reader.
    ///
    /// Block comments and strings may span lines, so the whole input is
    /// buffered before scanning.
    ///
    /// # Errors
    /// Returns an I/O error if reading fails or the input is not UTF-8.
    pub fn count_reader<R: BufRead>(&self, mut reader: R) -> std::io::Result<LineStats> {
        let mut source = String::new();
        reader.read_to_string(&mut source)?;
        Ok(self.count(&source))
    }
}

#[cfg(test)]
#[path = "lines_tests.rs"]
mod tests;
