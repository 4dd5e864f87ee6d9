use crate::language::LanguageRule;

use super::span::{Detection, Span, SpanKind, Warning};

/// Splits source text into code, comment and string spans.
///
/// The scan is a single left-to-right pass. Comment markers are only
/// recognized in code, so a `//` inside `"..."` stays part of the string and
/// a `"` inside a comment never opens one. Doc strings (Python `"""`) are
/// reported as comments and end only at their own closing delimiter.
#[derive(Debug, Clone, Copy)]
pub struct CommentSpanDetector<'a> {
    rule: &'a LanguageRule,
}

impl<'a> CommentSpanDetector<'a> {
    #[must_use]
    pub const fn new(rule: &'a LanguageRule) -> Self {
        Self { rule }
    }

    #[must_use]
    pub const fn rule(&self) -> &'a LanguageRule {
        self.rule
    }

    /// Scan `source` into ordered, contiguous spans covering every byte.
    ///
    /// Strings and block comments still open at end of input run to the end
    /// and are reported in [`Detection::warnings`].
    #[must_use]
    pub fn detect(&self, source: &str) -> Detection {
        let mut scanner = Scanner::new(self.rule, source);
        while scanner.pos < source.len() {
            scanner.step();
        }
        let detection = scanner.finish();

        tracing::debug!(
            bytes = source.len(),
            spans = detection.spans.len(),
            warnings = detection.warnings.len(),
            "comment span scan complete"
        );
        detection
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Code,
    InString { delimiter: char },
    InLineComment,
    /// `depth` counts open delimiters, so it is 1 for an unnested comment.
    InBlockComment { depth: usize },
    /// `index` into the rule's doc string delimiters.
    InDocString { index: usize },
}

impl Mode {
    const fn kind(self) -> SpanKind {
        match self {
            Self::Code => SpanKind::Code,
            Self::InString { .. } => SpanKind::String,
            Self::InLineComment | Self::InBlockComment { .. } | Self::InDocString { .. } => {
                SpanKind::Comment
            }
        }
    }
}

struct Scanner<'r, 's> {
    rule: &'r LanguageRule,
    source: &'s str,
    pos: usize,
    mode: Mode,
    region_start: usize,
    spans: Vec<Span>,
}

impl<'r, 's> Scanner<'r, 's> {
    const fn new(rule: &'r LanguageRule, source: &'s str) -> Self {
        Self {
            rule,
            source,
            pos: 0,
            mode: Mode::Code,
            region_start: 0,
            spans: Vec::new(),
        }
    }

    fn rest(&self) -> &'s str {
        &self.source[self.pos..]
    }

    /// Advance past at least one character.
    fn step(&mut self) {
        match self.mode {
            Mode::Code => self.step_code(),
            Mode::InString { delimiter } => self.step_string(delimiter),
            Mode::InLineComment => self.step_line_comment(),
            Mode::InBlockComment { depth } => self.step_block_comment(depth),
            Mode::InDocString { index } => self.step_doc_string(index),
        }
    }

    fn step_code(&mut self) {
        let rest = self.rest();

        if let Some((mode, len)) = self.comment_opening(rest) {
            self.switch(mode, self.pos);
            self.pos += len;
            return;
        }

        if let Some((index, len)) = self.doc_string_opening(rest) {
            self.switch(Mode::InDocString { index }, self.pos);
            self.pos += len;
            return;
        }

        let c = next_char(rest);
        if self.rule.is_string_delimiter(c) {
            self.switch(Mode::InString { delimiter: c }, self.pos);
        }
        self.pos += c.len_utf8();
    }

    /// The comment marker starting at `rest`, if any. The longer marker wins
    /// when both match (Lua `--[[` over `--`).
    fn comment_opening(&self, rest: &str) -> Option<(Mode, usize)> {
        let block = self
            .rule
            .block_comment()
            .filter(|block| rest.starts_with(block.open.as_str()))
            .map(|block| (Mode::InBlockComment { depth: 1 }, block.open.len()));
        let line = self
            .rule
            .line_comment()
            .filter(|marker| rest.starts_with(marker))
            .map(|marker| (Mode::InLineComment, marker.len()));

        match (block, line) {
            (Some(b), Some(l)) => Some(if l.1 > b.1 { l } else { b }),
            (b, l) => b.or(l),
        }
    }

    /// Longest doc string delimiter starting at `rest`, as `(index, len)`.
    fn doc_string_opening(&self, rest: &str) -> Option<(usize, usize)> {
        self.rule
            .doc_strings()
            .iter()
            .enumerate()
            .filter(|(_, delimiter)| rest.starts_with(delimiter.as_str()))
            .map(|(index, delimiter)| (index, delimiter.len()))
            .max_by_key(|&(_, len)| len)
    }

    fn step_string(&mut self, delimiter: char) {
        let rest = self.rest();
        let c = next_char(rest);
        self.pos += c.len_utf8();

        if self.rule.escape() == Some(c) && self.rule.escapes_in(delimiter) {
            self.skip_escaped();
        } else if c == delimiter {
            self.switch(Mode::Code, self.pos);
        }
    }

    fn step_doc_string(&mut self, index: usize) {
        let rest = self.rest();
        let rule = self.rule;
        let Some(delimiter) = rule.doc_strings().get_index(index) else {
            // Unreachable: the index comes from the same rule.
            self.switch(Mode::Code, self.pos);
            return;
        };

        if rest.starts_with(delimiter.as_str()) {
            self.pos += delimiter.len();
            self.switch(Mode::Code, self.pos);
            return;
        }

        let c = next_char(rest);
        self.pos += c.len_utf8();
        if rule.escape() == Some(c) {
            self.skip_escaped();
        }
    }

    /// Consume the character following an escape, if any.
    fn skip_escaped(&mut self) {
        if let Some(escaped) = self.rest().chars().next() {
            self.pos += escaped.len_utf8();
        }
    }

    fn step_line_comment(&mut self) {
        let rest = self.rest();
        if rest.starts_with("\r\n") {
            self.pos += 2;
            self.switch(Mode::Code, self.pos);
            return;
        }

        let c = next_char(rest);
        self.pos += c.len_utf8();
        if c == '\n' || c == '\r' {
            self.switch(Mode::Code, self.pos);
        }
    }

    fn step_block_comment(&mut self, depth: usize) {
        let rest = self.rest();
        let rule = self.rule;
        let Some(block) = rule.block_comment() else {
            // Unreachable: block mode is only entered through a block rule.
            self.switch(Mode::Code, self.pos);
            return;
        };

        if rest.starts_with(block.close.as_str()) {
            self.pos += block.close.len();
            if depth <= 1 {
                self.switch(Mode::Code, self.pos);
            } else {
                self.mode = Mode::InBlockComment { depth: depth - 1 };
            }
        } else if block.nested && rest.starts_with(block.open.as_str()) {
            self.pos += block.open.len();
            self.mode = Mode::InBlockComment { depth: depth + 1 };
        } else {
            self.pos += next_char(rest).len_utf8();
        }
    }

    /// Close the current region at `at` and enter `mode`.
    fn switch(&mut self, mode: Mode, at: usize) {
        self.push(self.mode.kind(), self.region_start, at);
        self.mode = mode;
        self.region_start = at;
    }

    /// Append a span, dropping empty ones and merging with a preceding span
    /// of the same kind.
    fn push(&mut self, kind: SpanKind, start: usize, end: usize) {
        if start == end {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.kind == kind && last.end == start => last.end = end,
            _ => self.spans.push(Span::new(kind, start, end)),
        }
    }

    fn finish(mut self) -> Detection {
        let end = self.source.len();
        let mut warnings = Vec::new();

        if matches!(
            self.mode,
            Mode::InString { .. } | Mode::InBlockComment { .. } | Mode::InDocString { .. }
        ) {
            let kind = self.mode.kind();
            tracing::warn!(
                kind = %kind,
                start = self.region_start,
                "unterminated region runs to end of input"
            );
            warnings.push(Warning::UnterminatedRegion {
                kind,
                start: self.region_start,
            });
        }

        self.push(self.mode.kind(), self.region_start, end);
        Detection {
            spans: self.spans,
            warnings,
        }
    }
}

/// First character of a non-empty slice.
fn next_char(rest: &str) -> char {
    rest.chars().next().unwrap_or('\0')
}
