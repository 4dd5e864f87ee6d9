use std::fmt::Write;

use crate::detector::{Detection, Span, SpanKind};
use crate::error::Result;

use super::OutputFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

/// Longest snippet shown per span, in characters.
const SNIPPET_CHARS: usize = 40;

pub struct TextFormatter {
    use_colors: bool,
    show_text: bool,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            show_text: true,
        }
    }

    /// Show a quoted snippet of each span's text (default: on).
    #[must_use]
    pub const fn with_text(mut self, show: bool) -> Self {
        self.show_text = show;
        self
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, kind: SpanKind) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = match kind {
            SpanKind::Code => return text.to_string(),
            SpanKind::Comment => ansi::GREEN,
            SpanKind::String => ansi::CYAN,
        };

        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_span(&self, source: &str, span: &Span, output: &mut String) {
        let label = self.colorize(&format!("{:<7}", span.kind.as_str()), span.kind);
        let range = format!("{}..{}", span.start, span.end);

        if self.show_text {
            writeln!(output, "{label} {range:<12} {}", snippet(span.text(source))).ok();
        } else {
            writeln!(output, "{label} {range}").ok();
        }
    }
}

/// Debug-quoted text, shortened to `SNIPPET_CHARS` characters.
fn snippet(text: &str) -> String {
    let mut chars = text.chars();
    let head: String = chars.by_ref().take(SNIPPET_CHARS).collect();
    if chars.next().is_some() {
        format!("{head:?}...")
    } else {
        format!("{head:?}")
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, source: &str, detection: &Detection) -> Result<String> {
        let mut output = String::new();

        for span in &detection.spans {
            self.format_span(source, span, &mut output);
        }

        for warning in &detection.warnings {
            let prefix = if self.use_colors {
                format!("{}warning{}", ansi::YELLOW, ansi::RESET)
            } else {
                "warning".to_string()
            };
            writeln!(output, "{prefix}: {warning}").ok();
        }

        let count = |kind| detection.spans_of(kind).count();
        writeln!(
            output,
            "\n{} spans: {} code, {} comment, {} string",
            detection.spans.len(),
            count(SpanKind::Code),
            count(SpanKind::Comment),
            count(SpanKind::String)
        )
        .ok();

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
