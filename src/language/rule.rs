use indexmap::IndexSet;

use crate::error::{CommentSpanError, Result};

/// Block comment delimiters, e.g. `/*` and `*/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment {
    pub open: String,
    pub close: String,
    /// Whether an inner `open` increases depth (Rust, Swift, Kotlin, Haskell).
    pub nested: bool,
}

impl BlockComment {
    #[must_use]
    pub fn new(open: &str, close: &str) -> Self {
        Self {
            open: open.to_string(),
            close: close.to_string(),
            nested: false,
        }
    }

    #[must_use]
    pub const fn with_nesting(mut self) -> Self {
        self.nested = true;
        self
    }
}

/// Comment and string syntax for one language.
///
/// Built through [`LanguageRuleBuilder`], which rejects empty or contradictory
/// delimiters, so a `LanguageRule` in hand is always usable by the detector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageRule {
    line_comment: Option<String>,
    block_comment: Option<BlockComment>,
    /// Symmetric delimiters such as `"""` whose enclosed text is documentation.
    doc_strings: IndexSet<String>,
    string_delimiters: IndexSet<char>,
    /// Subset of `string_delimiters` whose strings ignore `escape`.
    raw_string_delimiters: IndexSet<char>,
    escape: Option<char>,
}

impl LanguageRule {
    #[must_use]
    pub fn builder() -> LanguageRuleBuilder {
        LanguageRuleBuilder::default()
    }

    #[must_use]
    pub fn line_comment(&self) -> Option<&str> {
        self.line_comment.as_deref()
    }

    #[must_use]
    pub const fn block_comment(&self) -> Option<&BlockComment> {
        self.block_comment.as_ref()
    }

    #[must_use]
    pub const fn doc_strings(&self) -> &IndexSet<String> {
        &self.doc_strings
    }

    #[must_use]
    pub const fn string_delimiters(&self) -> &IndexSet<char> {
        &self.string_delimiters
    }

    #[must_use]
    pub const fn raw_string_delimiters(&self) -> &IndexSet<char> {
        &self.raw_string_delimiters
    }

    #[must_use]
    pub const fn escape(&self) -> Option<char> {
        self.escape
    }

    #[must_use]
    pub fn is_string_delimiter(&self, c: char) -> bool {
        self.string_delimiters.contains(&c)
    }

    /// Whether the escape character is honored inside strings opened by `c`.
    #[must_use]
    pub fn escapes_in(&self, c: char) -> bool {
        !self.raw_string_delimiters.contains(&c)
    }

    fn comment_openers(&self) -> impl Iterator<Item = &str> {
        self.line_comment
            .as_deref()
            .into_iter()
            .chain(self.block_comment.as_ref().map(|block| block.open.as_str()))
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if let Some(marker) = &self.line_comment
            && marker.is_empty()
        {
            return Err(invalid("line comment marker is empty"));
        }

        if let Some(block) = &self.block_comment {
            if block.open.is_empty() || block.close.is_empty() {
                return Err(invalid("block comment delimiters must both be non-empty"));
            }
            if block.nested && block.open == block.close {
                return Err(invalid(format!(
                    "nested block comments need distinct delimiters, got '{}' for both",
                    block.open
                )));
            }
            if let Some(marker) = &self.line_comment
                && (*marker == block.open || *marker == block.close)
            {
                return Err(invalid(format!(
                    "line comment marker '{marker}' is also a block comment delimiter"
                )));
            }
        }

        if let Some(c) = self.string_delimiters.iter().find(|c| c.is_whitespace()) {
            return Err(invalid(format!("string delimiter {c:?} is whitespace")));
        }

        for opener in self.comment_openers() {
            if let Some(c) = opener.chars().next()
                && self.string_delimiters.contains(&c)
            {
                return Err(invalid(format!(
                    "comment marker '{opener}' starts with string delimiter {c:?}"
                )));
            }
        }

        self.validate_doc_strings()?;

        if let Some(escape) = self.escape
            && self.string_delimiters.contains(&escape)
        {
            return Err(invalid(format!(
                "escape character {escape:?} is also a string delimiter"
            )));
        }

        Ok(())
    }

    fn validate_doc_strings(&self) -> Result<()> {
        for doc in &self.doc_strings {
            if doc.is_empty() {
                return Err(invalid("doc string delimiter is empty"));
            }
            if let Some(opener) = self
                .comment_openers()
                .find(|&opener| doc.starts_with(opener) || opener.starts_with(doc.as_str()))
            {
                return Err(invalid(format!(
                    "doc string delimiter '{doc}' overlaps comment marker '{opener}'"
                )));
            }
            let mut chars = doc.chars();
            if let (Some(c), None) = (chars.next(), chars.next())
                && self.string_delimiters.contains(&c)
            {
                return Err(invalid(format!(
                    "doc string delimiter '{doc}' is also a string delimiter"
                )));
            }
            if let Some(escape) = self.escape
                && doc.contains(escape)
            {
                return Err(invalid(format!(
                    "doc string delimiter '{doc}' contains the escape character {escape:?}"
                )));
            }
        }
        Ok(())
    }
}

fn invalid(reason: impl Into<String>) -> CommentSpanError {
    CommentSpanError::InvalidRule(reason.into())
}

#[derive(Debug, Clone, Default)]
pub struct LanguageRuleBuilder {
    line_comment: Option<String>,
    block_comment: Option<BlockComment>,
    doc_strings: IndexSet<String>,
    string_delimiters: IndexSet<char>,
    raw_string_delimiters: IndexSet<char>,
    escape: Option<char>,
}

impl LanguageRuleBuilder {
    #[must_use]
    pub fn line_comment(mut self, marker: &str) -> Self {
        self.line_comment = Some(marker.to_string());
        self
    }

    #[must_use]
    pub fn block_comment(mut self, block: BlockComment) -> Self {
        self.block_comment = Some(block);
        self
    }

    /// Delimiters like Python's `"""` that open and close a doc string.
    /// Doc strings are reported as comments and take precedence over
    /// single-character string delimiters.
    #[must_use]
    pub fn doc_strings<S: Into<String>>(
        mut self,
        delimiters: impl IntoIterator<Item = S>,
    ) -> Self {
        self.doc_strings.extend(delimiters.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn string_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        self.string_delimiters.extend(delimiters);
        self
    }

    /// String delimiters whose contents are never escaped (shell `'`, Go backticks).
    #[must_use]
    pub fn raw_string_delimiters(mut self, delimiters: impl IntoIterator<Item = char>) -> Self {
        for c in delimiters {
            self.string_delimiters.insert(c);
            self.raw_string_delimiters.insert(c);
        }
        self
    }

    #[must_use]
    pub const fn escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Validate and freeze the rule.
    ///
    /// # Errors
    /// Returns [`CommentSpanError::InvalidRule`] if a delimiter is empty or
    /// whitespace, or if it collides with another delimiter.
    pub fn build(self) -> Result<LanguageRule> {
        let rule = self.freeze();
        rule.validate()?;
        Ok(rule)
    }

    /// Freeze a built-in rule whose delimiters are known to be valid.
    pub(crate) fn build_preset(self) -> LanguageRule {
        let rule = self.freeze();
        debug_assert!(rule.validate().is_ok(), "invalid preset: {rule:?}");
        rule
    }

    fn freeze(self) -> LanguageRule {
        LanguageRule {
            line_comment: self.line_comment,
            block_comment: self.block_comment,
            doc_strings: self.doc_strings,
            string_delimiters: self.string_delimiters,
            raw_string_delimiters: self.raw_string_delimiters,
            escape: self.escape,
        }
    }
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
