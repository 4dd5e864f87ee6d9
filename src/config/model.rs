use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CommentSpanError, Result};
use crate::language::{BlockComment, LanguageRegistry, LanguageRule};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Config schema version. Absent means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Custom languages keyed by name, in declaration order.
    /// A name matching a built-in language replaces it.
    #[serde(default)]
    pub languages: IndexMap<String, CustomLanguageConfig>,
}

impl Config {
    /// Built-in languages overlaid with the configured ones.
    ///
    /// # Errors
    /// Returns a configuration error for the first invalid language.
    pub fn registry(&self) -> Result<LanguageRegistry> {
        LanguageRegistry::with_custom_languages(&self.languages)
    }
}

/// One `[languages.<name>]` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomLanguageConfig {
    #[serde(default)]
    pub extensions: Vec<String>,

    #[serde(default)]
    pub line_comment: Option<String>,

    /// `[open, close]`
    #[serde(default)]
    pub block_comment: Option<(String, String)>,

    #[serde(default)]
    pub nested_block_comments: bool,

    /// Delimiters such as `"""` whose enclosed text counts as a comment.
    #[serde(default)]
    pub doc_string_delimiters: Vec<String>,

    /// Single-character strings.
    #[serde(default = "default_string_delimiters")]
    pub string_delimiters: Vec<String>,

    /// Single-character strings whose contents ignore `escape`.
    #[serde(default)]
    pub raw_string_delimiters: Vec<String>,

    /// Single character, or empty to disable escaping.
    #[serde(default = "default_escape")]
    pub escape: String,
}

fn default_string_delimiters() -> Vec<String> {
    vec!["\"".to_string(), "'".to_string()]
}

fn default_escape() -> String {
    "\\".to_string()
}

impl Default for CustomLanguageConfig {
    fn default() -> Self {
        Self {
            extensions: Vec::new(),
            line_comment: None,
            block_comment: None,
            nested_block_comments: false,
            doc_string_delimiters: Vec::new(),
            string_delimiters: default_string_delimiters(),
            raw_string_delimiters: Vec::new(),
            escape: default_escape(),
        }
    }
}

impl CustomLanguageConfig {
    /// Build the validated rule for the language called `name`.
    ///
    /// # Errors
    /// Returns a configuration error naming the language if a delimiter is
    /// not a single character or the resulting rule is invalid.
    pub fn to_rule(&self, name: &str) -> Result<LanguageRule> {
        let mut builder = LanguageRule::builder();

        if let Some(marker) = &self.line_comment {
            builder = builder.line_comment(marker);
        }

        if let Some((open, close)) = &self.block_comment {
            let block = BlockComment::new(open, close);
            builder = builder.block_comment(if self.nested_block_comments {
                block.with_nesting()
            } else {
                block
            });
        } else if self.nested_block_comments {
            return Err(config_error(
                name,
                "nested_block_comments is set without block_comment",
            ));
        }

        builder = builder
            .string_delimiters(chars_of(name, &self.string_delimiters)?)
            .raw_string_delimiters(chars_of(name, &self.raw_string_delimiters)?)
            .doc_strings(self.doc_string_delimiters.iter().map(String::as_str));

        if !self.escape.is_empty() {
            let escape = single_char(&self.escape).ok_or_else(|| {
                config_error(
                    name,
                    format!("escape {:?} must be one character", self.escape),
                )
            })?;
            builder = builder.escape(escape);
        }

        builder.build().map_err(|err| match err {
            CommentSpanError::InvalidRule(reason) => config_error(name, reason),
            other => other,
        })
    }
}

fn chars_of(language: &str, delimiters: &[String]) -> Result<Vec<char>> {
    delimiters
        .iter()
        .map(|d| {
            single_char(d).ok_or_else(|| {
                config_error(
                    language,
                    format!("string delimiter {d:?} must be one character"),
                )
            })
        })
        .collect()
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn config_error(language: &str, reason: impl AsRef<str>) -> CommentSpanError {
    CommentSpanError::Config(format!("language '{language}': {}", reason.as_ref()))
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
