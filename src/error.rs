use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CommentSpanError {
    #[error("Invalid language rule: {0}")]
    InvalidRule(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl CommentSpanError {
    /// Short category name, stable across message changes.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::InvalidRule(_) => "InvalidRule",
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialize",
        }
    }

    /// Hint for fixing the error, if one applies.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::InvalidRule(_) => Some(
                "Comment markers must be non-empty and distinct; string delimiters must not be whitespace",
            ),
            Self::Config(_) | Self::TomlParse(_) => {
                Some("Check the config file format: each language is a [languages.<name>] table")
            }
            Self::FileRead { source, .. } if source.kind() == std::io::ErrorKind::NotFound => {
                Some("Check that the file path exists")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CommentSpanError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
