mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::detector::Detection;
use crate::error::Result;

/// Trait for rendering a detection result.
pub trait OutputFormatter {
    /// Format the spans and warnings found in `source`.
    ///
    /// `detection` must have been produced from `source`.
    ///
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, source: &str, detection: &Detection) -> Result<String>;
}
