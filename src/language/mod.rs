mod registry;
mod rule;

pub use registry::{Language, LanguageRegistry};
pub use rule::{BlockComment, LanguageRule, LanguageRuleBuilder};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
