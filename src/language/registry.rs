use std::collections::HashMap;

use indexmap::IndexMap;

use crate::config::CustomLanguageConfig;
use crate::error::Result;

use super::{BlockComment, LanguageRule, LanguageRuleBuilder};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub extensions: Vec<String>,
    pub rule: LanguageRule,
}

impl Language {
    #[must_use]
    pub fn new(name: &str, extensions: Vec<&str>, rule: LanguageRule) -> Self {
        Self {
            name: name.to_string(),
            extensions: extensions.into_iter().map(String::from).collect(),
            rule,
        }
    }
}

#[derive(Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    extension_map: HashMap<String, usize>,
    name_map: HashMap<String, usize>,
}

impl LanguageRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self {
            languages: Vec::new(),
            extension_map: HashMap::new(),
            name_map: HashMap::new(),
        }
    }

    /// Register a language. A language with the same name (case-insensitive)
    /// is replaced; extensions already claimed by another language move to
    /// the new one.
    pub fn register(&mut self, language: Language) {
        let key = language.name.to_lowercase();
        let idx = if let Some(&existing) = self.name_map.get(&key) {
            self.extension_map.retain(|_, &mut i| i != existing);
            self.languages[existing] = language;
            existing
        } else {
            self.languages.push(language);
            self.languages.len() - 1
        };

        self.name_map.insert(key, idx);
        for ext in &self.languages[idx].extensions {
            self.extension_map.insert(ext.to_lowercase(), idx);
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Language> {
        self.name_map
            .get(&name.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    #[must_use]
    pub fn get_by_extension(&self, ext: &str) -> Option<&Language> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        self.extension_map
            .get(&ext.to_lowercase())
            .map(|&idx| &self.languages[idx])
    }

    /// Languages in registration order, including ones whose extensions were
    /// all claimed by later registrations.
    #[must_use]
    pub fn all(&self) -> &[Language] {
        &self.languages
    }

    /// Built-in languages plus the given custom ones, applied in order.
    ///
    /// # Errors
    /// Returns a configuration error naming the first language whose
    /// delimiters do not form a valid rule.
    pub fn with_custom_languages(custom: &IndexMap<String, CustomLanguageConfig>) -> Result<Self> {
        let mut registry = Self::default();

        for (name, config) in custom {
            let rule = config.to_rule(name)?;
            registry.register(Language {
                name: name.clone(),
                extensions: config.extensions.clone(),
                rule,
            });
        }

        Ok(registry)
    }
}

fn c_style(nested: bool, strings: &[char]) -> LanguageRuleBuilder {
    let block = BlockComment::new("/*", "*/");
    LanguageRule::builder()
        .line_comment("//")
        .block_comment(if nested { block.with_nesting() } else { block })
        .string_delimiters(strings.iter().copied())
        .escape('\\')
}

fn hash_style(strings: &[char]) -> LanguageRuleBuilder {
    LanguageRule::builder()
        .line_comment("#")
        .string_delimiters(strings.iter().copied())
        .escape('\\')
}

/// Languages whose comments follow C: `//` and `/* */`.
fn c_family() -> Vec<Language> {
    let quotes = ['"', '\''];
    let js_quotes = ['"', '\'', '`'];
    vec![
        // Single quotes are lifetimes in Rust and Swift has no char literals
        Language::new("Rust", vec!["rs"], c_style(true, &['"']).build_preset()),
        Language::new(
            "Go",
            vec!["go"],
            c_style(false, &quotes)
                .raw_string_delimiters(['`'])
                .build_preset(),
        ),
        Language::new(
            "JavaScript",
            vec!["js", "mjs", "cjs", "jsx"],
            c_style(false, &js_quotes).build_preset(),
        ),
        Language::new(
            "TypeScript",
            vec!["ts", "mts", "cts", "tsx"],
            c_style(false, &js_quotes).build_preset(),
        ),
        Language::new("C", vec!["c", "h"], c_style(false, &quotes).build_preset()),
        Language::new(
            "C++",
            vec!["cpp", "hpp", "cc", "cxx", "hxx"],
            c_style(false, &quotes).build_preset(),
        ),
        Language::new("C#", vec!["cs"], c_style(false, &quotes).build_preset()),
        Language::new("Java", vec!["java"], c_style(false, &quotes).build_preset()),
        Language::new("Kotlin", vec!["kt", "kts"], c_style(true, &quotes).build_preset()),
        Language::new("Swift", vec!["swift"], c_style(true, &['"']).build_preset()),
        Language::new("PHP", vec!["php"], c_style(false, &quotes).build_preset()),
    ]
}

/// Languages with `#` or `--` line comments.
fn script_family() -> Vec<Language> {
    let quotes = ['"', '\''];
    vec![
        Language::new(
            "Python",
            vec!["py", "pyi"],
            hash_style(&quotes)
                .doc_strings(["\"\"\"", "'''"])
                .build_preset(),
        ),
        Language::new(
            "Ruby",
            vec!["rb"],
            hash_style(&quotes)
                .block_comment(BlockComment::new("=begin", "=end"))
                .build_preset(),
        ),
        // `#` after `$` (as in `$#`) still opens a comment
        Language::new(
            "Shell",
            vec!["sh", "bash", "zsh"],
            hash_style(&['"'])
                .raw_string_delimiters(['\''])
                .build_preset(),
        ),
        Language::new(
            "Lua",
            vec!["lua"],
            LanguageRule::builder()
                .line_comment("--")
                .block_comment(BlockComment::new("--[[", "]]"))
                .string_delimiters(quotes)
                .escape('\\')
                .build_preset(),
        ),
        // SQL escapes quotes by doubling them, which scans as two adjacent strings
        Language::new(
            "SQL",
            vec!["sql"],
            LanguageRule::builder()
                .line_comment("--")
                .block_comment(BlockComment::new("/*", "*/"))
                .string_delimiters(['\''])
                .build_preset(),
        ),
    ]
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let mut registry = Self::new();
        for language in c_family().into_iter().chain(script_family()) {
            registry.register(language);
        }
        registry
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
