//! Ordered literal search/replace
//!
//! Substitutions are applied one after another: the output of the first
//! becomes the input of the second, so a later pattern can match text that
//! an earlier replacement produced.

use anyhow::{Context, Result};
use regex::{NoExpand, Regex};
use serde::Serialize;

/// A literal pattern and its replacement
#[derive(Debug, Clone, Serialize)]
pub struct Substitution {
    pub pattern: String,
    pub replacement: String,
    #[serde(skip)]
    matcher: Regex,
}

impl Substitution {
    /// Compile a literal pattern; every regex metacharacter is escaped
    pub fn new(pattern: impl Into<String>, replacement: impl Into<String>) -> Result<Self> {
        let pattern = pattern.into();
        let matcher = Regex::new(&regex::escape(&pattern))
            .with_context(|| format!("Failed to compile pattern '{}'", pattern))?;
        Ok(Self {
            pattern,
            replacement: replacement.into(),
            matcher,
        })
    }

    /// Replace every non-overlapping occurrence of the pattern
    pub fn apply(&self, text: &str) -> String {
        self.matcher
            .replace_all(text, NoExpand(&self.replacement))
            .into_owned()
    }
}

/// Apply `substitutions` to `text` in order
pub fn apply_substitutions(text: &str, substitutions: &[Substitution]) -> String {
    substitutions
        .iter()
        .fold(text.to_string(), |current, substitution| substitution.apply(&current))
}
