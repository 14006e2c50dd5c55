//! Rewrite configuration
//!
//! The manifest of files to touch and the search/replace templates are data,
//! embedded in the binary from `rewrite.toml` and validated once at startup.
//!
//! ```toml
//! [source]
//! className = "CustomElement"
//! # ...
//!
//! [[contents]]
//! search = "{from:className}"
//! replace = "{to:className}"
//!
//! [[files]]
//! path = "src/custom-element.ts"
//! rename = true
//! contents = true
//! ```

pub mod validation;

use serde::Deserialize;

use crate::error::InitError;
use crate::rewrite::{NamingKeys, TemplateEntry};

pub use validation::{validate_config, RewriteRules};

const BUILTIN_REWRITE_CONFIG: &str = include_str!("rewrite.toml");

/// Raw rewrite configuration as parsed from TOML
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RewriteConfig {
    /// Naming identity of the placeholder element shipped with the template
    pub source: NamingKeys,

    /// Templates applied to file stems of entries flagged `rename`
    #[serde(default)]
    pub filename: Vec<TemplateEntry>,

    /// Templates applied to contents of entries flagged `contents`
    #[serde(default)]
    pub contents: Vec<TemplateEntry>,

    /// Files to process, in order
    #[serde(default)]
    pub files: Vec<ManifestEntry>,
}

/// One file of the manifest and the operations applied to it
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    /// Path relative to the repository root
    pub path: String,

    /// Rename the file by applying the filename templates to its stem
    #[serde(default)]
    pub rename: bool,

    /// Rewrite the file contents with the contents templates
    #[serde(default)]
    pub contents: bool,
}

impl RewriteConfig {
    /// Parse a configuration document
    pub fn parse(content: &str) -> Result<Self, InitError> {
        toml::from_str(content)
            .map_err(|e| InitError::config_error(format!("Failed to parse rewrite configuration: {}", e)))
    }

    /// The configuration compiled into the binary
    pub fn builtin() -> Result<Self, InitError> {
        Self::parse(BUILTIN_REWRITE_CONFIG)
    }
}

/// Load and validate the built-in configuration
pub fn load_rewrite_rules() -> Result<RewriteRules, InitError> {
    validate_config(RewriteConfig::builtin()?)
}
