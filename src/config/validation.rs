//! Configuration validation with helpful error messages
//!
//! Validation also compiles every template into typed tokens, so the rest of
//! the program never sees an unresolvable `{from:..}` / `{to:..}` reference.

use std::collections::HashSet;
use std::path::{Component, Path};

use super::{ManifestEntry, RewriteConfig};
use crate::error::{hints, InitError};
use crate::rewrite::{NamingKeys, TemplateEntry, TemplatePair};

/// Validated configuration with parsed templates
#[derive(Debug, Clone)]
pub struct RewriteRules {
    pub source: NamingKeys,
    pub filename: Vec<TemplatePair>,
    pub contents: Vec<TemplatePair>,
    pub files: Vec<ManifestEntry>,
}

/// Validate the entire rewrite configuration
pub fn validate_config(config: RewriteConfig) -> Result<RewriteRules, InitError> {
    validate_source(&config.source)?;
    let filename = parse_templates("filename", &config.filename)?;
    let contents = parse_templates("contents", &config.contents)?;

    validate_manifest(&config.files)?;

    Ok(RewriteRules {
        source: config.source,
        filename,
        contents,
        files: config.files,
    })
}

/// Every placeholder name must be non-empty, or its rules could never match
fn validate_source(source: &NamingKeys) -> Result<(), InitError> {
    for (key, value) in source.iter() {
        if value.trim().is_empty() {
            return Err(InitError::config_error_with_hint(
                format!("Source naming key '{}' is empty", key),
                "Give every key under [source] the placeholder's current spelling",
            ));
        }
    }
    Ok(())
}

fn parse_templates(table: &str, entries: &[TemplateEntry]) -> Result<Vec<TemplatePair>, InitError> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            TemplatePair::parse(entry).map_err(|e| {
                InitError::config_error_with_hint(
                    format!("Invalid {} template #{}: {}", table, i + 1, e),
                    hints::invalid_rewrite_config(),
                )
            })
        })
        .collect()
}

/// Validate the manifest: well-formed entries, no duplicate paths
fn validate_manifest(files: &[ManifestEntry]) -> Result<(), InitError> {
    let mut seen = HashSet::new();
    for entry in files {
        validate_manifest_entry(entry)?;
        if !seen.insert(entry.path.as_str()) {
            return Err(InitError::config_error_with_hint(
                format!("File '{}' is listed more than once", entry.path),
                "Each file may appear once; combine its flags into a single entry",
            ));
        }
    }
    Ok(())
}

/// Validate one manifest entry
fn validate_manifest_entry(entry: &ManifestEntry) -> Result<(), InitError> {
    if entry.path.trim().is_empty() {
        return Err(InitError::config_error_with_hint(
            "Manifest entry has an empty path",
            "Give every [[files]] entry a path relative to the repository root",
        ));
    }

    let path = Path::new(&entry.path);
    let escapes_root = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes_root {
        return Err(InitError::config_error_with_hint(
            format!("Manifest path '{}' must be relative to the repository root", entry.path),
            "Use paths like 'src/custom-element.ts', without leading '/' or '..'",
        ));
    }

    if !entry.rename && !entry.contents {
        return Err(InitError::config_error_with_hint(
            format!("Manifest entry '{}' has no operations", entry.path),
            "Set 'rename = true', 'contents = true', or both",
        ));
    }

    Ok(())
}
