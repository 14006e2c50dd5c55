//! Naming variants for a custom element
//!
//! A custom element is described by a fixed set of names: the file stem,
//! the dash-case tag, the upper-case tag name, the PascalCase class name and
//! the class suffix. The template ships with a placeholder identity
//! (`custom-element` / `CustomElement`) and the user picks a new class name
//! from which every other variant is derived.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One attribute of a custom element's naming identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamingKey {
    /// File stem, e.g. `custom-element`
    File,
    /// Lower-case class suffix appended to file names, e.g. `element`
    FileSuffix,
    /// Dash-case tag, e.g. `custom-element`
    Tag,
    /// Upper-case tag name as reported by `Element.tagName`
    TagName,
    /// PascalCase class name without its suffix, e.g. `CustomElement`
    ClassName,
    /// Class suffix, e.g. `Element`
    Suffix,
}

impl NamingKey {
    /// Every key, in canonical order
    pub const ALL: [NamingKey; 6] = [
        NamingKey::File,
        NamingKey::FileSuffix,
        NamingKey::Tag,
        NamingKey::TagName,
        NamingKey::ClassName,
        NamingKey::Suffix,
    ];

    /// Spelling used in templates and configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingKey::File => "file",
            NamingKey::FileSuffix => "fileSuffix",
            NamingKey::Tag => "tag",
            NamingKey::TagName => "tagName",
            NamingKey::ClassName => "className",
            NamingKey::Suffix => "suffix",
        }
    }
}

impl fmt::Display for NamingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamingKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown naming key '{}'", s))
    }
}

/// Full naming identity of a custom element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamingKeys {
    pub file: String,
    pub file_suffix: String,
    pub tag: String,
    pub tag_name: String,
    pub class_name: String,
    pub suffix: String,
}

impl NamingKeys {
    /// Look up the value for a key
    pub fn get(&self, key: NamingKey) -> &str {
        match key {
            NamingKey::File => &self.file,
            NamingKey::FileSuffix => &self.file_suffix,
            NamingKey::Tag => &self.tag,
            NamingKey::TagName => &self.tag_name,
            NamingKey::ClassName => &self.class_name,
            NamingKey::Suffix => &self.suffix,
        }
    }

    /// Iterate over `(key, value)` pairs in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (NamingKey, &str)> + '_ {
        NamingKey::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}

/// Guess a class name from a repository name
///
/// `custom-element-boilerplate` becomes `CustomElementBoilerplate`. Empty
/// segments (leading, trailing or doubled dashes) contribute nothing.
pub fn derive_candidate_class_name(repository_name: &str) -> String {
    repository_name.split('-').map(capitalize_first).collect()
}

/// Derive the target naming identity from a PascalCase class name
///
/// The suffix is never translated: it is carried over from `source` and only
/// reattached, so only the class-name prefix can be customized.
pub fn derive_target_naming_keys(class_name: &str, source: &NamingKeys) -> NamingKeys {
    let tag = dash_case(class_name);
    NamingKeys {
        file: tag.clone(),
        file_suffix: source.suffix.to_lowercase(),
        tag_name: tag.to_uppercase(),
        tag,
        class_name: class_name.to_string(),
        suffix: source.suffix.clone(),
    }
}

/// Convert PascalCase to dash-case
///
/// The first character is lowercased; every later uppercase letter is
/// lowercased and preceded by a `-`. `FooBar` becomes `foo-bar`.
pub fn dash_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut chars = name.chars();

    if let Some(first) = chars.next() {
        out.extend(first.to_lowercase());
    }

    for c in chars {
        if c.is_uppercase() {
            out.push('-');
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Strip one trailing occurrence of `suffix` from `name`
pub fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    if suffix.is_empty() {
        return name;
    }
    name.strip_suffix(suffix).unwrap_or(name)
}

fn capitalize_first(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
