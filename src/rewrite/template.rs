//! Rewrite templates with `{from:<key>}` / `{to:<key>}` tokens
//!
//! A template pair such as `{from:className}{from:suffix}` →
//! `{to:className}{to:suffix}` resolves against the source and target naming
//! identities into a concrete literal substitution. Tokens are parsed into a
//! closed set of [`NamingKey`]s up front, so resolution itself cannot fail on
//! an unknown key.

use std::sync::OnceLock;

use anyhow::Result;
use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

use super::naming::{NamingKey, NamingKeys};
use super::substitution::Substitution;

/// Template parse failure
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TemplateError {
    #[error("unknown token side '{side}' in '{token}' (expected 'from' or 'to')")]
    UnknownSide { token: String, side: String },

    #[error("unknown naming key '{key}' in '{token}'")]
    UnknownKey { token: String, key: String },
}

/// A raw search/replace pair as written in configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TemplateEntry {
    pub search: String,
    pub replace: String,
}

/// Piece of a parsed template string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Literal(String),
    From(NamingKey),
    To(NamingKey),
}

/// A parsed template string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

fn token_regex() -> &'static Regex {
    static TOKEN: OnceLock<Regex> = OnceLock::new();
    TOKEN.get_or_init(|| Regex::new(r"\{([A-Za-z]+):([A-Za-z]+)\}").unwrap())
}

impl Template {
    /// Parse a template string
    ///
    /// Anything shaped like `{word:word}` is a token and must name a known
    /// side and key. Other braces are literal text.
    pub fn parse(raw: &str) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in token_regex().captures_iter(raw) {
            let whole = caps.get(0).map(|m| (m.start(), m.end(), m.as_str()));
            let Some((start, end, token)) = whole else {
                continue;
            };

            if start > last {
                segments.push(Segment::Literal(raw[last..start].to_string()));
            }

            let side = &caps[1];
            let key: NamingKey = caps[2].parse().map_err(|_| TemplateError::UnknownKey {
                token: token.to_string(),
                key: caps[2].to_string(),
            })?;

            segments.push(match side {
                "from" => Segment::From(key),
                "to" => Segment::To(key),
                _ => {
                    return Err(TemplateError::UnknownSide {
                        token: token.to_string(),
                        side: side.to_string(),
                    })
                }
            });

            last = end;
        }

        if last < raw.len() {
            segments.push(Segment::Literal(raw[last..].to_string()));
        }

        Ok(Self { segments })
    }

    /// Substitute every token in one pass
    pub fn resolve(&self, source: &NamingKeys, target: &NamingKeys) -> String {
        self.segments
            .iter()
            .map(|segment| match segment {
                Segment::Literal(text) => text.as_str(),
                Segment::From(key) => source.get(*key),
                Segment::To(key) => target.get(*key),
            })
            .collect()
    }
}

/// A parsed search/replace template pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePair {
    pub search: Template,
    pub replace: Template,
}

impl TemplatePair {
    pub fn parse(entry: &TemplateEntry) -> Result<Self, TemplateError> {
        Ok(Self {
            search: Template::parse(&entry.search)?,
            replace: Template::parse(&entry.replace)?,
        })
    }
}

/// Resolve template pairs into an ordered substitution map
///
/// Pairs whose search text resolves to the empty string are dropped, since
/// an empty literal would match between every character.
pub fn resolve_templates(
    source: &NamingKeys,
    target: &NamingKeys,
    templates: &[TemplatePair],
) -> Result<Vec<Substitution>> {
    let mut substitutions = Vec::with_capacity(templates.len());
    for pair in templates {
        let pattern = pair.search.resolve(source, target);
        if pattern.is_empty() {
            continue;
        }
        let replacement = pair.replace.resolve(source, target);
        substitutions.push(Substitution::new(pattern, replacement)?);
    }
    Ok(substitutions)
}
