// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles `wordsieve.toml` parsing with version validation and unknown key
//! warnings. A document lists blacklisted terms, whitelisted strings and the
//! transformers applied to each side:
//!
//! ```toml
//! version = 1
//! whitelist = ["pen is", "scunthorpe"]
//! forked_traversal_limit = 32
//!
//! [[term]]
//! id = 1
//! pattern = "|ass|"
//!
//! [transformers]
//! blacklist = [
//!     { kind = "confusables" },
//!     { kind = "lowercase" },
//!     { kind = "collapse-duplicates", threshold = 1, custom = { s = 2 } },
//! ]
//! whitelist = [{ kind = "lowercase" }]
//! ```

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::matcher::MatcherOptions;
use crate::pattern::{BlacklistedTerm, parse as parse_pattern};
use crate::transform::{Transformer, TransformerPipeline, builtin};

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Blacklisted terms, as `[[term]]` tables.
    #[serde(default, rename = "term")]
    pub terms: Vec<TermConfig>,

    /// Whitelisted strings.
    #[serde(default)]
    pub whitelist: Vec<String>,

    #[serde(default)]
    pub transformers: TransformersConfig,

    /// Overrides the default forked traversal limit.
    #[serde(default)]
    pub forked_traversal_limit: Option<usize>,
}

/// One blacklisted term.
#[derive(Debug, Clone, Deserialize)]
pub struct TermConfig {
    pub id: i64,
    /// Pattern source in the matcher's pattern syntax.
    pub pattern: String,
}

/// Transformer lists for each side.
#[derive(Debug, Default, Deserialize)]
pub struct TransformersConfig {
    #[serde(default)]
    pub blacklist: Vec<TransformerConfig>,

    #[serde(default)]
    pub whitelist: Vec<TransformerConfig>,
}

/// A built-in transformer, selected by `kind`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum TransformerConfig {
    Lowercase,
    LeetSpeak,
    Confusables,
    SkipNonAlphabetic,
    /// Map every character of each value onto its key.
    Remap { map: BTreeMap<String, String> },
    CollapseDuplicates {
        #[serde(default = "TransformerConfig::default_threshold")]
        threshold: usize,
        #[serde(default)]
        custom: BTreeMap<String, usize>,
    },
}

impl TransformerConfig {
    fn default_threshold() -> usize {
        1
    }

    /// Resolve to a [`Transformer`].
    pub fn build(&self) -> Result<Transformer> {
        Ok(match self {
            TransformerConfig::Lowercase => builtin::to_ascii_lower_case(),
            TransformerConfig::LeetSpeak => builtin::resolve_leet_speak(),
            TransformerConfig::Confusables => builtin::resolve_confusables(),
            TransformerConfig::SkipNonAlphabetic => builtin::skip_non_alphabetic(),
            TransformerConfig::Remap { map } => {
                let mut entries = Vec::with_capacity(map.len());
                for (target, sources) in map {
                    entries.push((single_char(target, "remap")?, sources.as_str()));
                }
                builtin::remap_characters(entries)
            }
            TransformerConfig::CollapseDuplicates { threshold, custom } => {
                let mut thresholds = HashMap::with_capacity(custom.len());
                for (key, limit) in custom {
                    thresholds.insert(single_char(key, "collapse-duplicates")?, *limit);
                }
                builtin::collapse_duplicates(*threshold, thresholds)
            }
        })
    }
}

fn single_char(key: &str, kind: &str) -> Result<char> {
    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(Error::Config {
            message: format!("{kind} key `{key}` must be a single character"),
            path: None,
        }),
    }
}

fn build_pipeline(list: &[TransformerConfig]) -> Result<TransformerPipeline> {
    list.iter().map(TransformerConfig::build).collect()
}

impl Config {
    /// Parse every pattern and resolve transformers.
    pub fn into_options(self) -> Result<MatcherOptions> {
        let mut blacklisted_terms = Vec::with_capacity(self.terms.len());
        for term in &self.terms {
            blacklisted_terms.push(BlacklistedTerm::new(term.id, parse_pattern(&term.pattern)?));
        }

        Ok(MatcherOptions {
            blacklisted_terms,
            whitelisted_terms: self.whitelist,
            blacklist_transformers: build_pipeline(&self.transformers.blacklist)?,
            whitelist_transformers: build_pipeline(&self.transformers.whitelist)?,
            forked_traversal_limit: self.forked_traversal_limit,
        })
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &[
    "version",
    "term",
    "whitelist",
    "transformers",
    "forked_traversal_limit",
];

const KNOWN_TERM_KEYS: &[&str] = &["id", "pattern"];

const KNOWN_TRANSFORMER_SIDES: &[&str] = &["blacklist", "whitelist"];

/// Load and validate config from a file path.
pub fn load(path: &Path) -> Result<Config> {
    parse(&read(path)?, path)
}

/// Load config with warnings for unknown keys.
pub fn load_with_warnings(path: &Path) -> Result<Config> {
    parse_with_warnings(&read(path)?, path)
}

fn read(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn config_error(path: &Path, message: impl Into<String>) -> Error {
    Error::Config {
        message: message.into(),
        path: Some(path.to_path_buf()),
    }
}

/// Parse config from string content. Unknown keys are ignored silently.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let version_check: VersionOnly =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    let version = version_check
        .version
        .ok_or_else(|| config_error(path, "missing required field: version"))?;

    if version != SUPPORTED_VERSION {
        return Err(config_error(
            path,
            format!("unsupported config version {version} (supported: {SUPPORTED_VERSION})"),
        ));
    }

    toml::from_str(content).map_err(|e| config_error(path, e.to_string()))
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let table: toml::Table =
        toml::from_str(content).map_err(|e| config_error(path, e.to_string()))?;

    for key in table.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    if let Some(toml::Value::Array(terms)) = table.get("term") {
        for (index, term) in terms.iter().enumerate() {
            let Some(fields) = term.as_table() else {
                continue;
            };
            for key in fields.keys() {
                if !KNOWN_TERM_KEYS.contains(&key.as_str()) {
                    warn_unknown_key(path, &format!("term[{index}].{key}"));
                }
            }
        }
    }

    if let Some(toml::Value::Table(sides)) = table.get("transformers") {
        for key in sides.keys() {
            if !KNOWN_TRANSFORMER_SIDES.contains(&key.as_str()) {
                warn_unknown_key(path, &format!("transformers.{key}"));
            }
        }
    }

    parse(content, path)
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!(
        "{}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
