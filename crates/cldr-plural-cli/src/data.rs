//! Loading plural rules from CLDR JSON data files.
//!
//! Two layouts are accepted:
//! - CLDR's `supplemental/plurals.json` and `ordinals.json`, keyed by
//!   `pluralRule-count-<tag>`
//! - a flat `{"<locale>": {"<tag>": "<rule>"}}` map

use std::collections::BTreeMap;
use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use clap::ValueEnum;
use cldr_plural::RulePairs;
use icu_locale_core::LanguageIdentifier;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Key prefix CLDR uses for each category's rule.
const RULE_KEY_PREFIX: &str = "pluralRule-count-";

/// Raw `(tag, rule)` pairs per locale. Within a locale, pairs keep file
/// order and repeated tags.
pub type PluralData = BTreeMap<String, RulePairs>;

/// Which CLDR rule family to read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum RuleType {
    #[default]
    Cardinal,
    Ordinal,
}

impl RuleType {
    fn section(self) -> &'static str {
        match self {
            RuleType::Cardinal => "plurals-type-cardinal",
            RuleType::Ordinal => "plurals-type-ordinal",
        }
    }
}

/// Errors that occur while loading a data file.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}': {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("'{path}' has no {section} section")]
    MissingSection { path: PathBuf, section: &'static str },
}

impl DataError {
    /// Process exit code for this failure: unreadable input is `NOINPUT`,
    /// anything wrong with the contents is `DATAERR`.
    pub fn exit_code(&self) -> i32 {
        match self {
            DataError::Io { .. } => exitcode::NOINPUT,
            DataError::Json { .. } | DataError::MissingSection { .. } => exitcode::DATAERR,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PluralFile {
    Cldr { supplemental: Supplemental },
    Flat(BTreeMap<String, RulePairs>),
}

#[derive(Deserialize)]
struct Supplemental {
    #[serde(rename = "plurals-type-cardinal")]
    cardinal: Option<BTreeMap<String, RulePairs>>,
    #[serde(rename = "plurals-type-ordinal")]
    ordinal: Option<BTreeMap<String, RulePairs>>,
}

/// Read and parse a plural data file.
pub fn load_plural_data(path: &Path, rule_type: RuleType) -> Result<PluralData, DataError> {
    let content = read_to_string(path).map_err(|source| DataError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_plural_data(path, &content, rule_type)
}

/// Parse plural data from JSON text. `path` is only used in error messages.
pub fn parse_plural_data(
    path: &Path,
    content: &str,
    rule_type: RuleType,
) -> Result<PluralData, DataError> {
    let file: PluralFile = serde_json::from_str(content).map_err(|source| DataError::Json {
        path: path.to_path_buf(),
        source,
    })?;

    let locales = match file {
        PluralFile::Cldr { supplemental } => match rule_type {
            RuleType::Cardinal => supplemental.cardinal,
            RuleType::Ordinal => supplemental.ordinal,
        }
        .ok_or_else(|| DataError::MissingSection {
            path: path.to_path_buf(),
            section: rule_type.section(),
        })?,
        PluralFile::Flat(locales) => locales,
    };

    debug!(path = %path.display(), locales = locales.len(), "loaded plural data");
    Ok(locales
        .into_iter()
        .map(|(locale, rules)| {
            let rules = rules
                .into_iter()
                .map(|(key, rule)| (tag_from_key(&key).to_string(), rule))
                .collect();
            (locale, rules)
        })
        .collect())
}

/// Strip CLDR's `pluralRule-count-` prefix, leaving other keys untouched.
fn tag_from_key(key: &str) -> &str {
    key.strip_prefix(RULE_KEY_PREFIX).unwrap_or(key)
}

/// Check that a data key is a well-formed locale identifier.
///
/// CLDR's `root` locale is accepted as-is.
pub fn validate_locale(locale: &str) -> Result<(), String> {
    if locale == "root" {
        return Ok(());
    }
    locale
        .parse::<LanguageIdentifier>()
        .map(|_| ())
        .map_err(|e| format!("invalid locale identifier '{locale}': {e}"))
}
