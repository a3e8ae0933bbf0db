//! Implementation of the `cldr-plural check` command.

use std::collections::BTreeMap;
use std::fmt::{self, Display, Formatter};
use std::path::{Path, PathBuf};

use cldr_plural::{PluralCategory, PluralRuleSet, RulePairs, RuleSetError};
use miette::{IntoDiagnostic, Report, Result};
use serde::Serialize;
use tracing::{debug, warn};

use crate::data::{load_plural_data, validate_locale, RuleType};
use crate::output::table::{format_locale_table, LocaleReport};
use crate::output::{print_error, RuleDiagnostic};

/// Arguments for the check command.
#[derive(Debug, clap::Args)]
pub struct CheckArgs {
    /// Plural data files to check (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Only check these locales (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub locale: Vec<String>,

    /// Rule family to read from CLDR supplemental files
    #[arg(long = "type", value_enum, default_value_t = RuleType::Cardinal)]
    pub rule_type: RuleType,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for one checked locale.
#[derive(Debug, Serialize)]
struct CheckJson {
    file: String,
    locale: String,
    rules: BTreeMap<PluralCategory, String>,
    error: Option<String>,
}

/// Why a locale failed to check.
enum LocaleFailure {
    NotFound,
    InvalidLocale(String),
    Rules(RuleSetError),
}

impl Display for LocaleFailure {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            LocaleFailure::NotFound => f.write_str("locale not found"),
            LocaleFailure::InvalidLocale(message) => f.write_str(message),
            LocaleFailure::Rules(err) => write!(f, "{err}"),
        }
    }
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let mut reports: Vec<LocaleReport> = Vec::new();
    let mut json_data: Vec<CheckJson> = Vec::new();
    let mut failures = 0usize;

    for path in &args.files {
        let data = match load_plural_data(path, args.rule_type) {
            Ok(data) => data,
            Err(err) => {
                print_error(&err);
                return Ok(err.exit_code());
            }
        };

        let mut results: Vec<(String, Result<PluralRuleSet, LocaleFailure>)> = Vec::new();
        for wanted in &args.locale {
            if !data.contains_key(wanted) {
                warn!(locale = %wanted, path = %path.display(), "locale not found");
                results.push((wanted.clone(), Err(LocaleFailure::NotFound)));
            }
        }
        for (locale, rules) in &data {
            if !args.locale.is_empty() && !args.locale.contains(locale) {
                continue;
            }
            debug!(%locale, "checking plural rules");
            results.push((locale.clone(), check_locale(locale, rules)));
        }

        for (locale, result) in results {
            let (rules, error) = match result {
                Ok(rule_set) => (rule_set.rules(), None),
                Err(failure) => {
                    failures += 1;
                    if !args.json {
                        report_failure(path, &locale, data.get(&locale), &failure);
                    }
                    (BTreeMap::new(), Some(failure.to_string()))
                }
            };

            reports.push(LocaleReport {
                locale: locale.clone(),
                categories: rules.keys().map(ToString::to_string).collect(),
                error: error.clone(),
            });
            json_data.push(CheckJson {
                file: path.display().to_string(),
                locale,
                rules,
                error,
            });
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&json_data).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        println!("{}", format_locale_table(&reports));
        println!(
            "\nChecked {} locale(s), {} failed",
            reports.len(),
            failures
        );
    }

    if failures > 0 {
        Ok(exitcode::DATAERR)
    } else {
        Ok(exitcode::OK)
    }
}

/// Validate the locale key and build its rule set.
fn check_locale(
    locale: &str,
    rules: &RulePairs,
) -> Result<PluralRuleSet, LocaleFailure> {
    validate_locale(locale).map_err(LocaleFailure::InvalidLocale)?;
    PluralRuleSet::new(rules.iter().map(|(tag, rule)| (tag.as_str(), rule.as_str())))
        .map_err(LocaleFailure::Rules)
}

/// Print a failure to stderr, with a source diagnostic for malformed rules.
fn report_failure(
    path: &Path,
    locale: &str,
    rules: Option<&RulePairs>,
    failure: &LocaleFailure,
) {
    if let LocaleFailure::Rules(RuleSetError::InvalidRule { tag, source }) = failure {
        if let Some(rule) = rules.and_then(|rules| rules.rule(tag.as_str())) {
            let name = format!("{}:{locale}/{tag}", path.display());
            let diagnostic = RuleDiagnostic::from_parse_error(&name, rule, source);
            eprintln!("{:?}", Report::new(diagnostic));
            return;
        }
    }

    print_error(format!("{}: {}: {}", path.display(), locale, failure));
}
