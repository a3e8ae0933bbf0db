//! Implementation of the `cldr-plural compile` command.

use std::path::{Path, PathBuf};

use clap::ValueEnum;
use cldr_plural::compiler::{CStyleCompiler, CanonicalCompiler, RuleCompiler};
use cldr_plural::{parse_rule, PluralRuleSet, RuleSetError};
use miette::{miette, IntoDiagnostic, Report, Result};
use serde::Serialize;

use crate::data::{load_plural_data, validate_locale, RuleType};
use crate::output::{print_error, RuleDiagnostic};

/// Output syntax for compiled rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// CLDR rule text
    Canonical,
    /// C-family boolean expressions
    C,
}

/// Arguments for the compile command.
#[derive(Debug, clap::Args)]
pub struct CompileArgs {
    /// Rule text to compile
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub rule: Option<String>,

    /// Plural data file (.json) to read a locale's rules from
    #[arg(long, requires = "locale")]
    pub file: Option<PathBuf>,

    /// Locale to compile from --file
    #[arg(long)]
    pub locale: Option<String>,

    /// Rule family to read from CLDR supplemental files
    #[arg(long = "type", value_enum, default_value_t = RuleType::Cardinal)]
    pub rule_type: RuleType,

    /// Output syntax
    #[arg(long, value_enum, default_value_t = Target::Canonical)]
    pub target: Target,

    /// Prefix for operand names in C output (e.g. "ops.")
    #[arg(long, default_value = "")]
    pub operand_prefix: String,

    /// Suffix for integer literals in C output (e.g. "u64")
    #[arg(long, default_value = "")]
    pub value_suffix: String,

    /// Integrality check for `in` ranges on n in C output, with {x} for the
    /// expression (default: "fmod({x}, 1) == 0")
    #[arg(long)]
    pub integer_test: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for a single compiled rule.
#[derive(Serialize)]
struct RuleJson<'a> {
    rule: &'a str,
    output: Option<String>,
}

/// Run the compile command.
pub fn run_compile(args: CompileArgs) -> Result<i32> {
    let compiler = build_compiler(&args);

    match (&args.rule, &args.file, &args.locale) {
        (Some(rule), _, _) => compile_rule(rule, compiler.as_ref(), args.json),
        (None, Some(path), Some(locale)) => {
            compile_locale(path, locale, args.rule_type, compiler.as_ref(), args.json)
        }
        _ => Err(miette!("either --rule or --file with --locale is required")),
    }
}

/// Select the backend for `--target`.
fn build_compiler(args: &CompileArgs) -> Box<dyn RuleCompiler> {
    match args.target {
        Target::Canonical => Box::new(CanonicalCompiler),
        Target::C => Box::new(
            CStyleCompiler::builder()
                .operand_prefix(args.operand_prefix.as_str())
                .value_suffix(args.value_suffix.as_str())
                .maybe_integer_test(args.integer_test.as_deref())
                .build(),
        ),
    }
}

fn compile_rule(rule: &str, compiler: &dyn RuleCompiler, json: bool) -> Result<i32> {
    let condition = match parse_rule(rule) {
        Ok(condition) => condition,
        Err(e) => {
            let diagnostic = RuleDiagnostic::from_parse_error("<rule>", rule, &e);
            eprintln!("{:?}", Report::new(diagnostic));
            return Ok(exitcode::DATAERR);
        }
    };
    let output = condition.map(|condition| compiler.compile(&condition));

    if json {
        let json_output = serde_json::to_string_pretty(&RuleJson { rule, output }).into_diagnostic()?;
        println!("{}", json_output);
    } else {
        match output {
            Some(output) => println!("{}", output),
            None => println!("(no condition: the rule only falls back to 'other')"),
        }
    }
    Ok(exitcode::OK)
}

/// Load `locale` from a data file and compile its rule set.
///
/// Problems with the input are reported on stderr and turned into an exit
/// code rather than an error.
fn compile_locale(
    path: &Path,
    locale: &str,
    rule_type: RuleType,
    compiler: &dyn RuleCompiler,
    json: bool,
) -> Result<i32> {
    let data = match load_plural_data(path, rule_type) {
        Ok(data) => data,
        Err(err) => {
            print_error(&err);
            return Ok(err.exit_code());
        }
    };
    let Some(rules) = data.get(locale) else {
        print_error(format!("locale '{}' not found in {}", locale, path.display()));
        return Ok(exitcode::DATAERR);
    };
    if let Err(message) = validate_locale(locale) {
        print_error(message);
        return Ok(exitcode::DATAERR);
    }

    let pairs = rules.iter().map(|(tag, rule)| (tag.as_str(), rule.as_str()));
    let rule_set = match PluralRuleSet::new(pairs) {
        Ok(rule_set) => rule_set,
        Err(RuleSetError::InvalidRule { tag, source }) => {
            let rule = rules.rule(tag.as_str()).unwrap_or_default();
            let name = format!("{}:{locale}/{tag}", path.display());
            eprintln!(
                "{:?}",
                Report::new(RuleDiagnostic::from_parse_error(&name, rule, &source))
            );
            return Ok(exitcode::DATAERR);
        }
        Err(err) => {
            print_error(format!("{}: {}: {}", path.display(), locale, err));
            return Ok(exitcode::DATAERR);
        }
    };

    compile_rule_set(&rule_set, compiler, json)
}

fn compile_rule_set(rule_set: &PluralRuleSet, compiler: &dyn RuleCompiler, json: bool) -> Result<i32> {
    let compiled = rule_set.compile_with(compiler);

    if json {
        let json_output = serde_json::to_string_pretty(&compiled).into_diagnostic()?;
        println!("{}", json_output);
    } else if compiled.is_empty() {
        println!("(no explicit categories: everything is 'other')");
    } else {
        for (category, code) in compiled {
            println!("{}: {}", category, code);
        }
    }
    Ok(exitcode::OK)
}
