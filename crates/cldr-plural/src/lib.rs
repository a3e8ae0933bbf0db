//! CLDR plural rule parsing and compilation.
//!
//! Plural rules such as `n mod 10 = 1 and n mod 100 != 11` are tokenized,
//! parsed into a typed AST, and re-rendered through pluggable
//! [`compiler`] backends: canonical CLDR text for round-trip validation, or
//! boolean expressions for code generation.
//!
//! ```
//! use cldr_plural::compiler::CStyleCompiler;
//! use cldr_plural::{PluralCategory, PluralRuleSet};
//!
//! let rules = PluralRuleSet::new([
//!     ("one", "n mod 10 is 1 and n mod 100 is not 11"),
//!     ("other", ""),
//! ])
//! .unwrap();
//!
//! assert_eq!(rules.to_string(), "one: n mod 10 is 1 and n mod 100 is not 11");
//!
//! let code = rules.compile_with(&CStyleCompiler::default());
//! assert_eq!(
//!     code[&PluralCategory::One],
//!     "(((n % 10) == 1) && ((n % 100) != 11))"
//! );
//! ```

pub mod compiler;
pub mod parser;
pub mod rule_set;
pub mod types;

pub use compiler::{CStyleCompiler, CanonicalCompiler, RuleCompiler, to_canonical};
pub use parser::{Condition, ParseError, parse_rule};
pub use rule_set::{PluralRuleSet, RulePairs, RuleSetError, compute_suggestions};
pub use types::PluralCategory;
