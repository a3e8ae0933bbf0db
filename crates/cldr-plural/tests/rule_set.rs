//! Integration tests for PluralRuleSet construction and projections.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use cldr_plural::compiler::CStyleCompiler;
use cldr_plural::parser::{Condition, Expr, Operand};
use cldr_plural::{ParseError, PluralCategory, PluralRuleSet, RulePairs, RuleSetError};

// =========================================================================
// Construction
// =========================================================================

#[test]
fn single_rule_from_array() {
    let rules = PluralRuleSet::new([("one", "n is 1")]).unwrap();
    assert_eq!(rules.tags(), BTreeSet::from([PluralCategory::One]));
    assert_eq!(
        rules.canonical_text(PluralCategory::One).as_deref(),
        Some("n is 1")
    );
    assert_eq!(rules.len(), 1);
}

#[test]
fn compound_rule_round_trips() {
    let text = "n mod 10 is 1 and n mod 100 is not 11";
    let rules = PluralRuleSet::new([("few", text)]).unwrap();
    assert_eq!(rules.canonical_text(PluralCategory::Few).as_deref(), Some(text));
    assert_eq!(
        rules.condition(PluralCategory::Few),
        Some(&Condition::and(
            Condition::Is(Expr::Mod(Operand::N, 10), 1),
            Condition::IsNot(Expr::Mod(Operand::N, 100), 11),
        ))
    );
}

#[test]
fn accepts_hash_map() {
    let mut input = HashMap::new();
    input.insert("one".to_string(), "n is 1".to_string());
    input.insert("two".to_string(), "n is 2".to_string());
    let rules = PluralRuleSet::new(input).unwrap();
    assert_eq!(
        rules.tags(),
        BTreeSet::from([PluralCategory::One, PluralCategory::Two])
    );
}

#[test]
fn accepts_vec_of_owned_pairs() {
    let input = vec![
        ("many".to_string(), "n in 5..20".to_string()),
        ("zero".to_string(), "n = 0".to_string()),
    ];
    let rules = PluralRuleSet::new(input).unwrap();
    let order: Vec<PluralCategory> = rules.conditions().map(|(c, _)| c).collect();
    assert_eq!(order, [PluralCategory::Zero, PluralCategory::Many]);
}

#[test]
fn sample_only_rules_are_omitted() {
    let rules = PluralRuleSet::new([
        ("one", "i = 1 and v = 0 @integer 1"),
        ("other", " @integer 0, 2~16, 100, 1000, 10000, 100000, 1000000, …"),
    ])
    .unwrap();
    assert!(rules.contains(PluralCategory::One));
    assert!(!rules.contains(PluralCategory::Other));
    assert_eq!(rules.condition(PluralCategory::Other), None);
    assert_eq!(rules.canonical_text(PluralCategory::Other), None);
}

#[test]
fn all_empty_rules_give_empty_set() {
    let rules = PluralRuleSet::new([("other", "@integer 0~15")]).unwrap();
    assert!(rules.is_empty());
    assert!(rules.tags().is_empty());
}

#[test]
fn explicit_other_condition_is_kept() {
    let rules = PluralRuleSet::new([("other", "n is not 1")]).unwrap();
    assert_eq!(rules.tags(), BTreeSet::from([PluralCategory::Other]));
}

// =========================================================================
// Validation errors
// =========================================================================

#[test]
fn unknown_tag_is_rejected() {
    let err = PluralRuleSet::new([("one", "n is 1"), ("several", "n in 2..4")]).unwrap_err();
    assert_eq!(
        err,
        RuleSetError::UnknownTag {
            tag: "several".to_string(),
            suggestions: vec![],
        }
    );
    assert_eq!(err.to_string(), "unknown tag 'several'");
}

#[test]
fn unknown_tag_suggests_close_matches() {
    let err = PluralRuleSet::new([("onee", "n is 1")]).unwrap_err();
    match &err {
        RuleSetError::UnknownTag { suggestions, .. } => assert_eq!(suggestions[0], "one"),
        other => panic!("expected UnknownTag, got {other:?}"),
    }
    assert!(err.to_string().contains("did you mean 'one'"));
}

#[test]
fn tags_are_case_sensitive() {
    assert!(matches!(
        PluralRuleSet::new([("One", "n is 1")]),
        Err(RuleSetError::UnknownTag { .. })
    ));
}

#[test]
fn duplicate_tag_is_rejected() {
    let err = PluralRuleSet::new([("one", "n is 1"), ("one", "n is 2")]).unwrap_err();
    assert_eq!(
        err,
        RuleSetError::DuplicateTag {
            tag: PluralCategory::One
        }
    );
    assert_eq!(err.to_string(), "tag 'one' defined twice");
}

#[test]
fn duplicate_empty_tag_is_still_rejected() {
    let err = PluralRuleSet::new([("other", ""), ("other", "@integer 1")]).unwrap_err();
    assert!(matches!(err, RuleSetError::DuplicateTag { .. }));
}

#[test]
fn parse_error_carries_tag() {
    let err = PluralRuleSet::new([("one", "n is 1"), ("few", "n not = 3")]).unwrap_err();
    match &err {
        RuleSetError::InvalidRule { tag, source } => {
            assert_eq!(*tag, PluralCategory::Few);
            assert!(matches!(source, ParseError::NegatedOperator { .. }));
        }
        other => panic!("expected InvalidRule, got {other:?}"),
    }
    assert!(err.to_string().starts_with("invalid rule for tag 'few'"));
}

// =========================================================================
// Projections
// =========================================================================

#[test]
fn rules_map_uses_canonical_text() {
    let rules = PluralRuleSet::new([
        ("one", "v = 0 and i % 10 = 1 and i % 100 != 11"),
        ("few", "v = 0 and i % 10 = 2..4 and i % 100 != 12..14"),
    ])
    .unwrap();
    let expected = BTreeMap::from([
        (
            PluralCategory::One,
            "v in 0 and i mod 10 in 1 and i mod 100 not in 11".to_string(),
        ),
        (
            PluralCategory::Few,
            "v in 0 and i mod 10 in 2..4 and i mod 100 not in 12..14".to_string(),
        ),
    ]);
    assert_eq!(rules.rules(), expected);
}

#[test]
fn compile_with_other_backend() {
    let rules = PluralRuleSet::new([("zero", "n = 0"), ("one", "n is 1")]).unwrap();
    let compiled = rules.compile_with(&CStyleCompiler::default());
    assert_eq!(compiled[&PluralCategory::Zero], "((n == 0))");
    assert_eq!(compiled[&PluralCategory::One], "(n == 1)");
}

#[test]
fn display_lists_rules_in_category_order() {
    let rules = PluralRuleSet::new([
        ("many", "n in 11..99"),
        ("one", "n is 1"),
        ("other", ""),
    ])
    .unwrap();
    assert_eq!(rules.to_string(), "one: n is 1, many: n in 11..99");
}

// =========================================================================
// Serialization
// =========================================================================

#[test]
fn serializes_as_canonical_text_map() {
    let rules = PluralRuleSet::new([("one", "n = 1 @integer 1"), ("two", "n = 2")]).unwrap();
    let json = serde_json::to_string(&rules).unwrap();
    assert_eq!(json, r#"{"one":"n in 1","two":"n in 2"}"#);
}

#[test]
fn deserializes_through_validation() {
    let rules: PluralRuleSet =
        serde_json::from_str(r#"{"one": "n is 1", "other": "@integer 2~9"}"#).unwrap();
    assert_eq!(rules.tags(), BTreeSet::from([PluralCategory::One]));

    let err = serde_json::from_str::<PluralRuleSet>(r#"{"single": "n is 1"}"#).unwrap_err();
    assert!(err.to_string().contains("unknown tag 'single'"));

    let err = serde_json::from_str::<PluralRuleSet>(r#"{"one": "n is"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid rule for tag 'one'"));
}

#[test]
fn serde_round_trip_preserves_rule_set() {
    let rules = PluralRuleSet::new([
        ("zero", "n % 10 = 0 or n % 100 = 11..19 or v = 2 and f % 100 = 11..19"),
        ("one", "n % 10 = 1 and n % 100 != 11 or v = 2 and f % 10 = 1 and f % 100 != 11"),
    ])
    .unwrap();
    let json = serde_json::to_string(&rules).unwrap();
    let back: PluralRuleSet = serde_json::from_str(&json).unwrap();
    assert_eq!(back, rules);
}

#[test]
fn repeated_json_key_is_rejected() {
    let err = serde_json::from_str::<PluralRuleSet>(r#"{"one": "n is 1", "one": "n is 2"}"#)
        .unwrap_err();
    assert!(err.to_string().contains("tag 'one' defined twice"));

    let err = serde_json::from_str::<PluralRuleSet>(r#"{"other": "", "few": "n is 3", "other": ""}"#)
        .unwrap_err();
    assert!(err.to_string().contains("tag 'other' defined twice"));
}

#[test]
fn rule_pairs_keep_document_order() {
    let pairs: RulePairs =
        serde_json::from_str(r#"{"one": "n is 1", "few": "n in 2..4", "one": "n is 2"}"#).unwrap();
    let tags: Vec<&str> = pairs.iter().map(|(tag, _)| tag.as_str()).collect();
    assert_eq!(tags, ["one", "few", "one"]);
    assert_eq!(pairs.rule("one"), Some("n is 1"));

    let err = PluralRuleSet::try_from(pairs).unwrap_err();
    assert_eq!(
        err,
        RuleSetError::DuplicateTag {
            tag: PluralCategory::One
        }
    );
}
