//! Integration tests for Specifications
//!
//! Tests hand-written specifications, closures, naming, and sharing.

use std::sync::Arc;

use rulekit_engine::{
    NodeKind, Rule, Specification, ValidationFailure, Verdict, ensure, named,
};

struct MinLength(usize);

impl Specification<str> for MinLength {
    fn verify(&self, value: &str) -> Verdict {
        ensure(
            value.chars().count() >= self.0,
            format!("must have at least {} characters", self.0),
        )
    }
}

// =============================================================================
// Leaves
// =============================================================================

#[test]
fn struct_specification_as_leaf() {
    let rule: Rule<str> = Rule::create(MinLength(3));

    assert_eq!(rule.node_kind(), NodeKind::Leaf);
    assert_eq!(rule.label(), "MinLength");
    assert!(rule.is_satisfied_by("abc"));

    let evaluation = rule.evaluate("ab");
    assert!(!evaluation.is_satisfied());
    assert_eq!(
        evaluation.details().to_vec(),
        vec!["must have at least 3 characters"]
    );
}

#[test]
fn closure_specification_as_leaf() {
    let rule = Rule::create(|n: &i32| ensure(*n % 2 == 0, "must be even"));

    assert!(rule.evaluate(&4).is_satisfied());
    assert!(rule.evaluate(&4).details().is_empty());
    assert_eq!(rule.evaluate(&3).details().len(), 1);
}

#[test]
fn named_specification_label() {
    let rule = Rule::create(named("even", |n: &i32| ensure(*n % 2 == 0, "must be even")));
    assert_eq!(rule.label(), "even");
    assert_eq!(rule.to_string(), "even");
}

#[test]
fn failure_built_from_parse_error() {
    let numeric = Rule::create(|s: &str| {
        s.parse::<u32>()
            .map(drop)
            .map_err(|e| ValidationFailure::with_source("must be a number", e))
    });

    assert!(numeric.is_satisfied_by("42"));
    assert_eq!(
        numeric.evaluate("forty").details().to_vec(),
        vec!["must be a number"]
    );
}

// =============================================================================
// Sharing
// =============================================================================

#[test]
fn shared_specification_in_many_rules() {
    let spec: Arc<dyn Specification<str>> = Arc::new(MinLength(2));
    let first = Rule::from_shared(Arc::clone(&spec));
    let second = Rule::from_shared(spec);

    let combined = first.and(&second);
    let evaluation = combined.evaluate("x");

    assert!(!evaluation.is_satisfied());
    assert_eq!(evaluation.details().len(), 1);
}

#[test]
fn specification_reused_across_objects() {
    let rule: Rule<str> = Rule::create(MinLength(2));
    let results: Vec<bool> = ["", "a", "ab", "abc"]
        .iter()
        .map(|s| rule.is_satisfied_by(s))
        .collect();

    assert_eq!(results, vec![false, false, true, true]);
}
