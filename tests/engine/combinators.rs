//! Integration tests for rule combinators
//!
//! Tests AND, OR, NOT, and the n-ary helpers, including detail accumulation.

use rulekit_engine::{ErrorKind, NodeKind, Rule, RuleKind, ensure, named};

fn at_least(limit: i32) -> Rule<i32> {
    Rule::create(named(format!(">={limit}"), move |n: &i32| {
        ensure(*n >= limit, format!("must be at least {limit}"))
    }))
}

fn at_most(limit: i32) -> Rule<i32> {
    Rule::create(named(format!("<={limit}"), move |n: &i32| {
        ensure(*n <= limit, format!("must be at most {limit}"))
    }))
}

// =============================================================================
// AND
// =============================================================================

#[test]
fn and_collects_every_failure() {
    let rule = at_least(10).and(&at_most(0));
    let evaluation = rule.evaluate(&5);

    assert!(!evaluation.is_satisfied());
    assert_eq!(
        evaluation.details().to_vec(),
        vec!["must be at least 10", "must be at most 0"]
    );
}

#[test]
fn and_satisfied_has_no_details() {
    let rule = at_least(0).and(&at_most(10));
    let evaluation = rule.evaluate(&5);

    assert!(evaluation.is_satisfied());
    assert!(evaluation.details().is_empty());
}

#[test]
fn and_reports_repeated_message_once() {
    let rule = at_least(3).and(&at_least(3));
    assert_eq!(rule.evaluate(&1).details().len(), 1);
}

// =============================================================================
// OR
// =============================================================================

#[test]
fn or_satisfied_by_either_branch() {
    let rule = at_most(0).or(&at_least(10));

    assert!(rule.is_satisfied_by(&-1));
    assert!(rule.is_satisfied_by(&11));
    assert!(!rule.is_satisfied_by(&5));
}

#[test]
fn or_keeps_failing_branch_details() {
    let rule = at_most(0).or(&at_least(10));
    let evaluation = rule.evaluate(&11);

    assert!(evaluation.is_satisfied());
    assert_eq!(evaluation.details().to_vec(), vec!["must be at most 0"]);
}

#[test]
fn or_unsatisfied_collects_both() {
    let rule = at_most(0).or(&at_least(10));
    assert_eq!(
        rule.evaluate(&5).details().to_vec(),
        vec!["must be at most 0", "must be at least 10"]
    );
}

// =============================================================================
// NOT
// =============================================================================

#[test]
fn not_inverts_and_passes_details_through() {
    let rule = at_least(10).not();
    let evaluation = rule.evaluate(&3);

    assert!(evaluation.is_satisfied());
    assert_eq!(evaluation.details().to_vec(), vec!["must be at least 10"]);

    let evaluation = rule.evaluate(&30);
    assert!(!evaluation.is_satisfied());
    assert!(evaluation.details().is_empty());
}

#[test]
fn double_negation_is_original() {
    let rule = at_least(1).and(&at_most(9));
    let twice = rule.not().not();

    assert!(Rule::ptr_eq(&rule, &twice));
    assert_eq!(twice.evaluate(&0), rule.evaluate(&0));
}

#[test]
fn not_of_composite() {
    let in_range = at_least(1).and(&at_most(9));
    let outside = in_range.not();

    assert!(outside.is_satisfied_by(&0));
    assert!(!outside.is_satisfied_by(&5));
    assert_eq!(outside.to_string(), "(not (and >=1 <=9))");
}

// =============================================================================
// Composition
// =============================================================================

#[test]
fn combinators_leave_operands_unchanged() {
    let low = at_least(1);
    let high = at_most(9);
    let _both = low.and(&high);
    let _either = low.or(&high);

    assert_eq!(low.node_kind(), NodeKind::Leaf);
    assert_eq!(high.node_kind(), NodeKind::Leaf);
    assert_eq!(low.to_string(), ">=1");
}

#[test]
fn combined_rule_shares_operands() {
    let low = at_least(1);
    let both = low.and(&at_most(9));

    let RuleKind::And(left, _) = both.kind() else {
        panic!("expected and node");
    };
    assert!(Rule::ptr_eq(left, &low));
}

#[test]
fn and_spec_and_or_spec() {
    let rule = at_least(0)
        .and_spec(|n: &i32| ensure(*n % 2 == 0, "must be even"))
        .or_spec(|n: &i32| ensure(*n == 7, "must be seven"));

    assert!(rule.is_satisfied_by(&4));
    assert!(rule.is_satisfied_by(&7));
    assert_eq!(
        rule.evaluate(&-3).details().to_vec(),
        vec!["must be at least 0", "must be even", "must be seven"]
    );
}

#[test]
fn all_and_any() {
    let all = Rule::all([at_least(1), at_most(9), at_least(3)]).unwrap();
    assert_eq!(all.leaf_count(), 3);
    assert_eq!(all.depth(), 3);
    assert!(all.is_satisfied_by(&5));
    assert_eq!(
        all.evaluate(&0).details().to_vec(),
        vec!["must be at least 1", "must be at least 3"]
    );

    let any = Rule::any([at_most(0), at_least(10)]).unwrap();
    assert_eq!(any.node_kind(), NodeKind::Or);
    assert!(any.is_satisfied_by(&10));
}

#[test]
fn all_of_nothing_is_an_error() {
    let err = Rule::<i32>::all(Vec::new()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::EmptyComposition { combinator: "and" }
    ));

    let err = Rule::<i32>::any(Vec::new()).unwrap_err();
    assert!(matches!(
        err.kind,
        ErrorKind::EmptyComposition { combinator: "or" }
    ));
    let context = err.context.expect("context attached");
    assert_eq!(context.stack, vec!["Rule::any"]);
    assert_eq!(context.to_string(), "  in Rule::any\n");
}

#[test]
fn evaluations_are_independent() {
    let rule = at_least(10).and(&at_most(0));
    let first = rule.evaluate(&5);
    let second = rule.evaluate(&20);

    assert_eq!(first.details().len(), 2);
    assert_eq!(second.details().to_vec(), vec!["must be at most 0"]);
}
