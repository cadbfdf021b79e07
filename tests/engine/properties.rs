//! Property tests for rule evaluation
//!
//! Checks n-ary AND/OR and negation against a direct computation.

use proptest::prelude::*;
use rulekit_engine::{Rule, ensure};

fn at_least(limit: i8) -> Rule<i8> {
    Rule::create(move |n: &i8| ensure(*n >= limit, format!("must be at least {limit}")))
}

fn expected_details(limits: &[i8], value: i8) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for limit in limits.iter().filter(|l| value < **l) {
        let message = format!("must be at least {limit}");
        if !out.contains(&message) {
            out.push(message);
        }
    }
    out
}

/// Left-fold model of OR: a satisfied operand contributes no details.
fn expected_any(limits: &[i8], value: i8) -> (bool, Vec<String>) {
    let mut satisfied = false;
    let mut details: Vec<String> = Vec::new();
    for limit in limits {
        let leaf_ok = value >= *limit;
        let mut next = if satisfied { Vec::new() } else { details };
        if !leaf_ok {
            let message = format!("must be at least {limit}");
            if !next.contains(&message) {
                next.push(message);
            }
        }
        satisfied = satisfied || leaf_ok;
        details = next;
    }
    (satisfied, details)
}

proptest! {
    #[test]
    fn all_matches_every(limits in prop::collection::vec(any::<i8>(), 1..12), value in any::<i8>()) {
        let rule = Rule::all(limits.iter().copied().map(at_least)).unwrap();
        let evaluation = rule.evaluate(&value);

        prop_assert_eq!(evaluation.is_satisfied(), limits.iter().all(|l| value >= *l));
        prop_assert_eq!(evaluation.details().to_vec(), expected_details(&limits, value));
    }

    #[test]
    fn any_matches_some(limits in prop::collection::vec(any::<i8>(), 1..12), value in any::<i8>()) {
        let rule = Rule::any(limits.iter().copied().map(at_least)).unwrap();
        let evaluation = rule.evaluate(&value);

        let (satisfied, details) = expected_any(&limits, value);

        prop_assert_eq!(evaluation.is_satisfied(), satisfied);
        prop_assert_eq!(evaluation.is_satisfied(), limits.iter().any(|l| value >= *l));
        prop_assert_eq!(evaluation.details().to_vec(), details);
    }

    #[test]
    fn negated_all_keeps_details(limits in prop::collection::vec(any::<i8>(), 1..12), value in any::<i8>()) {
        let rule = Rule::all(limits.iter().copied().map(at_least)).unwrap();
        let plain = rule.evaluate(&value);
        let negated = rule.not().evaluate(&value);

        prop_assert_eq!(negated.is_satisfied(), !plain.is_satisfied());
        if plain.is_satisfied() {
            prop_assert!(negated.details().is_empty());
        } else {
            prop_assert_eq!(negated.details(), plain.details());
        }
    }
}
