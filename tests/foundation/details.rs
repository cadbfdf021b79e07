//! Integration tests for Details
//!
//! Tests ordering, duplicate suppression, merging, and sharing.

use rulekit_foundation::Details;

// =============================================================================
// Construction
// =============================================================================

#[test]
fn new_details_are_empty() {
    let details: Details = Details::new();
    assert!(details.is_empty());
    assert_eq!(details.len(), 0);
    assert!(details.first().is_none());
}

#[test]
fn collect_drops_repeats() {
    let details: Details = ["b", "a", "b", "c", "a"]
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(details.to_vec(), vec!["b", "a", "c"]);
}

// =============================================================================
// Adding
// =============================================================================

#[test]
fn add_reports_change() {
    let mut details = Details::new();
    assert!(details.add("name".to_string()));
    assert!(!details.add("name".to_string()));
    assert_eq!(details.len(), 1);
}

#[test]
fn add_all_keeps_first_seen_order() {
    let mut details = Details::new();
    details.add("age".to_string());

    let changed = details.add_all(vec![
        "sex".to_string(),
        "age".to_string(),
        "name".to_string(),
        "sex".to_string(),
    ]);

    assert!(changed);
    assert_eq!(details.to_vec(), vec!["age", "sex", "name"]);
}

#[test]
fn add_all_of_known_values_is_unchanged() {
    let mut details: Details = ["x".to_string()].into_iter().collect();
    assert!(!details.add_all(vec!["x".to_string()]));
}

#[test]
fn insert_at_position() {
    let mut details: Details = ["a", "c"].into_iter().map(String::from).collect();

    assert!(details.insert(1, "b".to_string()));
    assert!(!details.insert(0, "c".to_string()));
    assert!(details.insert(99, "z".to_string()));

    assert_eq!(details.to_vec(), vec!["a", "b", "c", "z"]);
}

// =============================================================================
// Merging
// =============================================================================

#[test]
fn merge_appends_unseen_values() {
    let mut left: Details = ["a", "b"].into_iter().map(String::from).collect();
    let right: Details = ["b", "c"].into_iter().map(String::from).collect();

    assert!(left.merge(&right));
    assert_eq!(left.to_vec(), vec!["a", "b", "c"]);
    assert_eq!(right.to_vec(), vec!["b", "c"]);
}

#[test]
fn merge_into_empty_copies() {
    let mut left = Details::new();
    let right: Details = ["only"].into_iter().map(String::from).collect();

    assert!(left.merge(&right));
    assert_eq!(left, right);
}

#[test]
fn clones_are_independent() {
    let original: Details = ["a"].into_iter().map(String::from).collect();
    let mut copy = original.clone();
    copy.add("b".to_string());

    assert_eq!(original.len(), 1);
    assert_eq!(copy.len(), 2);
}

// =============================================================================
// Display
// =============================================================================

#[test]
fn display_joins_entries() {
    let details: Details = ["age cannot be negative", "sex must be 'M' or 'F'"]
        .into_iter()
        .map(String::from)
        .collect();

    assert_eq!(
        details.to_string(),
        "age cannot be negative; sex must be 'M' or 'F'"
    );
}

#[test]
fn details_hold_other_types() {
    let mut codes: Details<u16> = Details::new();
    codes.add(404);
    codes.add(500);
    codes.add(404);

    assert_eq!(codes.iter().copied().collect::<Vec<_>>(), vec![404, 500]);
    assert_eq!(codes.last(), Some(&500));
}
