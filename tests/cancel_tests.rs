//! Letter cancellation integration tests.
//!
//! These tests pin the greedy earliest-match behaviour on realistic names,
//! including the pair order it produces.

use flames::cancel::cancel_letters;

// =============================================================================
// Basic Cases
// =============================================================================

/// Test that two empty names produce a degenerate zero result.
#[test]
fn test_empty_pair() {
    let c = cancel_letters("", "");
    assert_eq!(c.matched_indices_a, Vec::<usize>::new());
    assert_eq!(c.matched_indices_b, Vec::<usize>::new());
    assert_eq!(c.remaining, 0);
}

/// Test that names with only non-letters behave like empty names.
#[test]
fn test_non_letter_names() {
    let c = cancel_letters("123", "!! ??");
    assert_eq!(c.pair_count(), 0);
    assert_eq!(c.remaining, 0);
}

/// Test the worked example: Tom and Kate share one 't'.
#[test]
fn test_tom_kate() {
    let c = cancel_letters("Tom", "Kate");
    assert_eq!(c.matched_indices_a, vec![0]);
    assert_eq!(c.matched_indices_b, vec![2]);
    assert_eq!(c.remaining, 5);
}

/// Test that identical names cancel fully.
#[test]
fn test_same_name() {
    let c = cancel_letters("ana", "ana");
    assert_eq!(c.matched_indices_a, vec![0, 1, 2]);
    assert_eq!(c.matched_indices_b, vec![0, 1, 2]);
    assert_eq!(c.remaining, 0);
}

// =============================================================================
// Matching Order
// =============================================================================

/// Test that the second list follows pairing order, not sorted order.
#[test]
fn test_pairing_order_preserved() {
    let c = cancel_letters("Alex", "Emma");
    assert_eq!(c.matched_indices_a, vec![0, 2]);
    assert_eq!(c.matched_indices_b, vec![3, 0]);
    assert_eq!(c.remaining, 4);
}

/// Test that repeated letters pair with the earliest unused partner.
#[test]
fn test_repeated_letters() {
    let c = cancel_letters("anna", "nana");
    assert_eq!(c.pairs().collect::<Vec<_>>(), vec![(0, 1), (1, 0), (2, 2), (3, 3)]);
    assert_eq!(c.remaining, 0);
}

/// Test punctuation and digits are dropped before indexing.
#[test]
fn test_indices_refer_to_normalized_names() {
    let c = cancel_letters("Mary-Jane 2", "Peter Parker");
    assert_eq!(c.name_a.as_str(), "maryjane");
    assert_eq!(c.name_b.as_str(), "peterparker");
    assert_eq!(c.matched_indices_a, vec![1, 2, 7]);
    assert_eq!(c.matched_indices_b, vec![6, 4, 1]);
    assert_eq!(c.remaining, 13);
}

/// Test that matching is case-insensitive.
#[test]
fn test_case_insensitive() {
    let upper = cancel_letters("ROMEO", "JULIET");
    let lower = cancel_letters("romeo", "juliet");
    assert_eq!(upper, lower);
    assert_eq!(upper.remaining, 9);
}

/// Test that argument order can change the pairs but not the count.
#[test]
fn test_argument_order() {
    let ab = cancel_letters("aab", "ab");
    let ba = cancel_letters("ab", "aab");
    assert_eq!(ab.remaining, ba.remaining);
    assert_eq!(ba.matched_indices_a, vec![0, 1]);
    assert_eq!(ba.matched_indices_b, vec![0, 2]);
}
