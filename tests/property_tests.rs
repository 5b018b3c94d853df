//! Property tests for the cancel/eliminate core.

use proptest::prelude::*;

use flames::cancel::cancel_letters;
use flames::core::{FlamesLetter, NormalizedName};
use flames::eliminate::{elimination_order, resolve_flames, ELIMINATION_STEPS};

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in ".*") {
        let once = NormalizedName::new(&raw);
        let twice = NormalizedName::new(once.as_str());
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.as_str().bytes().all(|b| b.is_ascii_lowercase()));
    }

    #[test]
    fn matching_is_one_to_one(a in "[a-zA-Z ]{0,20}", b in "[a-zA-Z ]{0,20}") {
        let c = cancel_letters(&a, &b);
        let la = c.name_a.as_bytes();
        let lb = c.name_b.as_bytes();

        prop_assert_eq!(c.matched_indices_a.len(), c.matched_indices_b.len());

        let mut seen_a = c.matched_indices_a.clone();
        seen_a.dedup();
        prop_assert_eq!(seen_a.len(), c.matched_indices_a.len());
        prop_assert!(c.matched_indices_a.windows(2).all(|w| w[0] < w[1]));

        let mut seen_b = c.matched_indices_b.clone();
        seen_b.sort_unstable();
        seen_b.dedup();
        prop_assert_eq!(seen_b.len(), c.matched_indices_b.len());

        for (i, j) in c.pairs() {
            prop_assert_eq!(la[i], lb[j]);
        }

        prop_assert_eq!(c.remaining, la.len() + lb.len() - 2 * c.pair_count());
    }

    #[test]
    fn remaining_is_symmetric(a in "[a-z]{0,15}", b in "[a-z]{0,15}") {
        prop_assert_eq!(cancel_letters(&a, &b).remaining, cancel_letters(&b, &a).remaining);
    }

    #[test]
    fn permuted_names_cancel_fully(a in "[a-z]{0,15}") {
        let reversed: String = a.chars().rev().collect();
        prop_assert_eq!(cancel_letters(&a, &reversed).remaining, 0);
    }

    #[test]
    fn elimination_always_five_steps(remaining in any::<usize>()) {
        let trace = elimination_order(remaining);
        prop_assert_eq!(trace.steps.len(), ELIMINATION_STEPS);
        prop_assert!(FlamesLetter::ALL.contains(&trace.survivor));
        prop_assert!(!trace.eliminated().any(|l| l == trace.survivor));
    }

    #[test]
    fn resolve_is_pure(remaining in 0usize..10_000) {
        prop_assert_eq!(resolve_flames(remaining), resolve_flames(remaining));
    }
}
