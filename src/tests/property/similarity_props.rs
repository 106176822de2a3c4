//! Property-based tests for the similarity scorer
//!
//! Tests invariants:
//! - Score is symmetric and within 0-100
//! - Identical strings score 100
//! - A string contained in another has a partial score of 100
//! - With the default ratio, strings sharing no character score 0

use proptest::prelude::*;

use crate::core::spelling::{SimilarityAlgorithm, SimilarityScorer};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_word() -> impl Strategy<Value = String> {
    "[a-z]{0,12}"
}

fn arb_algorithm() -> impl Strategy<Value = SimilarityAlgorithm> {
    prop_oneof![
        Just(SimilarityAlgorithm::Levenshtein),
        Just(SimilarityAlgorithm::DamerauLevenshtein),
        Just(SimilarityAlgorithm::Indel),
    ]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn score_is_symmetric_and_bounded(
        algorithm in arb_algorithm(),
        a in arb_word(),
        b in arb_word(),
    ) {
        let forward = algorithm.score(&a, &b);
        prop_assert_eq!(forward, algorithm.score(&b, &a));
        prop_assert!(forward <= 100);
    }

    #[test]
    fn identical_strings_score_100(algorithm in arb_algorithm(), a in arb_word()) {
        prop_assert_eq!(algorithm.score(&a, &a), 100);
    }

    #[test]
    fn different_strings_score_below_100(
        algorithm in arb_algorithm(),
        a in "[a-z]{1,12}",
        b in "[a-z]{1,12}",
    ) {
        prop_assume!(a != b);
        prop_assert!(algorithm.score(&a, &b) < 100);
    }

    #[test]
    fn contained_string_partial_scores_100(
        algorithm in arb_algorithm(),
        prefix in arb_word(),
        needle in "[a-z]{1,6}",
        suffix in arb_word(),
    ) {
        let haystack = format!("{prefix}{needle}{suffix}");
        prop_assert_eq!(algorithm.partial_score(&needle, &haystack), 100);
        prop_assert_eq!(algorithm.partial_score(&haystack, &needle), 100);
    }

    #[test]
    fn disjoint_strings_score_zero_by_default(a in "[a-m]{1,12}", b in "[n-z]{1,12}") {
        prop_assert_eq!(SimilarityAlgorithm::default().score(&a, &b), 0);
    }
}
