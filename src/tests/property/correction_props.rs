//! Property-based tests for token correction
//!
//! Tests invariants:
//! - Vocabulary tokens are never changed
//! - Correcting a corrected query changes nothing
//! - Every output token is a vocabulary token or an unresolved original
//! - Parallel and sequential candidate scans pick the same winner

use std::collections::BTreeMap;

use proptest::prelude::*;

use crate::core::spelling::{
    CorrectionConfig, QueryPipeline, TokenCorrector, Vocabulary,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_vocabulary() -> impl Strategy<Value = Vocabulary> {
    prop::collection::btree_map("[a-z]{1,8}", 1u64..50, 1..40)
        .prop_map(|entries: BTreeMap<String, u64>| Vocabulary::from_frequencies(entries))
}

fn arb_query() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 0..6)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn vocabulary_tokens_pass_through(
        vocabulary in arb_vocabulary(),
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..5),
    ) {
        let tokens: Vec<&str> = vocabulary.tokens().collect();
        let query: Vec<&str> = picks.iter().map(|i| *i.get(&tokens)).collect();
        let query = query.join(" ");

        let result = QueryPipeline::default().process(&query, &vocabulary);
        prop_assert_eq!(&result.corrected, &query);
        prop_assert!(!result.has_corrections());
        prop_assert!(result.unresolved.is_empty());
    }

    #[test]
    fn correction_is_idempotent(vocabulary in arb_vocabulary(), query in arb_query()) {
        let pipeline = QueryPipeline::default();
        let first = pipeline.process(&query.join(" "), &vocabulary);
        let second = pipeline.process(&first.corrected, &vocabulary);

        prop_assert_eq!(&second.corrected, &first.corrected);
        prop_assert!(!second.has_corrections());
    }

    #[test]
    fn output_tokens_are_known_or_unresolved(
        vocabulary in arb_vocabulary(),
        query in arb_query(),
    ) {
        let result = QueryPipeline::default().process(&query.join(" "), &vocabulary);

        prop_assert_eq!(result.tokens.len(), query.len());
        for token in result.corrected.split_whitespace() {
            prop_assert!(
                vocabulary.contains(token) || result.unresolved.iter().any(|u| u == token),
                "{} is neither known nor unresolved",
                token
            );
        }
    }

    #[test]
    fn parallel_scan_matches_sequential(
        vocabulary in arb_vocabulary(),
        token in "[a-z]{1,8}",
    ) {
        let sequential = TokenCorrector::default();
        let parallel = TokenCorrector::new(&CorrectionConfig {
            parallel: true,
            ..CorrectionConfig::default()
        });

        prop_assert_eq!(
            sequential.correct(&token, &vocabulary),
            parallel.correct(&token, &vocabulary)
        );
    }
}
