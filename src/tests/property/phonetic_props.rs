//! Property-based tests for the phonetic coder
//!
//! Tests invariants:
//! - Code is one uppercase letter followed by three digits, or empty when
//!   the word has no letter
//! - Coding is case-insensitive
//! - Vowels after the first letter never change the code

use proptest::prelude::*;

use crate::core::spelling::{soundex, PhoneticCoder};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Catalog-style tokens: letters mixed with digits (`4k`, `128gb`, `usb3`)
fn arb_word() -> impl Strategy<Value = String> {
    "[a-z0-9]{1,16}"
}

fn arb_vowel() -> impl Strategy<Value = char> {
    prop_oneof![Just('a'), Just('e'), Just('i'), Just('o'), Just('u')]
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn code_has_soundex_shape(word in arb_word()) {
        let code = soundex(&word);
        let chars: Vec<char> = code.chars().collect();

        match word.chars().find(|c| c.is_ascii_alphabetic()) {
            Some(first) => {
                prop_assert_eq!(chars.len(), 4);
                prop_assert_eq!(chars[0], first.to_ascii_uppercase());
                prop_assert!(chars[1..].iter().all(|c| ('0'..='6').contains(c)));
            }
            None => prop_assert!(code.is_empty()),
        }
    }

    #[test]
    fn coding_is_case_insensitive(word in arb_word(), fold in any::<bool>()) {
        let coder = PhoneticCoder::with_silent_letter_folding(fold);
        prop_assert_eq!(coder.code(&word.to_uppercase()), coder.code(&word));
    }

    #[test]
    fn inserted_vowels_do_not_change_code(
        word in "[b-df-hj-np-tv-z][a-z]{0,10}",
        vowel in arb_vowel(),
        position in any::<prop::sample::Index>(),
    ) {
        // Insert anywhere after the first letter
        let at = 1 + position.index(word.len());
        let mut longer = word.clone();
        longer.insert(at, vowel);

        prop_assert_eq!(soundex(&longer), soundex(&word));
    }

    #[test]
    fn folded_code_is_empty_or_well_formed(word in arb_word()) {
        let code = PhoneticCoder::with_silent_letter_folding(true).code(&word);
        prop_assert!(code.is_empty() || code.chars().count() == 4);
        prop_assert!(code.chars().next().map_or(true, |c| c.is_ascii_uppercase()));
    }
}
