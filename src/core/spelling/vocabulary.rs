//! Vocabulary Index
//!
//! Holds the set of known catalog tokens together with their occurrence
//! counts. The token set and the frequency map share one sorted map, so every
//! known token has a count and iteration order is always lexical.

use std::collections::BTreeMap;

use serde::Serialize;

/// Known tokens and their corpus frequency.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Vocabulary {
    frequencies: BTreeMap<String, u64>,
}

/// Summary numbers for a built vocabulary.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct VocabularyStats {
    /// Distinct tokens
    pub tokens: usize,
    /// Sum of all token counts
    pub occurrences: u64,
    /// Most frequent tokens, highest first
    pub most_frequent: Vec<(String, u64)>,
}

/// Lowercase `text` and replace every character outside `[a-z0-9 ]` with a space.
pub fn normalize_text(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() {
                c
            } else {
                ' '
            }
        })
        .collect()
}

/// Split catalog text into normalized tokens.
pub fn catalog_tokens(text: &str) -> impl Iterator<Item = String> {
    normalize_text(text)
        .split_whitespace()
        .map(str::to_string)
        .collect::<Vec<_>>()
        .into_iter()
}

impl Vocabulary {
    /// Build the vocabulary from catalog text records.
    ///
    /// Each record is the concatenation of the catalog fields of one row.
    /// Records are normalized, split on whitespace and counted.
    pub fn build<I, S>(records: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut frequencies: BTreeMap<String, u64> = BTreeMap::new();
        let mut record_count = 0usize;

        for record in records {
            record_count += 1;
            for token in catalog_tokens(record.as_ref()) {
                *frequencies.entry(token).or_insert(0) += 1;
            }
        }

        log::debug!(
            "Built vocabulary of {} tokens from {} records",
            frequencies.len(),
            record_count
        );

        Self { frequencies }
    }

    /// Build from explicit `(token, count)` pairs.
    ///
    /// Keys go through the same normalization as catalog text; a key that
    /// normalizes to several tokens credits its count to each of them.
    /// Zero counts are dropped.
    pub fn from_frequencies<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, u64)>,
        S: AsRef<str>,
    {
        let mut frequencies: BTreeMap<String, u64> = BTreeMap::new();

        for (key, count) in entries {
            if count == 0 {
                continue;
            }
            for token in catalog_tokens(key.as_ref()) {
                *frequencies.entry(token).or_insert(0) += count;
            }
        }

        Self { frequencies }
    }

    /// Check if a token is known
    pub fn contains(&self, token: &str) -> bool {
        self.frequencies.contains_key(token)
    }

    /// Occurrence count for a token (0 when unknown)
    pub fn frequency(&self, token: &str) -> u64 {
        self.frequencies.get(token).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.frequencies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frequencies.is_empty()
    }

    /// Tokens with their counts, in lexical order
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.frequencies.iter().map(|(token, count)| (token.as_str(), *count))
    }

    /// Tokens in lexical order
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.frequencies.keys().map(String::as_str)
    }

    /// Sum of all token counts
    pub fn total_occurrences(&self) -> u64 {
        self.frequencies.values().sum()
    }

    /// The `limit` most frequent tokens; equal counts are ordered lexically.
    pub fn most_frequent(&self, limit: usize) -> Vec<(String, u64)> {
        let mut entries: Vec<(&String, &u64)> = self.frequencies.iter().collect();
        entries.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(limit)
            .map(|(token, count)| (token.clone(), *count))
            .collect()
    }

    pub fn stats(&self, top: usize) -> VocabularyStats {
        VocabularyStats {
            tokens: self.len(),
            occurrences: self.total_occurrences(),
            most_frequent: self.most_frequent(top),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("Apple iPhone-12 (Black)"), "apple iphone 12  black ");
        assert_eq!(normalize_text("Café"), "caf ");
        assert_eq!(normalize_text(""), "");
    }

    #[test]
    fn test_build_counts_tokens() {
        let vocab = Vocabulary::build([
            "Phone Case Black",
            "phone charger",
            "USB-C Charger, Phone",
        ]);

        assert_eq!(vocab.frequency("phone"), 3);
        assert_eq!(vocab.frequency("charger"), 2);
        assert_eq!(vocab.frequency("case"), 1);
        assert_eq!(vocab.frequency("usb"), 1);
        assert_eq!(vocab.frequency("c"), 1);
        assert_eq!(vocab.frequency("missing"), 0);
        assert_eq!(vocab.len(), 6);
        assert_eq!(vocab.total_occurrences(), 9);
    }

    #[test]
    fn test_build_never_contains_empty_token() {
        let vocab = Vocabulary::build(["   ", "---", "", "!!ok!!"]);
        assert!(!vocab.contains(""));
        assert_eq!(vocab.tokens().collect::<Vec<_>>(), vec!["ok"]);
    }

    #[test]
    fn test_empty_input_gives_empty_vocabulary() {
        let vocab = Vocabulary::build(Vec::<String>::new());
        assert!(vocab.is_empty());
        assert_eq!(vocab.total_occurrences(), 0);
    }

    #[test]
    fn test_iteration_is_lexical() {
        let vocab = Vocabulary::build(["zebra apple mango apple"]);
        let tokens: Vec<&str> = vocab.tokens().collect();
        assert_eq!(tokens, vec!["apple", "mango", "zebra"]);
    }

    #[test]
    fn test_from_frequencies_normalizes_and_drops_zero() {
        let vocab = Vocabulary::from_frequencies([
            ("Phone", 10),
            ("case", 5),
            ("usb-c", 2),
            ("ghost", 0),
        ]);

        assert_eq!(vocab.frequency("phone"), 10);
        assert_eq!(vocab.frequency("usb"), 2);
        assert_eq!(vocab.frequency("c"), 2);
        assert!(!vocab.contains("ghost"));
        assert!(!vocab.contains("Phone"));
    }

    #[test]
    fn test_most_frequent_breaks_ties_lexically() {
        let vocab = Vocabulary::from_frequencies([("b", 3), ("a", 3), ("c", 9), ("d", 1)]);
        assert_eq!(
            vocab.most_frequent(3),
            vec![("c".to_string(), 9), ("a".to_string(), 3), ("b".to_string(), 3)]
        );
    }

    #[test]
    fn test_stats() {
        let vocab = Vocabulary::build(["red red blue"]);
        let stats = vocab.stats(1);
        assert_eq!(stats.tokens, 2);
        assert_eq!(stats.occurrences, 3);
        assert_eq!(stats.most_frequent, vec![("red".to_string(), 2)]);
    }
}
