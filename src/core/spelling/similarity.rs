//! Similarity Scorer
//!
//! Normalized edit similarity on a 0-100 scale:
//!
//! ```text
//! score(a, b) = round(100 * (1 - distance(a, b) / (len(a) + len(b))))
//! ```
//!
//! Lengths are counted in chars. The rounding is exact integer
//! round-half-up, so boundary scores such as 74/75 do not depend on floating
//! point error.
//!
//! The default distance is Indel (insertions and deletions only), which makes
//! the score the usual `ratio` of fuzzy matchers: strings with no characters
//! in common score 0. Plain Levenshtein is still selectable, but it is far
//! looser on short tokens (`hb`/`hd` scores 75).

use serde::{Deserialize, Serialize};

/// Scores spelling closeness between two strings.
pub trait SimilarityScorer: Send + Sync {
    /// Symmetric score in `0..=100`; identical strings score 100.
    fn score(&self, a: &str, b: &str) -> u8;

    /// Best score of the shorter string against every window of the longer
    /// string having the shorter string's length.
    fn partial_score(&self, a: &str, b: &str) -> u8 {
        let (short, long) = if a.chars().count() <= b.chars().count() {
            (a, b)
        } else {
            (b, a)
        };

        let short_len = short.chars().count();
        if short_len == 0 {
            return if long.is_empty() { 100 } else { 0 };
        }

        let long_chars: Vec<char> = long.chars().collect();
        let mut best = 0;
        for window in long_chars.windows(short_len) {
            let slice: String = window.iter().collect();
            best = best.max(self.score(short, &slice));
            if best == 100 {
                break;
            }
        }
        best
    }
}

/// Edit-distance algorithm behind a similarity ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityAlgorithm {
    /// Insertions, deletions and substitutions cost 1
    Levenshtein,
    /// Levenshtein plus adjacent transpositions at cost 1
    DamerauLevenshtein,
    /// Insertions and deletions only; a substitution costs 2
    #[default]
    Indel,
}

impl SimilarityAlgorithm {
    pub fn distance(&self, a: &str, b: &str) -> usize {
        match self {
            SimilarityAlgorithm::Levenshtein => strsim::levenshtein(a, b),
            SimilarityAlgorithm::DamerauLevenshtein => strsim::damerau_levenshtein(a, b),
            SimilarityAlgorithm::Indel => indel_distance(a, b),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SimilarityAlgorithm::Levenshtein => "levenshtein",
            SimilarityAlgorithm::DamerauLevenshtein => "damerau_levenshtein",
            SimilarityAlgorithm::Indel => "indel",
        }
    }
}

impl SimilarityScorer for SimilarityAlgorithm {
    fn score(&self, a: &str, b: &str) -> u8 {
        if a == b {
            return 100;
        }
        let total = a.chars().count() + b.chars().count();
        ratio(self.distance(a, b), total)
    }
}

/// Convert an edit distance into a 0-100 ratio over the combined length.
pub fn ratio(distance: usize, total_len: usize) -> u8 {
    let total = total_len.max(1);
    let kept = total.saturating_sub(distance);
    let rounded = (200 * kept + total) / (2 * total);
    rounded.min(100) as u8
}

/// `len(a) + len(b) - 2 * LCS(a, b)`
fn indel_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    if a_chars.is_empty() || b_chars.is_empty() {
        return a_chars.len() + b_chars.len();
    }

    let mut prev = vec![0usize; b_chars.len() + 1];
    let mut curr = vec![0usize; b_chars.len() + 1];

    for &ca in &a_chars {
        for (j, &cb) in b_chars.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    let lcs = prev[b_chars.len()];
    a_chars.len() + b_chars.len() - 2 * lcs
}
