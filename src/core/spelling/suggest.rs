//! Phonetic Suggestions
//!
//! Secondary "did you mean" candidates for input the corrector could not
//! resolve confidently. Candidates share the input's phonetic code; every
//! selection is made in an explicit order so results are reproducible.

use std::collections::HashSet;

use serde::Serialize;

use super::config::SuggestionConfig;
use super::phonetic::PhoneticCoder;
use super::similarity::{SimilarityAlgorithm, SimilarityScorer};
use super::vocabulary::Vocabulary;

/// Sound-alike candidates for one token
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TokenSuggestions {
    pub token: String,
    /// Vocabulary tokens sharing the token's phonetic code, lexical order
    pub candidates: Vec<String>,
}

/// A ranked sound-alike candidate for a whole phrase
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PhraseSuggestion {
    pub candidate: String,
    /// Partial similarity between the phrase and the candidate
    pub score: u8,
}

/// Suggestions attached to a processed query
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "items", rename_all = "snake_case")]
pub enum Suggestions {
    #[default]
    None,
    PerToken(Vec<TokenSuggestions>),
    Phrase(Vec<PhraseSuggestion>),
}

impl Suggestions {
    pub fn is_empty(&self) -> bool {
        match self {
            Suggestions::None => true,
            Suggestions::PerToken(items) => items.is_empty(),
            Suggestions::Phrase(items) => items.is_empty(),
        }
    }

    /// Flat list of suggested words, in display order
    pub fn candidates(&self) -> Vec<&str> {
        match self {
            Suggestions::None => Vec::new(),
            Suggestions::PerToken(items) => items
                .iter()
                .flat_map(|item| item.candidates.iter().map(String::as_str))
                .collect(),
            Suggestions::Phrase(items) => items.iter().map(|item| item.candidate.as_str()).collect(),
        }
    }
}

/// Finds phonetic matches for tokens or phrases in a vocabulary.
#[derive(Clone, Debug)]
pub struct PhoneticSuggestor {
    coder: PhoneticCoder,
    scorer: SimilarityAlgorithm,
    per_token_limit: usize,
    phrase_limit: usize,
}

impl Default for PhoneticSuggestor {
    fn default() -> Self {
        Self::new(&SuggestionConfig::default(), SimilarityAlgorithm::default())
    }
}

impl PhoneticSuggestor {
    /// `scorer` ranks whole-phrase candidates.
    pub fn new(config: &SuggestionConfig, scorer: SimilarityAlgorithm) -> Self {
        Self {
            coder: PhoneticCoder::with_silent_letter_folding(config.fold_silent_letters),
            scorer,
            per_token_limit: config.per_token_limit,
            phrase_limit: config.phrase_limit,
        }
    }

    pub fn coder(&self) -> &PhoneticCoder {
        &self.coder
    }

    /// Per-token mode.
    ///
    /// For each distinct token, lists up to `per_token_limit` vocabulary
    /// tokens with the same phonetic code, excluding the token itself. Tokens
    /// without any match are omitted.
    pub fn suggest_tokens<S: AsRef<str>>(
        &self,
        tokens: &[S],
        vocabulary: &Vocabulary,
    ) -> Vec<TokenSuggestions> {
        let mut seen: HashSet<String> = HashSet::new();
        let mut coded: Option<Vec<(&str, String)>> = None;
        let mut results = Vec::new();

        for token in tokens {
            let token = token.as_ref().trim().to_lowercase();
            if token.is_empty() || !seen.insert(token.clone()) {
                continue;
            }

            let code = self.coder.code(&token);
            if code.is_empty() {
                continue;
            }

            let coded = coded.get_or_insert_with(|| self.code_vocabulary(vocabulary));
            let candidates: Vec<String> = coded
                .iter()
                .filter(|(candidate, candidate_code)| *candidate != token && *candidate_code == code)
                .take(self.per_token_limit)
                .map(|(candidate, _)| candidate.to_string())
                .collect();

            if !candidates.is_empty() {
                results.push(TokenSuggestions { token, candidates });
            }
        }

        results
    }

    /// Whole-phrase mode.
    ///
    /// The phrase is coded with its spaces removed; matching vocabulary tokens
    /// are ranked by partial similarity to the phrase (spaces kept), best
    /// first, ties in lexical order, and the top `phrase_limit` returned.
    pub fn suggest_phrase(&self, phrase: &str, vocabulary: &Vocabulary) -> Vec<PhraseSuggestion> {
        let phrase = phrase.trim();
        if phrase.is_empty() {
            return Vec::new();
        }

        let compact: String = phrase.chars().filter(|c| !c.is_whitespace()).collect();
        let code = self.coder.code(&compact);
        if code.is_empty() {
            return Vec::new();
        }

        let mut matches: Vec<PhraseSuggestion> = vocabulary
            .tokens()
            .filter(|candidate| self.coder.code(candidate) == code)
            .map(|candidate| PhraseSuggestion {
                candidate: candidate.to_string(),
                score: self.scorer.partial_score(phrase, candidate),
            })
            .collect();

        matches.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.candidate.cmp(&b.candidate))
        });
        matches.truncate(self.phrase_limit);
        matches
    }

    fn code_vocabulary<'v>(&self, vocabulary: &'v Vocabulary) -> Vec<(&'v str, String)> {
        vocabulary
            .tokens()
            .map(|token| (token, self.coder.code(token)))
            .collect()
    }
}
