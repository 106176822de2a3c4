//! Query Pipeline
//!
//! Orchestrates the full correction flow for one query:
//! 1. Normalize input (lowercase, whitespace split)
//! 2. Correct each token against the vocabulary, left to right
//! 3. Collect unresolved tokens
//! 4. Run the configured phonetic suggestion pass

use serde::Serialize;

use super::cache::VocabularyCache;
use super::config::{SpellConfig, SuggestionMode};
use super::corrector::{CorrectedToken, TokenContext, TokenCorrector};
use super::error::SpellResult;
use super::suggest::{PhoneticSuggestor, Suggestions};
use super::vocabulary::Vocabulary;

/// Complete query correction pipeline.
#[derive(Debug)]
pub struct QueryPipeline {
    corrector: TokenCorrector,
    suggestor: PhoneticSuggestor,
    mode: SuggestionMode,
}

/// Result of correcting a raw query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedQuery {
    /// Original user input
    pub original: String,
    /// Corrected tokens joined by single spaces
    pub corrected: String,
    /// Per-token outcome, in query order
    pub tokens: Vec<CorrectedToken>,
    /// Tokens with no acceptable correction, in encounter order
    pub unresolved: Vec<String>,
    pub suggestions: Suggestions,
    /// Set when the vocabulary was empty and nothing could be corrected
    pub degraded: bool,
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new(&SpellConfig::default())
    }
}

impl QueryPipeline {
    /// Create pipeline with the given configuration.
    pub fn new(config: &SpellConfig) -> Self {
        Self {
            corrector: TokenCorrector::new(&config.correction),
            suggestor: PhoneticSuggestor::new(&config.suggestions, config.correction.algorithm),
            mode: config.suggestions.mode,
        }
    }

    /// Create pipeline with explicit components.
    pub fn from_components(
        corrector: TokenCorrector,
        suggestor: PhoneticSuggestor,
        mode: SuggestionMode,
    ) -> Self {
        Self {
            corrector,
            suggestor,
            mode,
        }
    }

    pub fn corrector(&self) -> &TokenCorrector {
        &self.corrector
    }

    pub fn suggestor(&self) -> &PhoneticSuggestor {
        &self.suggestor
    }

    pub fn mode(&self) -> SuggestionMode {
        self.mode
    }

    /// Process a raw query against an explicit vocabulary.
    pub fn process(&self, raw_query: &str, vocabulary: &Vocabulary) -> ProcessedQuery {
        let lowered = raw_query.to_lowercase();
        let raw_tokens: Vec<String> = lowered.split_whitespace().map(str::to_string).collect();

        let degraded = vocabulary.is_empty();
        if degraded && !raw_tokens.is_empty() {
            log::warn!("Vocabulary is empty; query left uncorrected");
        }

        // 2. Correct tokens in order, feeding corrected tokens back as context
        let mut tokens: Vec<CorrectedToken> = Vec::with_capacity(raw_tokens.len());
        let mut emitted: Vec<String> = Vec::with_capacity(raw_tokens.len());
        for (i, raw) in raw_tokens.iter().enumerate() {
            let context = TokenContext {
                preceding: &emitted,
                following: &raw_tokens[i + 1..],
            };
            if let Some(token) = self.corrector.correct_in_context(raw, &context, vocabulary) {
                emitted.push(token.corrected.clone());
                tokens.push(token);
            }
        }

        // 3. Unresolved tokens
        let unresolved: Vec<String> = tokens
            .iter()
            .filter(|t| t.is_unresolved())
            .map(|t| t.original.clone())
            .collect();

        let corrected = emitted.join(" ");

        // 4. Suggestions
        let suggestions = if corrected.is_empty() {
            Suggestions::None
        } else {
            match self.mode {
                SuggestionMode::Off => Suggestions::None,
                SuggestionMode::PerToken if unresolved.is_empty() => Suggestions::None,
                SuggestionMode::PerToken => {
                    Suggestions::PerToken(self.suggestor.suggest_tokens(&unresolved, vocabulary))
                }
                SuggestionMode::WholePhrase => {
                    Suggestions::Phrase(self.suggestor.suggest_phrase(&corrected, vocabulary))
                }
            }
        };

        log::debug!(
            "Processed query '{}' -> '{}' ({} unresolved)",
            raw_query,
            corrected,
            unresolved.len()
        );

        ProcessedQuery {
            original: raw_query.to_string(),
            corrected,
            tokens,
            unresolved,
            suggestions,
            degraded,
        }
    }

    /// Process a raw query against the cached vocabulary, building it if needed.
    ///
    /// Fails with `VocabularyUnavailable` when no vocabulary can be obtained.
    pub fn process_cached(&self, raw_query: &str, cache: &VocabularyCache) -> SpellResult<ProcessedQuery> {
        let vocabulary = cache.get()?;
        Ok(self.process(raw_query, &vocabulary))
    }
}

impl ProcessedQuery {
    /// Tokens that were replaced
    pub fn corrections(&self) -> impl Iterator<Item = &CorrectedToken> {
        self.tokens.iter().filter(|t| t.is_replaced())
    }

    /// Check if any corrections were made
    pub fn has_corrections(&self) -> bool {
        self.corrections().next().is_some()
    }

    /// Get a summary of corrections for display
    pub fn corrections_summary(&self) -> Option<String> {
        let corrections: Vec<String> = self
            .corrections()
            .map(|c| format!("{} → {}", c.original, c.corrected))
            .collect();

        if corrections.is_empty() {
            return None;
        }
        Some(corrections.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::spelling::config::SuggestionConfig;
    use crate::core::spelling::corrector::CorrectionKind;
    use crate::core::spelling::error::SpellError;

    fn catalog_vocab() -> Vocabulary {
        Vocabulary::from_frequencies([("phone", 10), ("case", 5), ("charger", 3)])
    }

    fn pipeline_with_mode(mode: SuggestionMode) -> QueryPipeline {
        let config = SpellConfig {
            suggestions: SuggestionConfig {
                mode,
                ..SuggestionConfig::default()
            },
            ..SpellConfig::default()
        };
        QueryPipeline::new(&config)
    }

    #[test]
    fn test_corrects_query() {
        let pipeline = QueryPipeline::default();
        let result = pipeline.process("phne caes", &catalog_vocab());

        assert_eq!(result.original, "phne caes");
        assert_eq!(result.corrected, "phone case");
        assert!(result.unresolved.is_empty());
        assert!(result.has_corrections());
        assert_eq!(
            result.corrections_summary(),
            Some("phne → phone, caes → case".to_string())
        );
        assert_eq!(
            result.tokens[1].kind,
            CorrectionKind::Replaced {
                score: 75,
                frequency: 5
            }
        );
        assert!(!result.degraded);
    }

    #[test]
    fn test_phonetic_misspelling_below_threshold() {
        let pipeline = QueryPipeline::default();
        let result = pipeline.process("fone caes", &catalog_vocab());

        // "fone" scores 67 against "phone"
        assert_eq!(result.corrected, "fone case");
        assert_eq!(result.unresolved, vec!["fone"]);
    }

    #[test]
    fn test_short_tokens_not_replaced() {
        let pipeline = QueryPipeline::default();
        let vocabulary = Vocabulary::from_frequencies([("hd", 4), ("tv", 4), ("usb", 4)]);
        let result = pipeline.process("hb tc usa", &vocabulary);

        assert_eq!(result.corrected, "hb tc usa");
        assert_eq!(result.unresolved, vec!["hb", "tc", "usa"]);
        assert!(!result.has_corrections());
    }

    #[test]
    fn test_known_query_passes_through() {
        let pipeline = QueryPipeline::default();
        let result = pipeline.process("Phone  CHARGER", &catalog_vocab());

        assert_eq!(result.corrected, "phone charger");
        assert!(!result.has_corrections());
        assert_eq!(result.corrections_summary(), None);
        assert_eq!(result.suggestions, Suggestions::None);
    }

    #[test]
    fn test_unresolved_token() {
        let pipeline = QueryPipeline::default();
        let vocabulary = Vocabulary::from_frequencies([("laptop", 4)]);
        let result = pipeline.process("xyzzy", &vocabulary);

        assert_eq!(result.corrected, "xyzzy");
        assert_eq!(result.unresolved, vec!["xyzzy"]);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_unresolved_gets_sound_alikes() {
        let pipeline = QueryPipeline::default();
        let vocabulary =
            Vocabulary::from_frequencies([("rabbit", 1), ("ribbed", 1), ("laptop", 4)]);
        let result = pipeline.process("laptop rbt", &vocabulary);

        // "rbt" scores 67 against "rabbit", below the threshold, but shares R130
        assert_eq!(result.corrected, "laptop rbt");
        assert_eq!(result.unresolved, vec!["rbt"]);
        assert_eq!(result.suggestions.candidates(), vec!["rabbit", "ribbed"]);
    }

    #[test]
    fn test_empty_query() {
        let pipeline = QueryPipeline::default();
        for query in ["", "   ", "\t\n"] {
            let result = pipeline.process(query, &catalog_vocab());
            assert_eq!(result.corrected, "");
            assert!(result.tokens.is_empty());
            assert!(result.unresolved.is_empty());
            assert_eq!(result.suggestions, Suggestions::None);
        }
    }

    #[test]
    fn test_empty_vocabulary_is_degraded() {
        let pipeline = QueryPipeline::default();
        let result = pipeline.process("fone caes", &Vocabulary::default());

        assert!(result.degraded);
        assert_eq!(result.corrected, "fone caes");
        assert_eq!(result.unresolved, vec!["fone", "caes"]);
        assert!(result.suggestions.is_empty());
    }

    #[test]
    fn test_correction_is_idempotent() {
        let pipeline = QueryPipeline::default();
        let vocabulary = catalog_vocab();

        let first = pipeline.process("phne caes chrger xyzzy", &vocabulary);
        let second = pipeline.process(&first.corrected, &vocabulary);
        assert_eq!(first.corrected, second.corrected);
    }

    #[test]
    fn test_whole_phrase_mode() {
        let pipeline = pipeline_with_mode(SuggestionMode::WholePhrase);
        let vocabulary = Vocabulary::from_frequencies([
            ("phone", 10),
            ("case", 5),
            ("phones", 2),
            ("phonecase", 1),
        ]);
        let result = pipeline.process("phne case", &vocabulary);

        assert_eq!(result.corrected, "phone case");
        match &result.suggestions {
            Suggestions::Phrase(items) => {
                assert_eq!(items[0].candidate, "phones");
                assert!(items.iter().any(|s| s.candidate == "phonecase"));
            }
            other => panic!("expected phrase suggestions, got {other:?}"),
        }
    }

    #[test]
    fn test_suggestions_off() {
        let pipeline = pipeline_with_mode(SuggestionMode::Off);
        let vocabulary = Vocabulary::from_frequencies([("rabbit", 1)]);
        let result = pipeline.process("rbt", &vocabulary);

        assert_eq!(result.unresolved, vec!["rbt"]);
        assert_eq!(result.suggestions, Suggestions::None);
    }

    #[test]
    fn test_process_cached() {
        let pipeline = QueryPipeline::default();
        let cache = VocabularyCache::from_sources(Vec::new());

        assert!(matches!(
            pipeline.process_cached("phne", &cache),
            Err(SpellError::VocabularyUnavailable(_))
        ));

        cache.replace(catalog_vocab());
        let result = pipeline.process_cached("phne", &cache).unwrap();
        assert_eq!(result.corrected, "phone");
    }

    #[test]
    fn test_serializes_to_json() {
        let pipeline = QueryPipeline::default();
        let result = pipeline.process("phne xyzzy", &catalog_vocab());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["corrected"], "phone xyzzy");
        assert_eq!(json["tokens"][0]["kind"]["kind"], "replaced");
        assert_eq!(json["unresolved"][0], "xyzzy");
        assert_eq!(json["suggestions"]["mode"], "per_token");
    }
}
