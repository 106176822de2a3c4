//! Spelling Configuration
//!
//! Configuration structures for token correction and phonetic suggestions.
//! Defaults: Indel ratio, strict threshold of 74, per-token
//! suggestions capped at 3.

use serde::{Deserialize, Serialize};

use super::error::SpellResult;
use super::similarity::SimilarityAlgorithm;

/// Overall spelling configuration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SpellConfig {
    /// Token correction configuration
    #[serde(default)]
    pub correction: CorrectionConfig,

    /// Phonetic suggestion configuration
    #[serde(default)]
    pub suggestions: SuggestionConfig,
}

impl SpellConfig {
    /// Load configuration from TOML file
    pub fn from_toml_file(path: &std::path::Path) -> SpellResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from TOML string
    pub fn from_toml_str(content: &str) -> SpellResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the corrector cannot honor.
    pub fn validate(&self) -> SpellResult<()> {
        use super::error::SpellError;

        if self.correction.threshold >= 100 {
            return Err(SpellError::ConfigParse(format!(
                "correction.threshold must be below 100, got {}",
                self.correction.threshold
            )));
        }
        if self.correction.scan_budget == Some(0) {
            return Err(SpellError::ConfigParse(
                "correction.scan_budget must be at least 1 when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// Token correction configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CorrectionConfig {
    /// Candidates must score strictly above this value (0-100)
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Edit-distance algorithm behind the similarity score
    #[serde(default)]
    pub algorithm: SimilarityAlgorithm,

    /// Score vocabulary candidates on the rayon pool
    #[serde(default)]
    pub parallel: bool,

    /// Stop scanning after this many vocabulary entries (sorted order)
    #[serde(default)]
    pub scan_budget: Option<usize>,
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            algorithm: SimilarityAlgorithm::default(),
            parallel: false,
            scan_budget: None,
        }
    }
}

/// Which phonetic suggestion pass the pipeline runs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionMode {
    /// Suggest sound-alikes for each unresolved token
    #[default]
    PerToken,
    /// Suggest sound-alikes for the whole corrected phrase
    WholePhrase,
    /// No suggestion pass
    Off,
}

/// Phonetic suggestion configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuggestionConfig {
    #[serde(default)]
    pub mode: SuggestionMode,

    /// Maximum candidates reported per unresolved token
    #[serde(default = "default_per_token_limit")]
    pub per_token_limit: usize,

    /// Maximum candidates reported for a whole phrase
    #[serde(default = "default_phrase_limit")]
    pub phrase_limit: usize,

    /// Drop silent letters (kn-, wr-, gh) before computing phonetic codes
    #[serde(default)]
    pub fold_silent_letters: bool,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            mode: SuggestionMode::default(),
            per_token_limit: default_per_token_limit(),
            phrase_limit: default_phrase_limit(),
            fold_silent_letters: false,
        }
    }
}

// Default value helpers for serde
fn default_threshold() -> u8 { 74 }
fn default_per_token_limit() -> usize { 3 }
fn default_phrase_limit() -> usize { 5 }

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SpellConfig::default();
        assert_eq!(config.correction.threshold, 74);
        assert_eq!(config.correction.algorithm, SimilarityAlgorithm::Indel);
        assert!(!config.correction.parallel);
        assert!(config.correction.scan_budget.is_none());
        assert_eq!(config.suggestions.mode, SuggestionMode::PerToken);
        assert_eq!(config.suggestions.per_token_limit, 3);
        assert_eq!(config.suggestions.phrase_limit, 5);
        assert!(!config.suggestions.fold_silent_letters);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[correction]
threshold = 80
algorithm = "levenshtein"
parallel = true

[suggestions]
mode = "whole_phrase"
phrase_limit = 3
fold_silent_letters = true
"#;
        let config = SpellConfig::from_toml_str(toml_str).unwrap();
        assert_eq!(config.correction.threshold, 80);
        assert_eq!(config.correction.algorithm, SimilarityAlgorithm::Levenshtein);
        assert!(config.correction.parallel);
        assert_eq!(config.suggestions.mode, SuggestionMode::WholePhrase);
        assert_eq!(config.suggestions.phrase_limit, 3);
        assert_eq!(config.suggestions.per_token_limit, 3);
        assert!(config.suggestions.fold_silent_letters);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = SpellConfig::from_toml_str("").unwrap();
        assert_eq!(config.correction.threshold, 74);
        assert_eq!(config.suggestions.mode, SuggestionMode::PerToken);
    }

    #[test]
    fn test_rejects_unreachable_threshold() {
        let result = SpellConfig::from_toml_str("[correction]\nthreshold = 100\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_rejects_zero_scan_budget() {
        let result = SpellConfig::from_toml_str("[correction]\nscan_budget = 0\n");
        assert!(result.is_err());
    }
}
