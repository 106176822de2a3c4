//! Catalog Spell Correction
//!
//! Corrects misspelled product search queries against the vocabulary of a
//! product catalog, and offers sound-alike suggestions for tokens that
//! cannot be corrected confidently.
//!
//! ## Architecture
//!
//! ```text
//! Catalog CSV files                    User Query: "phne caes xyzzy"
//!        │                                      │
//!        ▼                                      ▼
//! ┌──────────────────────┐      ┌──────────────────────────────┐
//! │  Vocabulary          │      │  1. Normalize                │
//! │  (normalize, count)  │      │     (lowercase, split)       │
//! └──────────┬───────────┘      └──────────────┬───────────────┘
//!            ▼                                 ▼
//! ┌──────────────────────┐      ┌──────────────────────────────┐
//! │  VocabularyCache     │─────▶│  2. Token Correction         │  "phne" → "phone"
//! │  (get / reload)      │      │     (similarity > 74,        │  "caes" → "case"
//! └──────────────────────┘      │      frequency first)        │  "xyzzy" unresolved
//!                               └──────────────┬───────────────┘
//!                                              ▼
//!                               ┌──────────────────────────────┐
//!                               │  3. Phonetic Suggestions     │  per token or
//!                               │     (Soundex match)          │  whole phrase
//!                               └──────────────────────────────┘
//! ```

pub mod cache;
pub mod catalog;
pub mod config;
pub mod corrector;
pub mod error;
pub mod phonetic;
pub mod pipeline;
pub mod similarity;
pub mod suggest;
pub mod vocabulary;

// Re-export primary types
pub use cache::{CatalogLoader, VocabularyCache, VocabularyLoader};
pub use catalog::{load_records, read_records, CatalogSource, FieldSet};
pub use config::{CorrectionConfig, SpellConfig, SuggestionConfig, SuggestionMode};
pub use corrector::{
    ContextualScorer, CorrectedToken, CorrectionKind, TokenContext, TokenCorrector,
};
pub use error::{SpellError, SpellResult};
pub use phonetic::{soundex, PhoneticCoder};
pub use pipeline::{ProcessedQuery, QueryPipeline};
pub use similarity::{SimilarityAlgorithm, SimilarityScorer};
pub use suggest::{PhoneticSuggestor, PhraseSuggestion, Suggestions, TokenSuggestions};
pub use vocabulary::{Vocabulary, VocabularyStats};
