//! Spelling Error Types

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading a vocabulary or correcting queries
#[derive(Debug, Error)]
pub enum SpellError {
    #[error("Vocabulary unavailable: {0}")]
    VocabularyUnavailable(String),

    #[error("No catalog sources configured")]
    NoCatalogSources,

    #[error("Catalog read failed for {path}: {source}")]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type alias for spelling operations
pub type SpellResult<T> = Result<T, SpellError>;
