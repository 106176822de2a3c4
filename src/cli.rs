use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use catalog_speller::core::spelling::{FieldSet, SimilarityAlgorithm, SuggestionMode};

use crate::output::OutputFormat;

/// Catalog Speller - search query spell correction
#[derive(Parser)]
#[command(name = "catalog-speller", version, about)]
pub struct Cli {
    /// Path to the configuration file.
    #[arg(long, env = "CATALOG_SPELLER_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Catalog CSV file; repeat for several. Replaces configured sources.
    #[arg(long = "catalog", global = true)]
    pub catalogs: Vec<PathBuf>,

    /// Catalog columns feeding the vocabulary.
    #[arg(long, value_enum, global = true)]
    pub fields: Option<FieldsArg>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Correct a query and print the result.
    Correct(CorrectCommand),
    /// Open the interactive corrector.
    Tui,
    /// Print vocabulary statistics.
    Vocab {
        /// Number of most frequent tokens to list.
        #[arg(long, default_value_t = 10)]
        top: usize,
    },
}

#[derive(Parser)]
pub struct CorrectCommand {
    /// Query text; several words may be given without quoting.
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,

    /// Suggestion pass to run.
    #[arg(long, value_enum)]
    pub suggest: Option<SuggestArg>,

    /// Minimum similarity a replacement must exceed (0-99).
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..100))]
    pub threshold: Option<u8>,

    /// Edit-distance algorithm.
    #[arg(long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,
}

impl CorrectCommand {
    pub fn query_text(&self) -> String {
        self.query.join(" ")
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum FieldsArg {
    Basic,
    Extended,
}

impl From<FieldsArg> for FieldSet {
    fn from(arg: FieldsArg) -> Self {
        match arg {
            FieldsArg::Basic => FieldSet::Basic,
            FieldsArg::Extended => FieldSet::Extended,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SuggestArg {
    /// Sound-alikes for each unresolved token.
    PerToken,
    /// Sound-alikes for the whole corrected phrase.
    Phrase,
    Off,
}

impl From<SuggestArg> for SuggestionMode {
    fn from(arg: SuggestArg) -> Self {
        match arg {
            SuggestArg::PerToken => SuggestionMode::PerToken,
            SuggestArg::Phrase => SuggestionMode::WholePhrase,
            SuggestArg::Off => SuggestionMode::Off,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum AlgorithmArg {
    Levenshtein,
    Damerau,
    Indel,
}

impl From<AlgorithmArg> for SimilarityAlgorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Levenshtein => SimilarityAlgorithm::Levenshtein,
            AlgorithmArg::Damerau => SimilarityAlgorithm::DamerauLevenshtein,
            AlgorithmArg::Indel => SimilarityAlgorithm::Indel,
        }
    }
}
