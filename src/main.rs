mod cli;
mod output;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use catalog_speller::config::{AppConfig, ConfigOrigin};
use catalog_speller::core::logging;
use catalog_speller::core::spelling::{QueryPipeline, VocabularyCache};
use catalog_speller::tui::{self, AppState};

use crate::cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let format = cli.format;

    let (mut config, origin) = match &cli.config {
        Some(path) => (AppConfig::load_from(path)?, ConfigOrigin::File(path.clone())),
        None => AppConfig::load(),
    };
    if !cli.catalogs.is_empty() {
        config.catalog.sources = cli.catalogs.clone();
    }
    if let Some(fields) = cli.fields {
        config.catalog.field_set = fields.into();
    }

    if let Command::Correct(cmd) = &cli.command {
        if let Some(mode) = cmd.suggest {
            config.spelling.suggestions.mode = mode.into();
        }
        if let Some(threshold) = cmd.threshold {
            config.spelling.correction.threshold = threshold;
        }
        if let Some(algorithm) = cmd.algorithm {
            config.spelling.correction.algorithm = algorithm.into();
        }
    }
    config.spelling.validate()?;

    // Keep the guard alive until exit so file logs are flushed
    let _log_guard = match cli.command {
        Command::Tui => logging::init_tui(&config.logging),
        _ => logging::init(&config.logging),
    };
    log::info!("{} v{} starting", catalog_speller::NAME, catalog_speller::VERSION);
    origin.log();

    let cache = Arc::new(VocabularyCache::from_sources(config.catalog.catalog_sources()));
    let pipeline = QueryPipeline::new(&config.spelling);

    match cli.command {
        Command::Correct(cmd) => {
            let result = pipeline
                .process_cached(&cmd.query_text(), &cache)
                .context("Could not correct query; pass --catalog or set catalog.sources")?;
            output::print_processed(&result, format)
        }
        Command::Vocab { top } => {
            let vocabulary = cache
                .get()
                .context("Could not build vocabulary; pass --catalog or set catalog.sources")?;
            output::print_stats(&vocabulary.stats(top), format)
        }
        Command::Tui => {
            // Open anyway; the status line reports a missing vocabulary
            if let Err(e) = cache.get() {
                log::warn!("Starting TUI without vocabulary: {}", e);
            }
            let mut state = AppState::new(pipeline, cache);
            tui::run(&mut state, Duration::from_millis(config.tui.tick_rate_ms))?;
            Ok(())
        }
    }
}
