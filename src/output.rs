use anyhow::Result;
use clap::ValueEnum;

use catalog_speller::core::spelling::{ProcessedQuery, Suggestions, VocabularyStats};

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text.
    Text,
    /// JSON output.
    Json,
}

/// Print a correction result.
pub fn print_processed(result: &ProcessedQuery, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(result)?),
        OutputFormat::Text => print!("{}", render_processed(result)),
    }
    Ok(())
}

/// Print vocabulary statistics.
pub fn print_stats(stats: &VocabularyStats, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
        OutputFormat::Text => print!("{}", render_stats(stats)),
    }
    Ok(())
}

fn render_processed(result: &ProcessedQuery) -> String {
    let mut out = String::new();
    out.push_str(&format!("Original:    {}\n", result.original));
    out.push_str(&format!("Corrected:   {}\n", result.corrected));

    if let Some(summary) = result.corrections_summary() {
        out.push_str(&format!("Corrections: {summary}\n"));
    }
    if !result.unresolved.is_empty() {
        out.push_str(&format!("Unresolved:  {}\n", result.unresolved.join(", ")));
    }
    if result.degraded {
        out.push_str("Warning:     vocabulary is empty, nothing was corrected\n");
    }

    match &result.suggestions {
        Suggestions::PerToken(items) if !items.is_empty() => {
            out.push_str("Did you mean:\n");
            for item in items {
                out.push_str(&format!("  {}: {}\n", item.token, item.candidates.join(", ")));
            }
        }
        Suggestions::Phrase(items) if !items.is_empty() => {
            out.push_str("Did you mean:\n");
            for item in items {
                out.push_str(&format!("  {} ({})\n", item.candidate, item.score));
            }
        }
        _ => {}
    }

    out
}

fn render_stats(stats: &VocabularyStats) -> String {
    let mut out = format!(
        "Tokens:      {}\nOccurrences: {}\n",
        stats.tokens, stats.occurrences
    );
    if !stats.most_frequent.is_empty() {
        out.push_str("Most frequent:\n");
        let width = stats
            .most_frequent
            .iter()
            .map(|(token, _)| token.len())
            .max()
            .unwrap_or(0);
        for (token, count) in &stats.most_frequent {
            out.push_str(&format!("  {token:<width$}  {count}\n"));
        }
    }
    out
}
