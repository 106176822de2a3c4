/// Catalog Speller - search query spell correction
///
/// Core library correcting misspelled product search queries against a
/// catalog vocabulary, with phonetic "did you mean" suggestions.

pub mod config;
pub mod core;
pub mod tui;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
