//! Color theme for the interactive corrector.
//!
//! All color constants are RGB truecolor. Views import from here
//! instead of using inline `Color::*` literals.

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders};

// ── Primary palette ─────────────────────────────────────────────────────────

/// Teal, focused borders and headings.
pub const PRIMARY: Color = Color::Rgb(0x00, 0x80, 0x80);
/// Light teal, hints and secondary focus.
pub const PRIMARY_LIGHT: Color = Color::Rgb(0x00, 0x96, 0x88);

/// Coral, titles and the brand badge.
pub const ACCENT: Color = Color::Rgb(0xFF, 0x7F, 0x50);

/// Charcoal, badge foreground.
pub const BG_BASE: Color = Color::Rgb(0x0A, 0x19, 0x19);

// ── Text ────────────────────────────────────────────────────────────────────

pub const TEXT: Color = Color::Rgb(0xE0, 0xE0, 0xE0);
pub const TEXT_MUTED: Color = Color::Rgb(0x80, 0x80, 0x80);
pub const TEXT_DIM: Color = Color::Rgb(0x50, 0x50, 0x50);

// ── Semantic ────────────────────────────────────────────────────────────────

/// Unresolved tokens, load failures.
pub const ERROR: Color = Color::Rgb(0xEF, 0x53, 0x50);
/// Replaced tokens.
pub const SUCCESS: Color = Color::Rgb(0x66, 0xBB, 0x6A);
/// Degraded (empty vocabulary) status.
pub const WARNING: Color = Color::Rgb(0xFF, 0xA7, 0x26);

// ── Style helpers ───────────────────────────────────────────────────────────

/// Accent bold text (titles).
pub fn title() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

/// Section header style.
pub fn heading() -> Style {
    Style::default().fg(PRIMARY).add_modifier(Modifier::BOLD)
}

pub fn text() -> Style {
    Style::default().fg(TEXT)
}

/// Muted label text.
pub fn muted() -> Style {
    Style::default().fg(TEXT_MUTED)
}

/// Key hint style (e.g., "Esc:quit").
pub fn key_hint() -> Style {
    Style::default().fg(TEXT_DIM)
}

/// A token the corrector replaced.
pub fn replaced_token() -> Style {
    Style::default().fg(SUCCESS).add_modifier(Modifier::BOLD)
}

/// A token no candidate was found for.
pub fn unresolved_token() -> Style {
    Style::default()
        .fg(ERROR)
        .add_modifier(Modifier::UNDERLINED)
}

/// Status bar brand badge.
pub fn brand_badge() -> Style {
    Style::default()
        .fg(BG_BASE)
        .bg(ACCENT)
        .add_modifier(Modifier::BOLD)
}

// ── Block builders ──────────────────────────────────────────────────────────

/// A bordered block with focused styling.
pub fn block_focused(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(PRIMARY))
}

/// A bordered block with default (unfocused) styling.
pub fn block_default(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {title} "))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(TEXT_DIM))
}
