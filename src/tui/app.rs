use std::io;
use std::sync::Arc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};

use super::theme;
use crate::core::spelling::{
    CorrectionKind, ProcessedQuery, QueryPipeline, SpellError, Suggestions, VocabularyCache,
};

/// Status line message level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Interactive correction state.
///
/// Every edit re-runs the pipeline on the whole input line, so the panels
/// always reflect what the CLI would print for the same text.
pub struct AppState {
    /// Whether the app is still running.
    pub running: bool,
    /// Current input line.
    pub input: String,
    /// Result for the current input (None while the input is empty).
    pub result: Option<ProcessedQuery>,
    /// Status line text and level.
    pub status: (String, StatusLevel),
    pipeline: QueryPipeline,
    cache: Arc<VocabularyCache>,
    /// Last load failure; edits do not retry the load until Ctrl+R.
    load_error: Option<String>,
}

impl AppState {
    pub fn new(pipeline: QueryPipeline, cache: Arc<VocabularyCache>) -> Self {
        let mut state = Self {
            running: true,
            input: String::new(),
            result: None,
            status: (String::new(), StatusLevel::Info),
            pipeline,
            cache,
            load_error: None,
        };
        state.status = state.vocabulary_status();
        state
    }

    // ── Event loop ──────────────────────────────────────────────────────

    /// Main loop: render → poll → update → loop.
    pub fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        tick_rate: Duration,
    ) -> io::Result<()> {
        while self.running {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Apply one key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.running = false,
            KeyCode::Char('c') if ctrl => self.running = false,
            KeyCode::Char('u') if ctrl => {
                self.input.clear();
                self.refresh();
            }
            KeyCode::Char('r') if ctrl => self.reload_vocabulary(),
            KeyCode::Char(c) => {
                self.input.push(c);
                self.refresh();
            }
            KeyCode::Backspace => {
                self.input.pop();
                self.refresh();
            }
            KeyCode::Enter => self.refresh(),
            _ => {}
        }
    }

    /// Re-run the pipeline on the current input.
    pub fn refresh(&mut self) {
        if self.input.trim().is_empty() {
            self.result = None;
            self.status = self.vocabulary_status();
            return;
        }

        if let Some(error) = &self.load_error {
            self.result = None;
            self.status = (format!("{error} (Ctrl+R to retry)"), StatusLevel::Error);
            return;
        }

        match self.pipeline.process_cached(&self.input, &self.cache) {
            Ok(result) => {
                self.status = if result.degraded {
                    (
                        "Vocabulary is empty; nothing can be corrected".to_string(),
                        StatusLevel::Warning,
                    )
                } else {
                    match result.corrections_summary() {
                        Some(summary) => (summary, StatusLevel::Info),
                        None if result.unresolved.is_empty() => {
                            ("No corrections needed".to_string(), StatusLevel::Info)
                        }
                        None => (
                            format!("{} unresolved", result.unresolved.len()),
                            StatusLevel::Info,
                        ),
                    }
                };
                self.result = Some(result);
            }
            Err(e) => {
                log::error!("Correction failed: {}", e);
                self.result = None;
                self.status = (e.to_string(), StatusLevel::Error);
                if matches!(e, SpellError::VocabularyUnavailable(_)) {
                    self.load_error = Some(e.to_string());
                }
            }
        }
    }

    fn reload_vocabulary(&mut self) {
        match self.cache.reload() {
            Ok(vocabulary) => {
                log::info!("Vocabulary reloaded from the TUI");
                self.load_error = None;
                self.refresh();
                self.status = (
                    format!("Reloaded vocabulary: {} tokens", vocabulary.len()),
                    StatusLevel::Info,
                );
            }
            Err(e) => {
                if !self.cache.is_loaded() {
                    self.load_error = Some(e.to_string());
                }
                self.status = (format!("Reload failed: {e}"), StatusLevel::Error);
            }
        }
    }

    fn vocabulary_status(&self) -> (String, StatusLevel) {
        match self.cache.cached() {
            Some(vocabulary) if vocabulary.is_empty() => {
                ("Vocabulary is empty".to_string(), StatusLevel::Warning)
            }
            Some(vocabulary) => (
                format!("Vocabulary: {} tokens", vocabulary.len()),
                StatusLevel::Info,
            ),
            None => ("Vocabulary not loaded".to_string(), StatusLevel::Warning),
        }
    }

    // ── Rendering ───────────────────────────────────────────────────────

    pub fn render(&self, frame: &mut Frame) {
        let [input_area, panels_area, suggestions_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(5),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(frame.area());

        self.render_input(frame, input_area);

        let [original_area, corrected_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(panels_area);
        self.render_original(frame, original_area);
        self.render_corrected(frame, corrected_area);

        self.render_suggestions(frame, suggestions_area);
        self.render_status_bar(frame, status_area);
    }

    fn render_input(&self, frame: &mut Frame, area: Rect) {
        let block = theme::block_focused("Query");
        let inner = block.inner(area);
        frame.render_widget(
            Paragraph::new(Span::styled(self.input.as_str(), theme::text())).block(block),
            area,
        );

        let typed = self.input.chars().count() as u16;
        let cursor_x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((cursor_x, inner.y));
    }

    fn render_original(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.result {
            Some(result) => Line::from(
                result
                    .tokens
                    .iter()
                    .flat_map(|token| {
                        let style = match token.kind {
                            CorrectionKind::Known => theme::text(),
                            CorrectionKind::Replaced { .. } => theme::muted(),
                            CorrectionKind::Unresolved => theme::unresolved_token(),
                        };
                        [Span::styled(token.original.clone(), style), Span::raw(" ")]
                    })
                    .collect::<Vec<_>>(),
            ),
            None => Line::from(Span::styled("Type a query", theme::muted())),
        };

        frame.render_widget(
            Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .block(theme::block_default("Original")),
            area,
        );
    }

    fn render_corrected(&self, frame: &mut Frame, area: Rect) {
        let line = match &self.result {
            Some(result) => Line::from(
                result
                    .tokens
                    .iter()
                    .flat_map(|token| {
                        let style = match token.kind {
                            CorrectionKind::Known => theme::text(),
                            CorrectionKind::Replaced { .. } => theme::replaced_token(),
                            CorrectionKind::Unresolved => theme::unresolved_token(),
                        };
                        [Span::styled(token.corrected.clone(), style), Span::raw(" ")]
                    })
                    .collect::<Vec<_>>(),
            ),
            None => Line::raw(""),
        };

        frame.render_widget(
            Paragraph::new(line)
                .wrap(Wrap { trim: true })
                .block(theme::block_default("Corrected")),
            area,
        );
    }

    fn render_suggestions(&self, frame: &mut Frame, area: Rect) {
        let items: Vec<ListItem> = match self.result.as_ref().map(|r| &r.suggestions) {
            Some(Suggestions::PerToken(items)) => items
                .iter()
                .map(|item| {
                    ListItem::new(Line::from(vec![
                        Span::styled(format!("{}: ", item.token), theme::heading()),
                        Span::styled(item.candidates.join(", "), theme::text()),
                    ]))
                })
                .collect(),
            Some(Suggestions::Phrase(items)) => items
                .iter()
                .map(|item| {
                    ListItem::new(Line::from(vec![
                        Span::styled(item.candidate.clone(), theme::text()),
                        Span::styled(format!("  ({})", item.score), theme::muted()),
                    ]))
                })
                .collect(),
            Some(Suggestions::None) | None => Vec::new(),
        };

        let list = if items.is_empty() {
            List::new(vec![ListItem::new(Span::styled("No suggestions", theme::muted()))])
        } else {
            List::new(items)
        };

        frame.render_widget(list.block(theme::block_default("Did you mean")), area);
    }

    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let (message, level) = &self.status;
        let message_style = match level {
            StatusLevel::Info => theme::muted(),
            StatusLevel::Warning => ratatui::style::Style::default().fg(theme::WARNING),
            StatusLevel::Error => ratatui::style::Style::default().fg(theme::ERROR),
        };

        let status = Line::from(vec![
            Span::styled(" SPELL ", theme::brand_badge()),
            Span::raw(" "),
            Span::styled(message.as_str(), message_style),
            Span::raw(" │ "),
            Span::styled("Ctrl+R", theme::key_hint()),
            Span::raw(":reload "),
            Span::styled("Ctrl+U", theme::key_hint()),
            Span::raw(":clear "),
            Span::styled("Esc", theme::key_hint()),
            Span::raw(":quit"),
        ]);

        frame.render_widget(Paragraph::new(status), area);
    }
}
