//! Persistent error banner component
//!
//! A single-slot banner across the top of the screen, distinct from
//! transient toasts. Auto-hides after a fixed delay; showing a new
//! message while one is visible replaces it (not queued).

use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};

/// How long the banner stays visible before auto-hiding
const BANNER_DURATION: Duration = Duration::from_secs(5);

/// The persistent error banner state
#[derive(Debug)]
pub struct Banner {
    pub message: String,
    shown_at: Instant,
}

impl Banner {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            shown_at: Instant::now(),
        }
    }

    /// Check if the banner should auto-hide
    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= BANNER_DURATION
    }

    /// Render the banner across the given area
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.error));

        let text = Paragraph::new(format!("\u{26a0} {}", self.message))
            .alignment(Alignment::Center)
            .style(
                Style::default()
                    .fg(theme.error)
                    .add_modifier(Modifier::BOLD),
            )
            .block(block);

        f.render_widget(text, area);
    }
}
