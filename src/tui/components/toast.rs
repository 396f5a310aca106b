//! Toast notification component
//!
//! A non-blocking overlay that auto-dismisses after a fixed duration.
//! Renders in the bottom-right corner on top of all other content.
//! Multiple toasts may coexist - each call produces an independent,
//! independently-timed element, stacked upwards. No dedup, no queue.

use crate::theme::Theme;
use crate::util::truncate_to_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// How long a toast stays visible
const TOAST_DURATION: Duration = Duration::from_secs(3);

/// Severity of the notification, mapped to the border color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

/// A transient notification that auto-dismisses
#[derive(Debug)]
pub struct Toast {
    pub message: String,
    pub level: ToastLevel,
    created_at: Instant,
}

impl Toast {
    pub fn new(message: impl Into<String>, level: ToastLevel) -> Self {
        Self {
            message: message.into(),
            level,
            created_at: Instant::now(),
        }
    }

    /// Check if the toast has expired and should be removed
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= TOAST_DURATION
    }

    fn color(&self, theme: &Theme) -> ratatui::style::Color {
        match self.level {
            ToastLevel::Success => theme.success,
            ToastLevel::Error => theme.error,
            ToastLevel::Info => theme.info,
        }
    }

    /// Render the toast, `slot` places it above earlier toasts
    ///
    /// Uses `Clear` so the toast is visible on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, slot: usize) {
        let max_width = area.width.saturating_sub(6) as usize;
        let message = truncate_to_width(&self.message, max_width);

        // Display width + border + 1 cell padding each side
        let width = (message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let height = 3;

        // Bottom-right corner, stacked upwards by slot
        let x = area.right().saturating_sub(width + 2);
        let y = area
            .bottom()
            .saturating_sub(height + 2 + (slot as u16) * height);
        if y < area.top() {
            return; // No room for this slot
        }

        let toast_area = Rect::new(x, y, width, height);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.color(theme)));

        let text = Paragraph::new(message)
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.text))
            .block(block);

        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_toast_is_not_expired() {
        let toast = Toast::new("saved", ToastLevel::Success);
        assert!(!toast.is_expired());
    }

    #[test]
    fn backdated_toast_expires() {
        let mut toast = Toast::new("old", ToastLevel::Info);
        toast.created_at = Instant::now() - TOAST_DURATION;
        assert!(toast.is_expired());
    }
}
