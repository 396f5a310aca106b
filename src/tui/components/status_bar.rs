// Status bar component
//
// Bottom line: keyboard hints on the left, the most recent warning or
// error from the log buffer on the right.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::util::truncate_to_width;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status bar with shortcut hints
pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let hints = " r Refresh \u{2022} f Favorites \u{2022} Tab Focus \u{2022} ? Help \u{2022} q Quit";

    let mut spans = vec![Span::styled(
        hints,
        Style::default().fg(app.theme.status_bar),
    )];

    // Most recent warning/error, truncated to the remaining width
    if let Some(entry) = app.log_buffer.latest_at_least(LogLevel::Warn) {
        let used = hints.len() as u16 + 3;
        let remaining = area.width.saturating_sub(used) as usize;
        if remaining > 8 {
            let color = if entry.level == LogLevel::Error {
                app.theme.error
            } else {
                app.theme.loading
            };
            let readout = format!(
                "{} {}: {}",
                entry.timestamp.format("%H:%M:%S"),
                entry.level.as_str(),
                entry.message
            );
            spans.push(Span::styled(
                format!("  {}", truncate_to_width(&readout, remaining)),
                Style::default().fg(color),
            ));
        }
    }

    let status = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
