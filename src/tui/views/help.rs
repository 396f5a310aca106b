//! Help modal listing keyboard shortcuts

use crate::tui::app::App;
use crate::tui::views::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("r", "Refresh both panels"),
    ("n", "Next quote category"),
    ("c", "Copy focused content"),
    ("s", "Share focused content"),
    ("Enter / Space", "Save or unsave favorite"),
    ("Tab", "Switch panel focus"),
    ("f", "Open favorites"),
    ("\u{2191}\u{2193} / j k", "Scroll modal"),
    ("?", "Toggle this help"),
    ("Esc", "Close modal"),
    ("q", "Quit"),
];

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let width = 44u16.min(area.width.saturating_sub(4));
    let height = (BINDINGS.len() as u16 + 4).min(area.height.saturating_sub(2));
    let modal_area = centered_rect(width, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_focused))
        .title(Span::styled(
            " Keyboard Shortcuts ",
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ));

    let key_width = BINDINGS
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let mut lines = vec![Line::default()];
    for (key, action) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {key:>key_width$}  "),
                Style::default()
                    .fg(theme.border_focused)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(*action, Style::default().fg(theme.text)),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(block);

    f.render_widget(Clear, modal_area);
    f.render_widget(paragraph, modal_area);
}
