//! Favorites overview modal
//!
//! Centered overlay listing saved quotes and facts from the store's
//! read-only snapshot, with an empty-state message when nothing is
//! saved yet. Scrollable with Up/Down for long lists; Esc or q closes.

use crate::tui::app::App;
use crate::tui::views::centered_rect;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let width = (area.width * 3 / 4).clamp(30, 72);
    let height = (area.height * 3 / 4).max(10);
    let modal_area = centered_rect(width, height, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.favorite))
        .title(Span::styled(
            " Your Favorites \u{2b50} ",
            Style::default()
                .fg(theme.favorite)
                .add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Span::styled(
            " \u{2191}\u{2193} scroll \u{2022} Esc close ",
            Style::default().fg(theme.counter),
        ));

    let lines = favorite_lines(app);

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((app.modal_scroll as u16, 0))
        .block(block);

    f.render_widget(Clear, modal_area);
    f.render_widget(paragraph, modal_area);
}

/// Build the modal body from the store snapshot
fn favorite_lines(app: &App) -> Vec<Line<'static>> {
    let theme = &app.theme;
    let view = app.favorites.view();
    let mut lines = Vec::new();

    if view.quotes.is_empty() && view.facts.is_empty() {
        lines.push(Line::default());
        lines.push(Line::styled(
            "  No favorites yet!",
            Style::default().fg(theme.author),
        ));
        lines.push(Line::styled(
            "  Press Enter on a quote or fact to save it.",
            Style::default().fg(theme.counter),
        ));
        return lines;
    }

    if !view.quotes.is_empty() {
        lines.push(Line::styled(
            " Quotes",
            Style::default()
                .fg(theme.quote_accent)
                .add_modifier(Modifier::BOLD),
        ));
        for entry in view.quotes {
            lines.push(Line::styled(
                format!("  \u{201c}{}\u{201d}", entry.text),
                Style::default().fg(theme.text),
            ));
            lines.push(Line::styled(
                format!("    \u{2014} {}", entry.author),
                Style::default().fg(theme.author),
            ));
            lines.push(Line::default());
        }
    }

    if !view.facts.is_empty() {
        lines.push(Line::styled(
            " Facts",
            Style::default()
                .fg(theme.fact_accent)
                .add_modifier(Modifier::BOLD),
        ));
        for entry in view.facts {
            lines.push(Line::styled(
                format!("  {}", entry.text),
                Style::default().fg(theme.text),
            ));
            lines.push(Line::default());
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::content::ContentKind;
    use crate::config::Config;
    use crate::logging::LogBuffer;

    fn app() -> App {
        App::new(&Config::default(), LogBuffer::new())
    }

    fn body_text(app: &App) -> String {
        favorite_lines(app)
            .iter()
            .map(|l| {
                l.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn empty_store_shows_empty_state() {
        let app = app();
        assert!(body_text(&app).contains("No favorites yet"));
    }

    #[test]
    fn saved_entries_appear_under_their_section() {
        let mut app = app();
        app.favorites
            .toggle(ContentKind::Quote, "Be yourself.", "Oscar Wilde");
        app.favorites
            .toggle(ContentKind::Fact, "Honey never spoils.", "");

        let text = body_text(&app);
        assert!(text.contains("Quotes"));
        assert!(text.contains("Be yourself."));
        assert!(text.contains("Oscar Wilde"));
        assert!(text.contains("Facts"));
        assert!(text.contains("Honey never spoils."));
        assert!(!text.contains("No favorites yet"));
    }
}
