//! Content panel component
//!
//! Renders one panel (quote or fact) in whichever of its four states it
//! is in: Idle, Loading, Displayed, Errored. The displayed state carries
//! the action hint row (copy / share / save) bound to the exact fetched
//! text via the app's focused-panel actions.
//!
//! Everything goes through ratatui Line/Span view models built from the
//! fetched values - there is no markup interpolation and therefore no
//! escaping concern.

use crate::api::content::ContentKind;
use crate::favorites::FavoritesStore;
use crate::theme::Theme;
use crate::tui::app::{App, PanelState};
use crate::util::counter_line;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the panel for `kind` into `area`
pub fn render(f: &mut Frame, area: Rect, app: &App, kind: ContentKind) {
    let theme = &app.theme;
    let panel = app.panel(kind);
    let focused = app.focused == kind;

    let accent = match kind {
        ContentKind::Quote => theme.quote_accent,
        ContentKind::Fact => theme.fact_accent,
    };

    let title = match kind {
        ContentKind::Quote => format!(" Quote ({}) ", app.category),
        ContentKind::Fact => " Fact ".to_string(),
    };

    let border_color = if focused {
        theme.border_focused
    } else {
        theme.border
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(Span::styled(
            title,
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        ));

    let lines = body_lines(
        &panel.state,
        kind,
        theme,
        &app.favorites,
        app.spinner(),
        focused,
    );

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    f.render_widget(paragraph, area);
}

/// Build the panel body as a structured view model
fn body_lines(
    state: &PanelState,
    kind: ContentKind,
    theme: &Theme,
    favorites: &FavoritesStore,
    spinner: &'static str,
    focused: bool,
) -> Vec<Line<'static>> {
    match state {
        PanelState::Idle => vec![
            Line::default(),
            Line::styled(
                "  Press r to load",
                Style::default().fg(theme.counter),
            ),
        ],
        PanelState::Loading => vec![
            Line::default(),
            Line::styled(
                format!("  {} Loading {}...", spinner, kind.label().to_lowercase()),
                Style::default().fg(theme.loading),
            ),
        ],
        PanelState::Displayed(item) => {
            let mut lines = vec![Line::default()];

            match kind {
                ContentKind::Quote => {
                    lines.push(Line::styled(
                        format!("  \u{201c}{}\u{201d}", item.text()),
                        Style::default()
                            .fg(theme.text)
                            .add_modifier(Modifier::ITALIC),
                    ));
                    lines.push(Line::default());
                    lines.push(Line::styled(
                        format!("  \u{2014} {}", item.author()),
                        Style::default().fg(theme.author),
                    ));
                }
                ContentKind::Fact => {
                    lines.push(Line::styled(
                        format!("  {}", item.text()),
                        Style::default().fg(theme.text),
                    ));
                }
            }

            lines.push(Line::default());
            lines.push(Line::styled(
                format!("  {}", counter_line(item.text())),
                Style::default().fg(theme.counter),
            ));
            lines.push(Line::default());
            lines.push(action_row(item.kind(), item.text(), theme, favorites, focused));
            lines
        }
        PanelState::Errored(message) => vec![
            Line::default(),
            Line::styled(
                format!("  \u{2717} Unable to load {}", kind.label().to_lowercase()),
                Style::default().fg(theme.error).add_modifier(Modifier::BOLD),
            ),
            Line::default(),
            Line::styled(
                format!("  {}", message),
                Style::default().fg(theme.author),
            ),
        ],
    }
}

/// The three action controls bound to the displayed item
fn action_row(
    kind: ContentKind,
    text: &str,
    theme: &Theme,
    favorites: &FavoritesStore,
    focused: bool,
) -> Line<'static> {
    let key_style = if focused {
        Style::default()
            .fg(theme.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.counter)
    };
    let label_style = Style::default().fg(theme.counter);

    let save_label = if favorites.contains(kind, text) {
        Span::styled(
            " \u{2605} Saved".to_string(),
            Style::default().fg(theme.favorite),
        )
    } else {
        Span::styled(" Save".to_string(), label_style)
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled("c", key_style),
        Span::styled(" Copy   ", label_style),
        Span::styled("s", key_style),
        Span::styled(" Share   ", label_style),
        Span::styled("\u{23ce}", key_style),
        save_label,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::content::Quote;
    use crate::events::FetchedItem;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn body_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(line_text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn displayed(text: &str, author: &str) -> PanelState {
        PanelState::Displayed(FetchedItem::Quote(Quote {
            text: text.to_string(),
            author: author.to_string(),
        }))
    }

    #[test]
    fn displayed_quote_shows_text_author_and_actions() {
        let lines = body_lines(
            &displayed("Be yourself.", "Oscar Wilde"),
            ContentKind::Quote,
            &Theme::dark(),
            &FavoritesStore::new(),
            "",
            true,
        );
        let text = body_text(&lines);

        assert!(text.contains("\u{201c}Be yourself.\u{201d}"));
        assert!(text.contains("\u{2014} Oscar Wilde"));
        // Three action controls
        assert!(text.contains("Copy"));
        assert!(text.contains("Share"));
        assert!(text.contains("Save"));
        // Counter line supplement
        assert!(text.contains("2 words"));
    }

    #[test]
    fn errored_fact_shows_failure_message() {
        let state = PanelState::Errored("No facts available".to_string());
        let lines = body_lines(
            &state,
            ContentKind::Fact,
            &Theme::dark(),
            &FavoritesStore::new(),
            "",
            false,
        );
        let text = body_text(&lines);

        assert!(text.contains("Unable to load fact"));
        assert!(text.contains("No facts available"));
    }

    #[test]
    fn saved_item_shows_star_instead_of_save() {
        let mut favorites = FavoritesStore::new();
        favorites.toggle(ContentKind::Quote, "X", "Y");

        let lines = body_lines(
            &displayed("X", "Y"),
            ContentKind::Quote,
            &Theme::dark(),
            &favorites,
            "",
            true,
        );
        let text = body_text(&lines);

        assert!(text.contains("\u{2605} Saved"));
    }

    #[test]
    fn loading_state_shows_spinner() {
        let lines = body_lines(
            &PanelState::Loading,
            ContentKind::Quote,
            &Theme::dark(),
            &FavoritesStore::new(),
            "⠋",
            true,
        );
        assert!(body_text(&lines).contains("Loading quote"));
    }
}
