// Views module - screen-level rendering logic
//
// The single main view is two side-by-side content panels with a title
// row and a status bar. Overlays render on top of it in z-order:
// error banner, favorites/help modal, then toasts.

pub mod favorites;
pub mod help;

use super::app::{App, Modal};
use crate::tui::components;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::api::content::ContentKind;
use crate::config::VERSION;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let area = f.area();

    // Vertical shell: title row, optional banner, panels, status bar
    let banner_height = if app.banner.is_some() { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // title row
            Constraint::Length(banner_height), // error banner (when visible)
            Constraint::Min(8),                // content panels
            Constraint::Length(2),             // status bar
        ])
        .split(area);

    render_title_row(f, chunks[0], app);

    if let Some(ref banner) = app.banner {
        banner.render(f, chunks[1], &app.theme);
    }

    // Two independent panels, side by side
    let panels = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);

    components::panel::render(f, panels[0], app, ContentKind::Quote);
    components::panel::render(f, panels[1], app, ContentKind::Fact);

    components::status_bar::render(f, chunks[3], app);

    // Overlays
    match app.modal {
        Some(Modal::Favorites) => favorites::render(f, area, app),
        Some(Modal::Help) => help::render(f, area, app),
        None => {}
    }

    for (slot, toast) in app.toasts.iter().enumerate() {
        toast.render(f, area, &app.theme, slot);
    }
}

/// Title row: app name on the left, favorites indicator on the right
fn render_title_row(f: &mut Frame, area: Rect, app: &App) {
    let title = Paragraph::new(Span::styled(
        format!(" Quotidian v{}", VERSION),
        Style::default()
            .fg(app.theme.title)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Left);
    f.render_widget(title, area);

    components::favorites_bar::render(f, area, &app.favorites, &app.theme);
}

/// Centered rect helper for modals
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(
        x,
        y,
        width.min(area.width),
        height.min(area.height),
    )
}
