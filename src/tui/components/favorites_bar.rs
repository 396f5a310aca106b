//! Favorites count indicator
//!
//! Small right-aligned readout in the title row. Hidden while the count
//! is zero, shown from the first save onwards ("⭐ N Saved").

use crate::favorites::FavoritesStore;
use crate::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

/// Render the indicator; renders nothing while no favorites exist
pub fn render(f: &mut Frame, area: Rect, favorites: &FavoritesStore, theme: &Theme) {
    let count = favorites.count();
    if count == 0 {
        return;
    }

    let label = Paragraph::new(format!("\u{2b50} {} Saved  [f]", count))
        .alignment(Alignment::Right)
        .style(
            Style::default()
                .fg(theme.favorite)
                .add_modifier(Modifier::BOLD),
        );

    f.render_widget(label, area);
}
