use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme::Palette;
use crate::app::search::SearchBox;

const PLACEHOLDER: &str = "Search Your Movies...";

/// Renders the search input, with a cursor while it has focus
pub fn render_search(frame: &mut Frame, search: &SearchBox, palette: &Palette, area: Rect) {
    let border_style = if search.is_focused() {
        palette.highlight()
    } else {
        palette.muted()
    };

    let block = Block::default()
        .title(" Search (/) ")
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(palette.card());

    let text = if search.value().is_empty() && !search.is_focused() {
        Line::from(Span::styled(PLACEHOLDER, palette.muted()))
    } else {
        Line::from(Span::styled(search.value(), Style::default().fg(palette.text)))
    };

    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(text).block(block), area);

    if search.is_focused() {
        let typed = search.value().chars().count() as u16;
        let x = inner.x + typed.min(inner.width.saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}
