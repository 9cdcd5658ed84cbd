use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_big_text::{BigText, PixelSize};

use super::theme::{Palette, toggle_icon};

/// Renders the brand bar and the theme toggle button
pub fn render_header(frame: &mut Frame, dark: bool, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),     // Brand
            Constraint::Length(10), // Theme toggle
        ])
        .split(area);

    let brand_style = Style::default().fg(palette.brand_fg).bg(palette.brand_bg);
    let brand_block = Block::default().style(brand_style);
    let inner = brand_block.inner(chunks[0]);
    frame.render_widget(brand_block, chunks[0]);

    // The big font needs 4 rows; fall back to plain text in short terminals
    if inner.height >= 4 && inner.width >= 32 {
        let big_text = BigText::builder()
            .pixel_size(PixelSize::Quadrant)
            .style(brand_style.add_modifier(Modifier::BOLD))
            .lines(vec!["FILMLAND".into()])
            .alignment(Alignment::Center)
            .build();
        frame.render_widget(big_text, inner);
    } else {
        let brand = Paragraph::new(Line::from(Span::styled(
            "FILMLAND",
            brand_style.add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(brand, inner);
    }

    let toggle = Paragraph::new(vec![
        Line::from(Span::styled(toggle_icon(dark), palette.highlight())),
        Line::from(Span::styled("(t)", palette.muted())),
    ])
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .style(palette.card()),
    );

    frame.render_widget(toggle, chunks[1]);
}
