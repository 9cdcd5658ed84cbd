use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::loading::render_loading;
use super::poster::render_poster;
use super::search::render_search;
use super::theme::Palette;
use crate::app::App;
use crate::app::catalog::MovieCard;

const CARD_WIDTH: u16 = 28;
const CARD_HEIGHT: u16 = 5;
const PREVIEW_WIDTH: u16 = 34;
/// Below this width the poster preview is dropped to keep the grid usable.
const PREVIEW_MIN_TOTAL: u16 = PREVIEW_WIDTH + CARD_WIDTH * 2;

/// Renders the catalog route: search box, heading and the movie grid
pub fn render_catalog(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search
            Constraint::Length(1), // Heading
            Constraint::Min(1),    // Grid
        ])
        .split(area);

    render_search(frame, &app.catalog.search, palette, chunks[0]);

    let heading = Paragraph::new(Line::from(Span::styled(
        " Popular Movies",
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, chunks[1]);

    let content = chunks[2];
    if app.catalog.is_loading() {
        render_loading(frame, &mut app.throbber, "Loading...", palette, content);
        return;
    }

    if let Some(message) = app.catalog.message() {
        let text = vec![Line::from(""), Line::from(Span::styled(message, palette.error()))];
        let paragraph = Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, content);
        return;
    }

    let (grid_area, preview_area) = if content.width >= PREVIEW_MIN_TOTAL {
        let split = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(CARD_WIDTH), Constraint::Length(PREVIEW_WIDTH)])
            .split(content);
        (split[0], Some(split[1]))
    } else {
        (content, None)
    };

    render_grid(frame, app, palette, grid_area);

    if let Some(area) = preview_area {
        render_poster(frame, &mut app.catalog.poster, palette, area);
    }
}

/// Lays the cards out in rows, scrolled so the selection stays visible
fn render_grid(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let columns = (area.width / CARD_WIDTH).max(1);
    let visible_rows = (area.height / CARD_HEIGHT).max(1);
    app.catalog.set_columns(columns as usize);

    let config = app.config();
    let cards = app.catalog.cards(&config.image_base, &config.poster_size);
    let selected = app.catalog.selected();

    let selected_row = selected / columns as usize;
    let first_row = selected_row.saturating_sub(visible_rows as usize - 1);

    let background = Block::default().style(Style::default().bg(palette.surface));
    frame.render_widget(background, area);

    for (index, card) in cards.iter().enumerate().skip(first_row * columns as usize) {
        let row = (index / columns as usize - first_row) as u16;
        if row >= visible_rows {
            break;
        }
        let column = (index % columns as usize) as u16;

        let card_area = Rect {
            x: area.x + column * CARD_WIDTH,
            y: area.y + row * CARD_HEIGHT,
            width: CARD_WIDTH.min(area.width),
            height: CARD_HEIGHT.min(area.height),
        };
        render_card(frame, card, index == selected, palette, card_area);
    }
}

fn render_card(frame: &mut Frame, card: &MovieCard, selected: bool, palette: &Palette, area: Rect) {
    let border_style = if selected {
        palette.highlight()
    } else {
        palette.muted()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title_bottom(if card.poster_url.is_some() { " ▣ " } else { "" })
        .style(palette.card());

    let text = vec![
        Line::from(Span::styled(
            card.title.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(card.year.clone(), palette.muted())),
        Line::from(vec![
            Span::styled(card.rating.clone(), Style::default().fg(palette.rating)),
            Span::raw(" • "),
            Span::raw(card.language.clone()),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}
