use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::loading::render_loading;
use super::poster::render_poster;
use super::theme::Palette;
use crate::app::App;
use crate::app::models::MovieDetail;
use crate::app::request::RequestState;

const POSTER_WIDTH: u16 = 36;

/// Renders the movie detail route
pub fn render_movie_detail(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    match app.detail.state() {
        RequestState::Idle | RequestState::Loading => {
            render_loading(frame, &mut app.throbber, "Loading...", palette, area);
        }
        RequestState::Failed(message) => {
            let missing_key = app.config().api_key.is_none();
            render_error_state(frame, message, missing_key, palette, area);
        }
        RequestState::Loaded(_) => render_movie_info(frame, app, palette, area),
    }
}

/// Renders the error message in place of the movie
fn render_error_state(frame: &mut Frame, message: &str, missing_key: bool, palette: &Palette, area: Rect) {
    let mut text = vec![Line::from(""), Line::from(Span::styled(message, palette.error()))];

    if missing_key {
        text.push(Line::from(""));
        text.push(Line::from(Span::styled(
            "TMDB_API_KEY is not set. Export it or add it to .env and restart.",
            palette.muted(),
        )));
    }

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}

/// Renders poster and facts side by side, stacked on narrow terminals
fn render_movie_info(frame: &mut Frame, app: &mut App, palette: &Palette, area: Rect) {
    let direction = if area.width >= POSTER_WIDTH * 2 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    };
    let poster_constraint = match direction {
        Direction::Horizontal => Constraint::Length(POSTER_WIDTH),
        Direction::Vertical => Constraint::Percentage(50),
    };

    let chunks = Layout::default()
        .direction(direction)
        .constraints([poster_constraint, Constraint::Min(10)])
        .split(area);

    render_poster(frame, &mut app.detail.poster, palette, chunks[0]);

    if let Some(movie) = app.detail.movie() {
        render_facts(frame, movie, palette, chunks[1]);
    }
}

fn render_facts(frame: &mut Frame, movie: &MovieDetail, palette: &Palette, area: Rect) {
    let summary = &movie.summary;
    let label = Style::default().fg(palette.text).add_modifier(Modifier::BOLD);

    let content = vec![
        Line::from(Span::styled("← Back (Esc)", Style::default().fg(palette.link))),
        Line::from(""),
        Line::from(Span::styled(
            summary.title.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(movie.overview.clone(), palette.muted())),
        Line::from(""),
        Line::from(vec![
            Span::styled("Release Date: ", label),
            Span::raw(summary.release_date_label()),
        ]),
        Line::from(vec![
            Span::styled("Rating: ", label),
            Span::styled(summary.rating_label(), Style::default().fg(palette.rating)),
        ]),
        Line::from(vec![
            Span::styled("Language: ", label),
            Span::raw(summary.language_label().to_string()),
        ]),
    ];

    let paragraph = Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!("Movie Details - {}", summary.title))
                .style(palette.base()),
        )
        .wrap(Wrap { trim: true });

    frame.render_widget(paragraph, area);
}
