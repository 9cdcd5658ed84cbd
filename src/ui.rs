mod catalog;
mod footer;
mod header;
mod loading;
mod movie_detail;
mod poster;
mod search;
pub mod theme;

use crate::app::App;
use crate::app::router::Route;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::Block,
};

use catalog::render_catalog;
use footer::render_footer;
use header::render_header;
use movie_detail::render_movie_detail;
use theme::Palette;

/// Main UI rendering function that orchestrates all UI components
pub fn ui(frame: &mut Frame, app: &mut App) {
    let dark = app.theme.is_dark();
    let palette = Palette::for_mode(dark);

    // Paint the whole screen so the theme covers every route
    frame.render_widget(Block::default().style(palette.base()), frame.area());

    // Create the main layout: header, content area, footer
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(1),    // Content
            Constraint::Length(3), // Footer
        ])
        .split(frame.area());

    render_header(frame, dark, &palette, chunks[0]);

    match app.route {
        Route::Catalog => render_catalog(frame, app, &palette, chunks[1]),
        Route::Movie(_) => render_movie_detail(frame, app, &palette, chunks[1]),
    }

    render_footer(frame, app, &palette, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    use crate::app::catalog::NO_MOVIES_MESSAGE;
    use crate::app::fake::{FakeApi, Reply, answer, app_with, pump};
    use crate::app::models::{CatalogPage, MovieSummary};

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn bare_movie() -> MovieSummary {
        MovieSummary {
            id: 9,
            title: "Nameless".into(),
            poster_path: None,
            release_date: None,
            vote_average: None,
            original_language: "ko".into(),
        }
    }

    #[test]
    fn catalog_cards_show_formatted_fields() {
        let mut listed = answer().summary;
        listed.title = "Deep Thought".into();
        let api = FakeApi::default().with_catalog(
            "",
            Reply::Page(CatalogPage::Movies(vec![listed, bare_movie()])),
        );
        let (mut app, _) = app_with(api, Route::Catalog);
        pump(&mut app, 1);

        let screen = render(&mut app);
        assert!(screen.contains("Popular Movies"));
        assert!(screen.contains("Deep Thought"));
        assert!(screen.contains("1979"));
        assert!(screen.contains("7.8 • en"));
        assert!(screen.contains("Nameless"));
        assert!(screen.contains("N/A • ko"));
        assert!(screen.contains("No poster available"));
    }

    #[test]
    fn catalog_shows_loading_then_message() {
        let (mut app, _) = app_with(FakeApi::default(), Route::Catalog);
        let screen = render(&mut app);
        assert!(screen.contains("Loading..."));

        pump(&mut app, 1);
        let screen = render(&mut app);
        assert!(screen.contains(NO_MOVIES_MESSAGE));
    }

    #[test]
    fn detail_route_shows_movie_facts() {
        let api = FakeApi::default().with_detail(answer());
        let (mut app, _) = app_with(api, Route::Movie("42".into()));
        pump(&mut app, 2);

        let screen = render(&mut app);
        assert!(screen.contains("The Answer"));
        assert!(screen.contains("Forty-two."));
        assert!(screen.contains("Release Date: October 12, 1979"));
        assert!(screen.contains("Rating: 7.8"));
        assert!(screen.contains("Language: en"));
        assert!(screen.contains("← Back"));
        assert!(screen.contains("/movie/42"));
    }

    #[test]
    fn detail_failure_shows_only_the_message() {
        let (mut app, _) = app_with(FakeApi::default(), Route::Movie("7".into()));
        pump(&mut app, 2);

        let screen = render(&mut app);
        assert!(screen.contains("Couldn't Load Movie Details, Try Again Later."));
        assert!(!screen.contains("Release Date"));
    }

    #[test]
    fn theme_toggle_swaps_icon() {
        let (mut app, _) = app_with(FakeApi::default(), Route::Catalog);
        assert!(render(&mut app).contains("☾"));
        app.toggle_theme();
        assert!(render(&mut app).contains("☀"));
    }
}
