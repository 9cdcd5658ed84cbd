use crate::app::App;
use crate::app::router::Route;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::theme::Palette;

/// Returns the appropriate instruction text based on app state
fn get_instruction_text(app: &App) -> &'static str {
    match app.route {
        Route::Catalog if app.catalog.search.is_focused() => {
            "type to search, (Enter) done, (Esc) clear"
        }
        Route::Catalog if app.catalog.movies().is_empty() => {
            "(/) search, (r) retry, (t) theme, (q) quit"
        }
        Route::Catalog => "(←↑↓→/hjkl) move, (Enter) open, (/) search, (t) theme, (q) quit",
        Route::Movie(_) => "(Esc/b) back, (r) reload, (t) theme, (q) quit",
    }
}

/// Renders the footer with the current route and key hints
pub fn render_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let bottom_block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(format!(" {} ", app.route), palette.muted()))
        .style(palette.base());

    let bottom = Paragraph::new(Line::from(get_instruction_text(app))).block(bottom_block);

    frame.render_widget(bottom, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::fake::{FakeApi, app_with};
    use crossterm::event::KeyCode;

    #[test]
    fn hints_follow_route_and_focus() {
        let (mut app, _) = app_with(FakeApi::default(), Route::Catalog);
        assert!(get_instruction_text(&app).contains("(/) search"));

        app.handle_key(KeyCode::Char('/'));
        assert!(get_instruction_text(&app).starts_with("type to search"));

        app.handle_key(KeyCode::Enter);
        app.navigate(Route::Movie("1".into()));
        assert!(get_instruction_text(&app).starts_with("(Esc/b) back"));
    }
}
