use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
};
use throbber_widgets_tui::{BRAILLE_SIX, Throbber, ThrobberState, WhichUse};

use super::theme::Palette;

/// Renders a centered spinner in place of the content it is waiting for
pub fn render_loading(
    frame: &mut Frame,
    state: &mut ThrobberState,
    label: &str,
    palette: &Palette,
    area: Rect,
) {
    let width = label.chars().count() as u16 + 2;
    let [row] = Layout::vertical([Constraint::Length(1)])
        .flex(Flex::Center)
        .areas(area);
    let [cell] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(row);

    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(palette.text))
        .throbber_style(
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    frame.render_stateful_widget(throbber, cell, state);
}
