use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use ratatui_image::{Resize, StatefulImage, protocol::StatefulProtocol};

use super::theme::Palette;
use crate::app::poster::{PosterSlot, PosterState};

/// Renders a poster, or a placeholder while it loads or when there is none
pub fn render_poster(frame: &mut Frame, slot: &mut PosterSlot, palette: &Palette, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Poster")
        .style(palette.card());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let placeholder = match slot.state_mut() {
        PosterState::Ready(protocol) => {
            let image = StatefulImage::<StatefulProtocol>::default().resize(Resize::Fit(None));
            frame.render_stateful_widget(image, inner, protocol);
            return;
        }
        PosterState::Loading => Span::styled("Downloading poster...", palette.highlight()),
        PosterState::Failed => Span::styled("Poster unavailable", palette.error()),
        PosterState::Missing => Span::styled("No poster available", palette.muted()),
    };

    let text = vec![Line::from(""), Line::from(""), Line::from(placeholder)];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}
