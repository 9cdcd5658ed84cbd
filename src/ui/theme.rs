use ratatui::style::{Color, Modifier, Style};

/// Colors for one theme mode. Light and dark are picked at render time from
/// the persisted flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub surface: Color,
    pub accent: Color,
    pub rating: Color,
    pub error: Color,
    pub link: Color,
    pub brand_bg: Color,
    pub brand_fg: Color,
}

const LIGHT: Palette = Palette {
    background: Color::White,
    text: Color::Black,
    muted: Color::DarkGray,
    surface: Color::Rgb(229, 231, 235),
    accent: Color::Blue,
    rating: Color::Rgb(202, 138, 4),
    error: Color::Red,
    link: Color::Blue,
    brand_bg: Color::Rgb(26, 26, 26),
    brand_fg: Color::White,
};

const DARK: Palette = Palette {
    background: Color::Rgb(17, 24, 39),
    text: Color::White,
    muted: Color::Gray,
    surface: Color::Rgb(31, 41, 55),
    accent: Color::Yellow,
    rating: Color::Yellow,
    error: Color::LightRed,
    link: Color::LightBlue,
    brand_bg: Color::Rgb(26, 26, 26),
    brand_fg: Color::White,
};

impl Palette {
    pub fn for_mode(dark: bool) -> Self {
        if dark { DARK } else { LIGHT }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn card(&self) -> Style {
        Style::default().fg(self.text).bg(self.surface)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn error(&self) -> Style {
        Style::default().fg(self.error).add_modifier(Modifier::BOLD)
    }

    pub fn highlight(&self) -> Style {
        Style::default().fg(self.accent).add_modifier(Modifier::BOLD)
    }
}

/// Icon on the theme button. Dark mode offers the sun, light mode the moon.
pub fn toggle_icon(dark: bool) -> &'static str {
    if dark { "☀" } else { "☾" }
}
