use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub error: Color,     // Red
    pub border: Color,
    pub head_bg: Color,   // Highlight for the cell under the head
    pub status_bg: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    error: Color::Rgb(243, 139, 168),
    border: Color::Rgb(108, 112, 134),
    head_bg: Color::Rgb(249, 226, 175), // Yellow to match the head marker
    status_bg: Color::Rgb(50, 50, 70),
};
