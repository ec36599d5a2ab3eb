use ratatui::style::Color;

/// Colors used by the [`Renderer`](super::Renderer), fixed at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub border: Color,
    pub grid: Color,
    pub snake: Color,
    pub snake_head: Color,
    pub food: Color,
    pub text: Color,
    pub label: Color,
    pub alert: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::Black,
            border: Color::Rgb(100, 100, 100),
            grid: Color::Rgb(100, 100, 100),
            snake: Color::Red,
            snake_head: Color::LightRed,
            food: Color::Green,
            text: Color::White,
            label: Color::Yellow,
            alert: Color::Red,
        }
    }
}

impl Palette {
    /// Plain terminal colors only, for terminals without true color
    pub fn basic() -> Self {
        Self {
            border: Color::DarkGray,
            grid: Color::DarkGray,
            ..Self::default()
        }
    }
}
