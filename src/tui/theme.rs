use ratatui::style::{Color, Modifier, Style};

use crate::models::{BarTier, Tone};

pub const BG: Color = Color::Rgb(18, 16, 14);
pub const SURFACE: Color = Color::Rgb(28, 25, 20);
pub const BORDER: Color = Color::Rgb(55, 48, 36);
pub const BORDER_FOCUS: Color = Color::Rgb(196, 160, 68);
pub const TEXT: Color = Color::Rgb(230, 218, 196);
pub const TEXT_DIM: Color = Color::Rgb(130, 118, 96);
pub const GOLD: Color = Color::Rgb(196, 160, 68);
pub const GREEN: Color = Color::Rgb(92, 148, 92);
pub const AMBER: Color = Color::Rgb(210, 138, 60);
pub const RED: Color = Color::Rgb(180, 82, 62);
pub const EMPTY: Color = Color::Rgb(38, 34, 26);

// Progress bar bands
pub const BLUE: Color = Color::Rgb(59, 130, 246);
pub const VIOLET: Color = Color::Rgb(139, 92, 246);
pub const PURPLE: Color = Color::Rgb(168, 85, 247);
pub const ORANGE: Color = Color::Rgb(245, 158, 11);
pub const TEAL: Color = Color::Rgb(16, 185, 129);
pub const EMERALD: Color = Color::Rgb(5, 150, 105);

/// Confetti colours.
pub const CONFETTI: [Color; 5] = [
    Color::Rgb(244, 114, 182),
    Color::Rgb(167, 139, 250),
    Color::Rgb(52, 211, 153),
    Color::Rgb(251, 191, 36),
    Color::Rgb(96, 165, 250),
];

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn green() -> Style {
    Style::default().fg(GREEN)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border() -> Style {
    Style::default().fg(BORDER)
}

/// Start and end colour of the bar for a band.
pub fn tier_colors(tier: BarTier) -> (Color, Color) {
    match tier {
        BarTier::Starting => (BLUE, Color::Rgb(96, 165, 250)),
        BarTier::Early => (BLUE, VIOLET),
        BarTier::Middle => (VIOLET, PURPLE),
        BarTier::Advanced => (PURPLE, ORANGE),
        BarTier::Closing => (ORANGE, TEAL),
        BarTier::Done => (TEAL, EMERALD),
    }
}

pub fn tone(tone: Tone) -> Style {
    let color = match tone {
        Tone::Warm => Color::Rgb(252, 211, 77),
        Tone::Calm => Color::Rgb(110, 231, 183),
        Tone::Hot => Color::Rgb(252, 165, 165),
        Tone::Urgent => Color::Rgb(248, 113, 113),
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
