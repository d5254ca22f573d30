use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::milestone::{motivation_for, BarTier};
use crate::models::ProgressSnapshot;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &ProgressSnapshot) {
    let tier = BarTier::for_percentage(snapshot.percentage);
    let (from, to) = theme::tier_colors(tier);

    let block = Block::default()
        .title(Span::styled(" Progress ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // big percentage
            Constraint::Length(1), // bar
            Constraint::Length(1), // motivation
        ])
        .split(inner);

    let big = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(Style::default().fg(to).add_modifier(Modifier::BOLD))
        .lines(vec![format!("{}%", snapshot.percentage).into()])
        .alignment(Alignment::Center)
        .build();
    frame.render_widget(big, chunks[0]);

    // Two-tone bar: first half of the filled part in the band's start
    // colour, the rest in its end colour.
    let bar_width = chunks[1].width.saturating_sub(4) as usize;
    let filled = (snapshot.total_days_counted as usize * bar_width)
        .checked_div(snapshot.total_days as usize)
        .unwrap_or(0)
        .min(bar_width);
    let first = filled / 2;
    let bar = Line::from(vec![
        Span::styled("  ", theme::dim()),
        Span::styled("█".repeat(first), Style::default().fg(from)),
        Span::styled("█".repeat(filled - first), Style::default().fg(to)),
        Span::styled("░".repeat(bar_width - filled), Style::default().fg(theme::EMPTY)),
    ]);
    frame.render_widget(Paragraph::new(bar), chunks[1]);

    let motivation = motivation_for(snapshot.percentage);
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(motivation.text, theme::tone(motivation.tone))))
            .alignment(Alignment::Center),
        chunks[2],
    );
}
