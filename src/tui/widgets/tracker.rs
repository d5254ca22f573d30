use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::tracker::DAY_LABELS;
use crate::models::WeekTracker;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, tracker: &WeekTracker, focus: usize) {
    let block = Block::default()
        .title(Span::styled(" This Week ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut spans = vec![Span::styled("  ", theme::dim())];
    for (i, label) in DAY_LABELS.iter().enumerate() {
        let done = tracker.is_done(i as u8);
        let mut style = if done {
            theme::green().add_modifier(Modifier::BOLD)
        } else {
            theme::dim()
        };
        if i == focus {
            style = style.fg(theme::BORDER_FOCUS).add_modifier(Modifier::REVERSED);
        }
        let cell = if done { format!("[{}]", label) } else { format!(" {} ", label) };
        spans.push(Span::styled(cell, style));
        spans.push(Span::styled(" ", theme::dim()));
    }
    spans.push(Span::styled(
        format!("  {}/7", tracker.done_count()),
        theme::dim(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
