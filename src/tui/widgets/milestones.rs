use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::milestone::{checkpoints_reached, milestones_reached};
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, days: u32) {
    let block = Block::default()
        .title(Span::styled(" Milestones ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let mut checklist = vec![Span::styled("  ", theme::dim())];
    for (day, done) in milestones_reached(days) {
        if done {
            checklist.push(Span::styled(
                format!("✅ {}", day),
                theme::dim().add_modifier(Modifier::CROSSED_OUT),
            ));
        } else {
            checklist.push(Span::styled(format!("⚪ {}", day), theme::bold()));
        }
        checklist.push(Span::styled("  ", theme::dim()));
    }

    let mut lines = vec![Line::from(""), Line::from(checklist), Line::from("")];

    for (checkpoint, done) in checkpoints_reached(days) {
        let status = if done {
            Span::styled("✅ Completed", theme::green().add_modifier(Modifier::BOLD))
        } else {
            Span::styled("Pending", theme::dim())
        };
        lines.push(Line::from(vec![
            Span::styled(format!("  Day {:<4}", checkpoint.day), theme::gold()),
            Span::styled(format!("{:<12}", checkpoint.label), theme::dim()),
            status,
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
