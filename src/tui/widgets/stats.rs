use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::milestone::adjustment_label;
use crate::models::ProgressSnapshot;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, snapshot: &ProgressSnapshot) {
    let block = Block::default()
        .title(Span::styled(" Stats ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border())
        .style(theme::surface());

    let row = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(format!("  {:<16}", label), theme::dim()),
            Span::styled(value, theme::bold()),
        ])
    };

    let adjust_style = match snapshot.manual_offset {
        o if o > 0 => theme::green(),
        o if o < 0 => theme::amber(),
        _ => theme::dim(),
    };

    let lines = vec![
        Line::from(""),
        row("Days", format!("{} / {}", snapshot.total_days_counted, snapshot.total_days)),
        row("Week", snapshot.week.to_string()),
        row("Completed", format!("{}%", snapshot.percentage)),
        row("Remaining", format!("{} days", snapshot.remaining_days)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("  {:<16}", "Calendar"), theme::dim()),
            Span::styled(format!("{} days", snapshot.auto_days), theme::dim()),
        ]),
        Line::from(vec![
            Span::styled(format!("  {:<16}", "Adjustment"), theme::dim()),
            Span::styled(
                adjustment_label(snapshot.manual_offset),
                adjust_style.add_modifier(Modifier::ITALIC),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
