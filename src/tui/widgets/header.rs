use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::PlanConfig;
use crate::tui::theme;
use crate::utils::format::format_today;

pub fn render(frame: &mut Frame, area: Rect, plan: &PlanConfig, now: NaiveDateTime, pinned: bool) {
    let title_line = Line::from(vec![
        Span::styled("  rumbo  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled(
            format!("{}-day plan · {} → {}", plan.total_days(), plan.start_date(), plan.end_date()),
            theme::dim(),
        ),
    ]);

    let mut date_spans = vec![
        Span::styled("📍 Today is ", theme::dim()),
        Span::styled(format_today(now), theme::amber()),
    ];
    if pinned {
        date_spans.push(Span::styled("  (preview)", theme::red()));
    }

    let text = vec![title_line, Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}
