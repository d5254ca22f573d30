use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

/// Bottom-right notification box.
pub fn render(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let width = 36u16.min(area.width);
    let height = 4u16.min(area.height);
    let popup_area = Rect {
        x: area.width.saturating_sub(width + 2),
        y: area.height.saturating_sub(height + 2),
        width,
        height,
    };

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold())
        .style(theme::surface());

    let paragraph = Paragraph::new(Line::from(Span::styled(message, theme::bold())))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, popup_area);
}
