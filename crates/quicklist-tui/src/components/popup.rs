use crate::theme::{focused_border, highlight_text, label_text, popup_bg};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

pub fn render_popup_with_block(
    frame: &mut Frame,
    title: &str,
    width_percent: u16,
    height_percent: u16,
) -> Rect {
    let area = centered_rect(width_percent, height_percent, frame.area());

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(focused_border())
        .style(popup_bg());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    inner
}

pub fn render_input_popup(
    frame: &mut Frame,
    title: &str,
    label: &str,
    input_text: &str,
    cursor_column: usize,
) {
    let inner = render_popup_with_block(frame, title, 60, 30);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(label).style(highlight_text()), chunks[0]);

    let input = Paragraph::new(input_text).block(Block::default().borders(Borders::ALL));
    frame.render_widget(input, chunks[1]);

    frame.render_widget(
        Paragraph::new("ENTER: save  ESC: cancel").style(label_text()),
        chunks[2],
    );

    let max_x = chunks[1].width.saturating_sub(2);
    let cursor_x = chunks[1].x + (cursor_column as u16).min(max_x) + 1;
    frame.set_cursor_position((cursor_x, chunks[1].y + 1));
}

pub fn render_confirm_popup(frame: &mut Frame, title: &str, message: &str) {
    let inner = render_popup_with_block(frame, title, 50, 20);

    let lines = vec![
        Line::from(message),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", highlight_text()),
            Span::styled(": confirm  ", label_text()),
            Span::styled("n/ESC", highlight_text()),
            Span::styled(": cancel", label_text()),
        ]),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}
