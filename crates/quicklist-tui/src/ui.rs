use crate::app::{App, AppMode};
use crate::components::*;
use crate::theme::*;
use quicklist_domain::ShareMethod;
use quicklist_persistence::KeyValueStore;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render<S: KeyValueStore + 'static>(app: &mut App<S>, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(frame.area());

    app.list_area = Some(chunks[0]);
    let view = TodoListView::new(app.store.list())
        .selected(app.selection.get())
        .focused(app.mode == AppMode::Normal);
    frame.render_widget(view, chunks[0]);

    render_footer(app, frame, chunks[1]);

    if let Some(dialog) = app.mode.input_dialog() {
        render_input_popup(
            frame,
            dialog.title(),
            dialog.label(),
            app.input.as_str(),
            app.input.cursor_column(),
        );
    }

    match app.mode {
        AppMode::ConfirmClear => render_confirm_popup(
            frame,
            "Clear List",
            "Remove the title and every item?",
        ),
        AppMode::SelectShare => render_share_popup(app, frame),
        _ => {}
    }

    if let Some(banner) = &app.banner {
        let area = frame.area();
        banner.render(frame, area);
    }
}

fn render_share_popup<S: KeyValueStore + 'static>(app: &App<S>, frame: &mut Frame) {
    let inner = render_popup_with_block(frame, "Share via", 40, 40);
    let selected = app.selected_share_method();

    let lines: Vec<Line> = ShareMethod::ALL
        .iter()
        .enumerate()
        .map(|(index, method)| {
            let style = selected_item(selected == Some(*method));
            Line::from(vec![
                Span::styled(format!("{} ", index + 1), label_text()),
                Span::styled(method.label(), style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn footer_hints(mode: AppMode) -> &'static [(&'static str, &'static str)] {
    match mode {
        AppMode::Normal => &[
            ("a", "add"),
            ("e", "edit"),
            ("space", "toggle"),
            ("d", "delete"),
            ("t", "title"),
            ("D", "clear"),
            ("x", "export"),
            ("s", "share"),
            ("q", "quit"),
        ],
        AppMode::AddItem | AppMode::EditItem(_) | AppMode::EditTitle => {
            &[("ENTER", "save"), ("ESC", "cancel")]
        }
        AppMode::ConfirmClear => &[("y", "confirm"), ("n", "cancel")],
        AppMode::SelectShare => &[("j/k", "move"), ("ENTER", "share"), ("ESC", "cancel")],
    }
}

fn render_footer<S: KeyValueStore + 'static>(app: &App<S>, frame: &mut Frame, area: Rect) {
    let mut spans = Vec::new();
    for (key, action) in footer_hints(app.mode) {
        spans.push(Span::styled(*key, bold_highlight()));
        spans.push(Span::styled(format!(": {}  ", action), label_text()));
    }
    if app.export_in_flight {
        spans.push(Span::styled("exporting...", highlight_text()));
    }

    let border = if app.mode == AppMode::Normal {
        unfocused_border()
    } else {
        focused_border()
    };
    let footer = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(footer, area);
}
