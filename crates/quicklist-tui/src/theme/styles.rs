use super::colors::*;
use ratatui::style::{Modifier, Style};

pub fn focused_border() -> Style {
    Style::default().fg(FOCUSED_BORDER)
}

pub fn unfocused_border() -> Style {
    Style::default().fg(UNFOCUSED_BORDER)
}

pub fn selected_item(selected: bool) -> Style {
    if selected {
        Style::default().bg(SELECTED_BG)
    } else {
        Style::default()
    }
}

/// Open items keep the terminal's own colors, which the snapshot maps to ink on paper.
pub fn item_text(completed: bool) -> Style {
    if completed {
        Style::default()
            .fg(DONE_TEXT)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    }
}

pub fn checkbox(completed: bool) -> Style {
    if completed {
        Style::default().fg(DONE_TEXT)
    } else {
        Style::default()
    }
}

pub fn list_title(has_title: bool) -> Style {
    if has_title {
        Style::default().add_modifier(Modifier::BOLD)
    } else {
        label_text().add_modifier(Modifier::ITALIC)
    }
}

pub fn label_text() -> Style {
    Style::default().fg(LABEL_TEXT)
}

pub fn highlight_text() -> Style {
    Style::default().fg(HIGHLIGHT_TEXT)
}

pub fn bold_highlight() -> Style {
    highlight_text().add_modifier(Modifier::BOLD)
}

pub fn popup_bg() -> Style {
    Style::default().bg(POPUP_BG)
}
