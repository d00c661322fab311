use crate::theme::{checkbox, focused_border, item_text, label_text, list_title, selected_item};
use quicklist_domain::{TodoItem, TodoList};
use quicklist_export::text::wrap;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Rows and columns taken by the block borders.
const BORDER: u16 = 2;
/// Width of the `[ ] ` checkbox; continuation lines are indented by it.
const CHECKBOX_WIDTH: usize = 4;

pub const EMPTY_HINT: &str = "Nothing to do yet. Press 'a' to add an item.";
pub const UNTITLED: &str = "Untitled list";

/// The list panel: title, then one checkbox entry per item, wrapped to the
/// panel width.
///
/// The same widget backs the terminal view and the export snapshot, so what
/// lands in the PDF is what the panel shows.
pub struct TodoListView<'a> {
    list: &'a TodoList,
    selected: Option<usize>,
    focused: bool,
}

impl<'a> TodoListView<'a> {
    pub fn new(list: &'a TodoList) -> Self {
        Self {
            list,
            selected: None,
            focused: false,
        }
    }

    pub fn selected(mut self, selected: Option<usize>) -> Self {
        self.selected = selected;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Height needed to show every wrapped row at `width` columns without scrolling.
    pub fn content_height(list: &TodoList, width: u16) -> u16 {
        let rows = TodoListView::new(list).lines(width.saturating_sub(BORDER)).0.len();
        (rows.min(u16::MAX as usize) as u16).saturating_add(BORDER)
    }

    /// Wrapped lines at `text_width` columns, plus the row range of the selected item.
    fn lines(&self, text_width: u16) -> (Vec<Line<'a>>, Option<(u16, u16)>) {
        let text_width = usize::from(text_width).max(1);
        let mut lines = Vec::with_capacity(self.list.len() + 2);

        let has_title = !self.list.title.trim().is_empty();
        let title = if has_title {
            self.list.title.as_str()
        } else {
            UNTITLED
        };
        for row in wrap(title, text_width) {
            lines.push(Line::from(Span::styled(row, list_title(has_title))));
        }
        lines.push(Line::from(""));

        if self.list.items.is_empty() {
            for row in wrap(EMPTY_HINT, text_width) {
                lines.push(Line::from(Span::styled(row, label_text())));
            }
            return (lines, None);
        }

        let mut selected_rows = None;
        for (index, item) in self.list.items.iter().enumerate() {
            let first = lines.len() as u16;
            let highlight = selected_item(self.focused && self.selected == Some(index));
            for line in item_lines(item, text_width) {
                lines.push(line.patch_style(highlight));
            }
            if self.selected == Some(index) {
                selected_rows = Some((first, (lines.len() as u16).saturating_sub(1)));
            }
        }
        (lines, selected_rows)
    }
}

/// Scroll so the last row of the selection sits inside `visible_rows`.
fn scroll_offset(selected_rows: Option<(u16, u16)>, visible_rows: u16) -> u16 {
    let Some((first, last)) = selected_rows else {
        return 0;
    };
    last.saturating_sub(visible_rows.saturating_sub(1)).min(first)
}

fn item_lines(item: &TodoItem, text_width: usize) -> Vec<Line<'static>> {
    let mark = if item.completed { "[x] " } else { "[ ] " };
    let mut rows = wrap(&item.text, text_width.saturating_sub(CHECKBOX_WIDTH));
    if rows.is_empty() {
        rows.push(String::new());
    }

    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            let prefix = if index == 0 { mark } else { "    " };
            Line::from(vec![
                Span::styled(prefix, checkbox(item.completed)),
                Span::styled(row, item_text(item.completed)),
            ])
        })
        .collect()
}

impl Widget for TodoListView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let summary = format!(
            " To-Do {}/{} ",
            self.list.completed_count(),
            self.list.len()
        );
        let mut block = Block::default().borders(Borders::ALL).title(summary);
        if self.focused {
            block = block.border_style(focused_border());
        }

        let inner = block.inner(area);
        let (lines, selected_rows) = self.lines(inner.width);
        let offset = scroll_offset(selected_rows, inner.height);
        Paragraph::new(lines)
            .block(block)
            .scroll((offset, 0))
            .render(area, buf);
    }
}

/// Mounts the list view offscreen at `width` columns and full content height.
pub fn render_offscreen(list: &TodoList, width: u16) -> Buffer {
    let area = Rect::new(0, 0, width, TodoListView::content_height(list, width));
    let mut buffer = Buffer::empty(area);
    TodoListView::new(list).render(area, &mut buffer);
    buffer
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .filter_map(|x| buffer.cell((x, y)).map(|cell| cell.symbol().to_string()))
            .collect()
    }

    #[test]
    fn test_offscreen_height_covers_every_item() {
        let mut list = TodoList::with_title("Groceries");
        for text in ["Milk", "Eggs", "Bread"] {
            list.add(text);
        }

        let buffer = render_offscreen(&list, 40);
        assert_eq!(buffer.area.height, 7);
        assert_eq!(buffer.area.width, 40);
        assert!(row_text(&buffer, 1).contains("Groceries"));
        assert!(row_text(&buffer, 3).contains("[ ] Milk"));
        assert!(row_text(&buffer, 5).contains("[ ] Bread"));
    }

    #[test]
    fn test_completed_items_are_checked() {
        let mut list = TodoList::new();
        let id = list.add("Call mum").map(|item| item.id).unwrap();
        list.update(id, &quicklist_domain::ItemUpdate::completed(true));

        let buffer = render_offscreen(&list, 30);
        assert!(row_text(&buffer, 3).contains("[x] Call mum"));
    }

    #[test]
    fn test_empty_list_shows_hint() {
        let buffer = render_offscreen(&TodoList::new(), 60);
        assert_eq!(buffer.area.height, 5);
        assert!(row_text(&buffer, 1).contains(UNTITLED));
        assert!(row_text(&buffer, 3).contains("Nothing to do yet"));
    }

    #[test]
    fn test_scroll_keeps_selection_visible() {
        let mut list = TodoList::new();
        for i in 0..20 {
            list.add(&format!("Item {}", i));
        }
        let view = TodoListView::new(&list).selected(Some(15)).focused(true);
        let (_, rows) = view.lines(40);
        assert_eq!(rows, Some((17, 17)));
        assert_eq!(scroll_offset(rows, 10), 8);
        assert_eq!(scroll_offset(rows, 40), 0);
    }

    #[test]
    fn test_long_items_wrap_under_the_checkbox() {
        let mut list = TodoList::new();
        list.add(
            "Call the landlord about the broken radiator in the hallway and ask \
             for repair date before Friday END",
        );
        list.add("Short");

        let buffer = render_offscreen(&list, 40);
        let rows: Vec<String> = (0..buffer.area.height).map(|y| row_text(&buffer, y)).collect();
        let all = rows.join("\n");

        assert!(all.contains("END"));
        assert!(rows[3].contains("[ ] Call the landlord"));
        assert!(rows[4].starts_with("│    "));
        assert!(rows.iter().any(|row| row.contains("[ ] Short")));
        // Borders, title, spacer, three wrapped rows, one short row.
        assert_eq!(buffer.area.height, 2 + 2 + 3 + 1);
    }

    #[test]
    fn test_scroll_shows_whole_wrapped_selection() {
        let mut list = TodoList::with_title("Todo");
        for i in 0..5 {
            list.add(&format!("Item {}", i));
        }
        list.add("ab cd ef gh ij kl");
        // Inner width 10 leaves six columns for text: three rows for the last item.
        let view = TodoListView::new(&list).selected(Some(5));
        let (_, rows) = view.lines(10);
        assert_eq!(rows, Some((7, 9)));
        assert_eq!(scroll_offset(rows, 4), 6);
    }
}
