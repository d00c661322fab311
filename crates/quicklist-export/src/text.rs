//! Selectable-text rendition of a [`TodoList`], paginated by line count.

use crate::layout::{PageLayout, PT_PER_MM};
use crate::pdf::literal_string;
use quicklist_domain::TodoList;

const TITLE_SIZE_PT: f64 = 18.0;
const BODY_SIZE_PT: f64 = 12.0;
const LINE_HEIGHT_MM: f64 = 7.0;
const MARGIN_BOTTOM_MM: f64 = 20.0;
/// Roughly what fits across 190 mm of 12 pt Helvetica.
const WRAP_COLUMNS: usize = 85;
/// The same width at 18 pt.
const TITLE_WRAP_COLUMNS: usize = WRAP_COLUMNS * 12 / 18;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextLine {
    Title(String),
    Body(String),
    Blank,
}

/// Breaks `text` on whitespace into lines of at most `width` characters.
/// Words longer than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let mut word: Vec<char> = word.chars().collect();
        while word.len() > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let rest = word.split_off(width);
            lines.push(word.into_iter().collect());
            word = rest;
        }

        let word: String = word.into_iter().collect();
        let needed = current.chars().count() + word.chars().count() + usize::from(!current.is_empty());
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(&word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Lines of the document: the title and a blank line when there is a title,
/// then each item as `[x] text` or `[ ] text`, continuation lines indented.
pub fn document_lines(list: &TodoList) -> Vec<TextLine> {
    let mut lines = Vec::new();
    if !list.title.is_empty() {
        lines.extend(
            wrap(&list.title, TITLE_WRAP_COLUMNS)
                .into_iter()
                .map(TextLine::Title),
        );
        lines.push(TextLine::Blank);
    }
    for item in &list.items {
        let mark = if item.completed { "[x]" } else { "[ ]" };
        for (index, line) in wrap(&item.text, WRAP_COLUMNS - 4).into_iter().enumerate() {
            let prefix = if index == 0 { mark } else { "   " };
            lines.push(TextLine::Body(format!("{} {}", prefix, line)));
        }
    }
    lines
}

pub fn lines_per_page(layout: &PageLayout) -> usize {
    let usable = layout.page_height - layout.margin_top - MARGIN_BOTTOM_MM;
    ((usable / LINE_HEIGHT_MM).floor() as usize).max(1)
}

/// One content stream per page. An empty list still yields one blank page.
pub fn page_contents(layout: &PageLayout, list: &TodoList) -> Vec<Vec<u8>> {
    let lines = document_lines(list);
    let per_page = lines_per_page(layout);
    if lines.is_empty() {
        return vec![Vec::new()];
    }

    lines
        .chunks(per_page)
        .map(|chunk| {
            let mut content = Vec::new();
            for (row, line) in chunk.iter().enumerate() {
                let (size, text) = match line {
                    TextLine::Title(text) => (TITLE_SIZE_PT, text.as_str()),
                    TextLine::Body(text) => (BODY_SIZE_PT, text.as_str()),
                    TextLine::Blank => continue,
                };
                let baseline_mm = layout.margin_top + LINE_HEIGHT_MM * (row as f64 + 1.0);
                content.extend_from_slice(
                    format!(
                        "BT /F1 {} Tf {:.2} {:.2} Td ",
                        size,
                        layout.margin_side * PT_PER_MM,
                        (layout.page_height - baseline_mm) * PT_PER_MM
                    )
                    .as_bytes(),
                );
                content.extend_from_slice(&literal_string(text));
                content.extend_from_slice(b" Tj ET\n");
            }
            content
        })
        .collect()
}
