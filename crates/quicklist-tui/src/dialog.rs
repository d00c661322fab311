use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use quicklist_core::InputState;

pub enum DialogAction {
    None,
    Cancel,
    Confirm,
}

/// The single-line input dialogs the list editor opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDialog {
    NewItem,
    EditItem,
    Title,
}

impl InputDialog {
    pub fn title(self) -> &'static str {
        match self {
            InputDialog::NewItem => "New Item",
            InputDialog::EditItem => "Edit Item",
            InputDialog::Title => "List Title",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            InputDialog::NewItem => "What needs doing?",
            InputDialog::EditItem => "Leave empty to remove the item",
            InputDialog::Title => "Title (may be empty):",
        }
    }

    /// Blank text removes an edited item and clears a title, but never adds one.
    pub fn allows_blank(self) -> bool {
        !matches!(self, InputDialog::NewItem)
    }
}

pub fn handle_dialog_input(input: &mut InputState, key: KeyEvent, dialog: InputDialog) -> DialogAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        if key.code == KeyCode::Char('u') {
            input.clear();
        }
        return DialogAction::None;
    }

    match key.code {
        KeyCode::Esc => DialogAction::Cancel,
        KeyCode::Enter if dialog.allows_blank() || !input.is_blank() => DialogAction::Confirm,
        KeyCode::Enter => DialogAction::None,
        KeyCode::Char(c) => {
            input.insert_char(c);
            DialogAction::None
        }
        KeyCode::Backspace => {
            input.backspace();
            DialogAction::None
        }
        KeyCode::Delete => {
            input.delete();
            DialogAction::None
        }
        KeyCode::Left => {
            input.move_left();
            DialogAction::None
        }
        KeyCode::Right => {
            input.move_right();
            DialogAction::None
        }
        KeyCode::Home => {
            input.move_home();
            DialogAction::None
        }
        KeyCode::End => {
            input.move_end();
            DialogAction::None
        }
        _ => DialogAction::None,
    }
}
