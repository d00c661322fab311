use crate::components::banner::{Banner, BANNER_TTL};
use crate::components::list_view::render_offscreen;
use crate::dialog::{handle_dialog_input, DialogAction, InputDialog};
use crate::events::{should_quit, Event, EventHandler};
use crate::selection::SelectionState;
use crate::share::{self, ShareResult};
use crate::ui;
use crossterm::event::{KeyCode, KeyEvent};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use quicklist_core::{InputState, QuicklistResult};
use quicklist_domain::{ShareMethod, TodoId, TodoItem};
use quicklist_export::{ExportOutcome, SnapshotExporter};
use quicklist_persistence::{EditOutcome, KeyValueStore, ListStore};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::io;
use std::path::PathBuf;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    AddItem,
    EditItem(TodoId),
    EditTitle,
    ConfirmClear,
    SelectShare,
}

impl AppMode {
    pub fn input_dialog(self) -> Option<InputDialog> {
        match self {
            AppMode::AddItem => Some(InputDialog::NewItem),
            AppMode::EditItem(_) => Some(InputDialog::EditItem),
            AppMode::EditTitle => Some(InputDialog::Title),
            _ => None,
        }
    }
}

pub struct App<S: KeyValueStore + 'static> {
    pub mode: AppMode,
    pub input: InputState,
    pub selection: SelectionState,
    pub share_selection: SelectionState,
    pub store: ListStore<S>,
    pub banner: Option<Banner>,
    pub should_quit: bool,
    pub export_in_flight: bool,
    /// Where the list panel was last drawn; `None` until the first frame.
    pub list_area: Option<Rect>,
    export_dir: PathBuf,
    events: Option<mpsc::UnboundedSender<Event>>,
}

impl<S: KeyValueStore + 'static> App<S> {
    pub fn new(store: ListStore<S>, export_dir: PathBuf) -> Self {
        let mut selection = SelectionState::new();
        selection.clamp(store.items().len());

        Self {
            mode: AppMode::Normal,
            input: InputState::new(),
            selection,
            share_selection: SelectionState::new(),
            store,
            banner: None,
            should_quit: false,
            export_in_flight: false,
            list_area: None,
            export_dir,
            events: None,
        }
    }

    /// Routes background results (exports) to `sender`. `run` wires this up.
    pub fn set_event_sender(&mut self, sender: mpsc::UnboundedSender<Event>) {
        self.events = Some(sender);
    }

    pub fn export_dir(&self) -> &PathBuf {
        &self.export_dir
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.selection
            .get()
            .and_then(|index| self.store.items().get(index))
    }

    pub fn selected_share_method(&self) -> Option<ShareMethod> {
        self.share_selection
            .get()
            .and_then(|index| ShareMethod::ALL.get(index).copied())
    }

    fn clamp_selection(&mut self) {
        self.selection.clamp(self.store.items().len());
    }

    fn report_error(&mut self, action: &str, error: impl std::fmt::Display) {
        tracing::error!("{} failed: {}", action, error);
        self.banner = Some(Banner::error(format!("{} failed: {}", action, error)));
    }

    pub async fn handle_key_event(&mut self, key: KeyEvent) {
        match self.mode {
            AppMode::Normal => self.handle_normal_key(key).await,
            AppMode::AddItem => {
                if matches!(self.dialog_key(key), DialogAction::Confirm) {
                    self.confirm_add().await;
                }
            }
            AppMode::EditItem(id) => {
                if matches!(self.dialog_key(key), DialogAction::Confirm) {
                    self.confirm_edit(id).await;
                }
            }
            AppMode::EditTitle => {
                if matches!(self.dialog_key(key), DialogAction::Confirm) {
                    self.confirm_title().await;
                }
            }
            AppMode::ConfirmClear => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => {
                    self.mode = AppMode::Normal;
                    self.confirm_clear().await;
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.mode = AppMode::Normal;
                }
                _ => {}
            },
            AppMode::SelectShare => self.handle_share_key(key),
        }
    }

    /// Feeds a key to the open input dialog; leaving the dialog returns to normal mode.
    fn dialog_key(&mut self, key: KeyEvent) -> DialogAction {
        let Some(dialog) = self.mode.input_dialog() else {
            return DialogAction::None;
        };
        let action = handle_dialog_input(&mut self.input, key, dialog);
        if !matches!(action, DialogAction::None) {
            self.mode = AppMode::Normal;
        }
        action
    }

    async fn handle_normal_key(&mut self, key: KeyEvent) {
        if should_quit(&key) {
            self.should_quit = true;
            return;
        }

        let len = self.store.items().len();
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => self.selection.next(len),
            KeyCode::Char('k') | KeyCode::Up => {
                if len > 0 {
                    self.selection.prev();
                }
            }
            KeyCode::Char('g') | KeyCode::Home => {
                if len > 0 {
                    self.selection.set(Some(0));
                }
            }
            KeyCode::Char('G') | KeyCode::End => self.selection.jump_to_last(len),
            KeyCode::Char('a') => {
                self.input.clear();
                self.mode = AppMode::AddItem;
            }
            KeyCode::Char('e') | KeyCode::Enter => {
                if let Some(item) = self.selected_item() {
                    let (id, text) = (item.id, item.text.clone());
                    self.input.set(text);
                    self.mode = AppMode::EditItem(id);
                }
            }
            KeyCode::Char('t') => {
                self.input.set(self.store.title().to_string());
                self.mode = AppMode::EditTitle;
            }
            KeyCode::Char(' ') => self.toggle_selected().await,
            KeyCode::Char('d') => self.delete_selected().await,
            KeyCode::Char('D') => {
                if len == 0 {
                    self.banner = Some(Banner::error("Nothing to clear"));
                } else {
                    self.mode = AppMode::ConfirmClear;
                }
            }
            KeyCode::Char('x') => self.start_export(),
            KeyCode::Char('s') => {
                if len == 0 {
                    self.banner = Some(Banner::error("Nothing to share"));
                } else {
                    self.share_selection.set(Some(0));
                    self.mode = AppMode::SelectShare;
                }
            }
            _ => {}
        }
    }

    fn handle_share_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.mode = AppMode::Normal,
            KeyCode::Char('j') | KeyCode::Down => self.share_selection.next(ShareMethod::ALL.len()),
            KeyCode::Char('k') | KeyCode::Up => self.share_selection.prev(),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.share_selection.set(Some(index));
                self.confirm_share();
            }
            KeyCode::Enter => self.confirm_share(),
            _ => {}
        }
    }

    async fn confirm_add(&mut self) {
        let text = self.input.take();
        match self.store.add(&text).await {
            Ok(Some(_)) => self.selection.jump_to_last(self.store.items().len()),
            Ok(None) => {}
            Err(e) => self.report_error("Add", e),
        }
    }

    async fn confirm_edit(&mut self, id: TodoId) {
        let text = self.input.take();
        match self.store.commit_text(id, &text).await {
            Ok(EditOutcome::Deleted(_)) => {
                self.banner = Some(Banner::success("Removed empty item"));
            }
            Ok(EditOutcome::Updated(_)) => {}
            Ok(EditOutcome::NotFound) => {
                self.banner = Some(Banner::error("Item no longer exists"));
            }
            Err(e) => self.report_error("Edit", e),
        }
        self.clamp_selection();
    }

    async fn confirm_title(&mut self) {
        let title = self.input.take();
        if let Err(e) = self.store.set_title(&title).await {
            self.report_error("Rename", e);
        }
    }

    async fn confirm_clear(&mut self) {
        match self.store.clear().await {
            Ok(()) => self.banner = Some(Banner::success("List cleared")),
            Err(e) => self.report_error("Clear", e),
        }
        self.clamp_selection();
    }

    async fn toggle_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        if let Err(e) = self.store.toggle(id).await {
            self.report_error("Toggle", e);
        }
    }

    async fn delete_selected(&mut self) {
        let Some(id) = self.selected_item().map(|item| item.id) else {
            return;
        };
        if let Err(e) = self.store.delete(id).await {
            self.report_error("Delete", e);
        }
        self.clamp_selection();
    }

    fn confirm_share(&mut self) {
        let Some(method) = self.selected_share_method() else {
            return;
        };
        self.mode = AppMode::Normal;
        match share::share(method, self.store.list()) {
            Ok(ShareResult::Opened(_)) => {
                self.banner = Some(Banner::success(format!("Opened {}", method.label())));
            }
            Ok(ShareResult::Copied) => {
                self.banner = Some(Banner::success("Copied list to clipboard"));
            }
            Err(e) => self.report_error("Share", e),
        }
    }

    /// Captures the list panel and hands encoding and writing to a background
    /// task. The result comes back as [`Event::ExportFinished`].
    pub fn start_export(&mut self) {
        if self.export_in_flight {
            self.banner = Some(Banner::error("Export already running"));
            return;
        }
        if self.store.items().is_empty() {
            self.banner = Some(Banner::error("Nothing to export"));
            return;
        }

        let view = self
            .list_area
            .map(|area| render_offscreen(self.store.list(), area.width));
        let Some(view) = view else {
            self.finish_export(Ok(ExportOutcome::NoTarget));
            return;
        };
        let Some(sender) = self.events.clone() else {
            self.finish_export(Ok(ExportOutcome::NoTarget));
            return;
        };

        self.export_in_flight = true;
        self.banner = Some(Banner::success("Exporting..."));
        let out_dir = self.export_dir.clone();

        tokio::spawn(async move {
            let result = async {
                let document =
                    tokio::task::spawn_blocking(move || SnapshotExporter::render_snapshot(&view))
                        .await
                        .map_err(|e| e.to_string())?
                        .map_err(|e| e.to_string())?;
                let path = SnapshotExporter::write(&document, &out_dir)
                    .await
                    .map_err(|e| e.to_string())?;
                Ok::<_, String>(ExportOutcome::Written {
                    path,
                    page_count: document.page_count,
                })
            }
            .await;
            let _ = sender.send(Event::ExportFinished(result));
        });
    }

    pub fn finish_export(&mut self, result: Result<ExportOutcome, String>) {
        self.export_in_flight = false;
        match result {
            Ok(ExportOutcome::Written { path, page_count }) => {
                self.banner = Some(Banner::success(format!(
                    "Saved {} ({} page{})",
                    path.display(),
                    page_count,
                    if page_count == 1 { "" } else { "s" }
                )));
            }
            Ok(ExportOutcome::NoTarget) => {
                self.banner = Some(Banner::error("List view is not on screen, nothing exported"));
            }
            Err(e) => self.report_error("Export", e),
        }
    }

    pub fn handle_event(&mut self, event: Event) -> Option<KeyEvent> {
        match event {
            Event::Key(key) => return Some(key),
            Event::Tick => {
                if self
                    .banner
                    .as_ref()
                    .is_some_and(|banner| banner.is_expired(BANNER_TTL))
                {
                    self.banner = None;
                }
            }
            Event::ExportFinished(result) => self.finish_export(result),
        }
        None
    }

    pub async fn run(&mut self) -> QuicklistResult<()> {
        let mut terminal = setup_terminal()?;
        let mut events = EventHandler::new();
        self.set_event_sender(events.sender());

        let result = self.event_loop(&mut terminal, &mut events).await;

        events.stop();
        restore_terminal(&mut terminal)?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        events: &mut EventHandler,
    ) -> QuicklistResult<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(self, frame))?;

            let Some(event) = events.next().await else {
                break;
            };
            if let Some(key) = self.handle_event(event) {
                self.handle_key_event(key).await;
            }
        }
        Ok(())
    }
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>, io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<(), io::Error> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
