pub mod app;
pub mod clipboard;
pub mod components;
pub mod dialog;
pub mod events;
pub mod selection;
pub mod share;
pub mod theme;
pub mod ui;

pub use app::{App, AppMode};
pub use components::list_view::{render_offscreen, TodoListView};
