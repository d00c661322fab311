pub mod item;
pub mod list;
pub mod share;

pub use item::{ItemUpdate, TodoId, TodoItem};
pub use list::TodoList;
pub use share::{share_link, share_message, ShareMethod};
