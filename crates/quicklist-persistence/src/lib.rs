pub mod list_store;
pub mod store;
pub mod traits;

pub use list_store::{EditOutcome, ListStore, TODOS_KEY};
pub use store::*;
pub use traits::*;
