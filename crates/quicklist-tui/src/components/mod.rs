pub mod banner;
pub mod list_view;
pub mod popup;

pub use banner::{Banner, BannerVariant};
pub use list_view::TodoListView;
pub use popup::*;
