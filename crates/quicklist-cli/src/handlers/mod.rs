pub mod export;
pub mod item;
pub mod list;
pub mod share;
