use serde::{Deserialize, Serialize};

/// Millisecond timestamp of creation, bumped past existing ids on collision.
pub type TodoId = u64;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub id: TodoId,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            completed: false,
        }
    }

    /// Merges the provided fields into a copy of this item.
    pub fn merged(&self, update: &ItemUpdate) -> Self {
        Self {
            id: self.id,
            text: update.text.clone().unwrap_or_else(|| self.text.clone()),
            completed: update.completed.unwrap_or(self.completed),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Partial update for a [`TodoItem`]; `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemUpdate {
    pub text: Option<String>,
    pub completed: Option<bool>,
}

impl ItemUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            completed: None,
        }
    }

    pub fn completed(completed: bool) -> Self {
        Self {
            text: None,
            completed: Some(completed),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.completed.is_none()
    }
}
