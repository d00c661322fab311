//! The `{title, items}` aggregate persisted under the `todos` key.
//!
//! All mutators operate on `&mut self` and report whether anything changed;
//! the list store applies them to a copy and swaps the copy in only after the
//! storage write succeeds.

use crate::item::{ItemUpdate, TodoId, TodoItem};
use quicklist_core::{QuicklistError, QuicklistResult};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoList {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<TodoItem>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl TodoList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Parses a persisted payload, defaulting missing or null fields and
    /// repairing invariants (see [`TodoList::normalize`]).
    pub fn from_json(bytes: &[u8]) -> QuicklistResult<Self> {
        let mut list: TodoList = serde_json::from_slice(bytes)
            .map_err(|e| QuicklistError::Serialization(e.to_string()))?;
        list.normalize();
        Ok(list)
    }

    pub fn to_json(&self) -> QuicklistResult<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| QuicklistError::Serialization(e.to_string()))
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn position(&self, id: TodoId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    pub fn contains(&self, id: TodoId) -> bool {
        self.get(id).is_some()
    }

    /// Next id: the current time in milliseconds, or one past the highest
    /// existing id when the clock has not moved on. When the highest id is
    /// `TodoId::MAX` the smallest unused id is taken instead.
    pub fn next_id(&self) -> TodoId {
        let now = chrono::Utc::now().timestamp_millis().max(0) as TodoId;
        let Some(max) = self.items.iter().map(|item| item.id).max() else {
            return now;
        };
        match max.checked_add(1) {
            Some(floor) => now.max(floor),
            None => {
                let taken: HashSet<TodoId> = self.items.iter().map(|item| item.id).collect();
                smallest_unused(&taken)
            }
        }
    }

    /// Appends a new open item with trimmed text. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<&TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let id = self.next_id();
        self.items.push(TodoItem::new(id, text));
        self.items.last()
    }

    /// Merges `update` into the item with `id`. Returns false when no item matches.
    pub fn update(&mut self, id: TodoId, update: &ItemUpdate) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.items[index] = self.items[index].merged(update);
        true
    }

    pub fn remove(&mut self, id: TodoId) -> Option<TodoItem> {
        let index = self.position(id)?;
        Some(self.items.remove(index))
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn completed_count(&self) -> usize {
        self.items.iter().filter(|item| item.completed).count()
    }

    /// Drops blank items and reassigns duplicate ids so a loaded list
    /// satisfies the same invariants as one built through the mutators.
    pub fn normalize(&mut self) -> bool {
        let before = self.items.len();
        self.items.retain(|item| !item.is_blank());
        let dropped = before - self.items.len();
        if dropped > 0 {
            tracing::warn!("Dropped {} blank item(s) from loaded list", dropped);
        }

        let mut taken: HashSet<TodoId> = self.items.iter().map(|item| item.id).collect();
        let mut next = taken.iter().max().and_then(|max| max.checked_add(1));
        let mut seen = HashSet::new();
        let mut reassigned = 0;
        for item in &mut self.items {
            if !seen.insert(item.id) {
                let id = match next {
                    Some(id) if !taken.contains(&id) => id,
                    _ => smallest_unused(&taken),
                };
                item.id = id;
                taken.insert(id);
                seen.insert(id);
                next = id.checked_add(1);
                reassigned += 1;
            }
        }
        if reassigned > 0 {
            tracing::warn!("Reassigned {} duplicate item id(s)", reassigned);
        }

        dropped > 0 || reassigned > 0
    }
}

fn smallest_unused(taken: &HashSet<TodoId>) -> TodoId {
    (0..=TodoId::MAX)
        .find(|id| !taken.contains(id))
        .unwrap_or(TodoId::MAX)
}
