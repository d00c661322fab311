//! Single owner of the to-do list and its persisted copy.
//!
//! Every mutator builds the next [`TodoList`], writes it under [`TODOS_KEY`]
//! and only then replaces the in-memory list, so memory and storage agree
//! whenever a call returns. Taking `&mut self` keeps operations from
//! interleaving.

use crate::traits::KeyValueStore;
use quicklist_core::QuicklistResult;
use quicklist_domain::{ItemUpdate, TodoId, TodoItem, TodoList};

pub const TODOS_KEY: &str = "todos";

/// Result of committing edited item text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Updated(TodoItem),
    /// The edit left the text blank, so the item was removed.
    Deleted(TodoItem),
    NotFound,
}

pub struct ListStore<S: KeyValueStore> {
    store: S,
    list: TodoList,
}

impl<S: KeyValueStore> ListStore<S> {
    /// Reads the persisted list. A missing entry gives an empty list and so
    /// does an entry that cannot be parsed, after logging a warning.
    pub async fn load(store: S) -> QuicklistResult<Self> {
        let list = Self::read(&store).await?;
        Ok(Self { store, list })
    }

    async fn read(store: &S) -> QuicklistResult<TodoList> {
        let Some(bytes) = store.get(TODOS_KEY).await? else {
            tracing::debug!("No persisted list, starting empty");
            return Ok(TodoList::new());
        };

        match TodoList::from_json(&bytes) {
            Ok(list) => {
                tracing::info!("Loaded list with {} item(s)", list.len());
                Ok(list)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed persisted list: {}", e);
                Ok(TodoList::new())
            }
        }
    }

    /// Discards in-memory state and reads storage again.
    pub async fn reload(&mut self) -> QuicklistResult<()> {
        self.list = Self::read(&self.store).await?;
        Ok(())
    }

    pub fn list(&self) -> &TodoList {
        &self.list
    }

    pub fn title(&self) -> &str {
        &self.list.title
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.list.items
    }

    pub fn get(&self, id: TodoId) -> Option<&TodoItem> {
        self.list.get(id)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    async fn commit(&mut self, next: TodoList) -> QuicklistResult<()> {
        let bytes = next.to_json()?;
        self.store.set(TODOS_KEY, &bytes).await?;
        self.list = next;
        Ok(())
    }

    /// Appends an item with trimmed text. Blank text changes nothing.
    pub async fn add(&mut self, text: &str) -> QuicklistResult<Option<TodoItem>> {
        let mut next = self.list.clone();
        let Some(item) = next.add(text).cloned() else {
            return Ok(None);
        };
        self.commit(next).await?;
        tracing::info!("Added item {} ({})", item.id, item.text);
        Ok(Some(item))
    }

    /// Merges `update` into the matching item. Returns `None` for unknown ids.
    ///
    /// Emptied text is not rejected here; use [`ListStore::commit_text`] for
    /// user edits.
    pub async fn update(
        &mut self,
        id: TodoId,
        update: ItemUpdate,
    ) -> QuicklistResult<Option<TodoItem>> {
        let mut next = self.list.clone();
        if !next.update(id, &update) {
            tracing::debug!("Update for unknown item {} ignored", id);
            return Ok(None);
        }
        let updated = next.get(id).cloned();
        self.commit(next).await?;
        tracing::info!("Updated item {}", id);
        Ok(updated)
    }

    /// Saves edited text as typed, deleting the item when the text is blank.
    pub async fn commit_text(&mut self, id: TodoId, text: &str) -> QuicklistResult<EditOutcome> {
        if text.trim().is_empty() {
            return Ok(match self.delete(id).await? {
                Some(item) => EditOutcome::Deleted(item),
                None => EditOutcome::NotFound,
            });
        }
        Ok(match self.update(id, ItemUpdate::text(text)).await? {
            Some(item) => EditOutcome::Updated(item),
            None => EditOutcome::NotFound,
        })
    }

    pub async fn toggle(&mut self, id: TodoId) -> QuicklistResult<Option<TodoItem>> {
        let Some(completed) = self.list.get(id).map(|item| item.completed) else {
            return Ok(None);
        };
        self.update(id, ItemUpdate::completed(!completed)).await
    }

    pub async fn delete(&mut self, id: TodoId) -> QuicklistResult<Option<TodoItem>> {
        let mut next = self.list.clone();
        let Some(removed) = next.remove(id) else {
            return Ok(None);
        };
        self.commit(next).await?;
        tracing::info!("Deleted item {}", id);
        Ok(Some(removed))
    }

    /// Replaces the title, keeping the current items.
    pub async fn set_title(&mut self, title: &str) -> QuicklistResult<()> {
        let mut next = self.list.clone();
        next.set_title(title);
        self.commit(next).await
    }

    /// Empties the list and removes the persisted entry entirely.
    pub async fn clear(&mut self) -> QuicklistResult<()> {
        self.store.remove(TODOS_KEY).await?;
        self.list = TodoList::new();
        tracing::info!("Cleared list");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    async fn persisted(store: &MemoryStore) -> Option<TodoList> {
        store
            .get(TODOS_KEY)
            .await
            .unwrap()
            .map(|bytes| serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_load_missing_entry_is_empty() {
        let list_store = ListStore::load(MemoryStore::new()).await.unwrap();
        assert!(list_store.list().is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_entry_is_empty() {
        let store = MemoryStore::with_entry(TODOS_KEY, b"{\"items\": [");
        let list_store = ListStore::load(store).await.unwrap();
        assert!(list_store.list().is_empty());
    }

    #[tokio::test]
    async fn test_add_whitespace_changes_nothing() {
        let store = MemoryStore::new();
        let mut list_store = ListStore::load(store.clone()).await.unwrap();

        assert!(list_store.add("   ").await.unwrap().is_none());
        assert!(list_store.items().is_empty());
        assert!(persisted(&store).await.is_none());
    }

    #[tokio::test]
    async fn test_add_persists_with_title() {
        let store = MemoryStore::new();
        let mut list_store = ListStore::load(store.clone()).await.unwrap();
        list_store.set_title("Groceries").await.unwrap();

        let existing = list_store.add("Bread").await.unwrap().unwrap();
        let item = list_store.add("  Buy milk  ").await.unwrap().unwrap();

        assert_eq!(item.text, "Buy milk");
        assert!(!item.completed);
        assert_ne!(item.id, existing.id);

        let saved = persisted(&store).await.unwrap();
        assert_eq!(saved.title, "Groceries");
        assert_eq!(saved.items.len(), 2);
        assert_eq!(&saved, list_store.list());
    }

    #[tokio::test]
    async fn test_update_unknown_id_writes_nothing() {
        let store = MemoryStore::new();
        let mut list_store = ListStore::load(store.clone()).await.unwrap();

        let result = list_store.update(99, ItemUpdate::completed(true)).await.unwrap();
        assert!(result.is_none());
        assert!(persisted(&store).await.is_none());
    }

    #[tokio::test]
    async fn test_commit_blank_text_deletes() {
        let store = MemoryStore::new();
        let mut list_store = ListStore::load(store.clone()).await.unwrap();
        let item = list_store.add("Walk dog").await.unwrap().unwrap();

        let outcome = list_store.commit_text(item.id, "  ").await.unwrap();
        assert_eq!(outcome, EditOutcome::Deleted(item.clone()));
        assert!(list_store.items().is_empty());

        let again = list_store.commit_text(item.id, "").await.unwrap();
        assert_eq!(again, EditOutcome::NotFound);
        assert!(persisted(&store).await.unwrap().items.is_empty());
    }

    #[tokio::test]
    async fn test_commit_text_updates() {
        let mut list_store = ListStore::load(MemoryStore::new()).await.unwrap();
        let item = list_store.add("Walk dog").await.unwrap().unwrap();

        let outcome = list_store.commit_text(item.id, " Walk cat ").await.unwrap();
        match outcome {
            EditOutcome::Updated(updated) => assert_eq!(updated.text, " Walk cat "),
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(
            persisted(list_store.store()).await.unwrap().items[0].text,
            " Walk cat "
        );
    }

    #[tokio::test]
    async fn test_double_toggle_restores() {
        let mut list_store = ListStore::load(MemoryStore::new()).await.unwrap();
        let item = list_store.add("Pay rent").await.unwrap().unwrap();

        let once = list_store.toggle(item.id).await.unwrap().unwrap();
        assert!(once.completed);
        let twice = list_store.toggle(item.id).await.unwrap().unwrap();
        assert!(!twice.completed);
        assert_eq!(twice.text, "Pay rent");
    }

    #[tokio::test]
    async fn test_set_title_keeps_items() {
        let store = MemoryStore::new();
        let mut list_store = ListStore::load(store.clone()).await.unwrap();
        list_store.add("a").await.unwrap();
        list_store.add("b").await.unwrap();

        list_store.set_title("Errands").await.unwrap();
        let saved = persisted(&store).await.unwrap();
        assert_eq!(saved.title, "Errands");
        assert_eq!(saved.items.len(), 2);
    }

    #[tokio::test]
    async fn test_clear_removes_entry() {
        let store = MemoryStore::new();
        let mut list_store = ListStore::load(store.clone()).await.unwrap();
        list_store.set_title("Errands").await.unwrap();
        list_store.add("a").await.unwrap();

        list_store.clear().await.unwrap();
        assert!(store.keys().is_empty());

        let reloaded = ListStore::load(store).await.unwrap();
        assert_eq!(reloaded.title(), "");
        assert!(reloaded.items().is_empty());
    }

    #[tokio::test]
    async fn test_add_and_delete_on_different_ids() {
        let store = MemoryStore::new();
        let mut list_store = ListStore::load(store.clone()).await.unwrap();
        let first = list_store.add("first").await.unwrap().unwrap();

        let second = list_store.add("second").await.unwrap().unwrap();
        list_store.delete(first.id).await.unwrap();

        let saved = persisted(&store).await.unwrap();
        assert_eq!(saved.items, vec![second]);
    }

    #[tokio::test]
    async fn test_reload_reads_storage() {
        let store = MemoryStore::new();
        let mut writer = ListStore::load(store.clone()).await.unwrap();
        let mut reader = ListStore::load(store.clone()).await.unwrap();

        writer.add("from elsewhere").await.unwrap();
        assert!(reader.items().is_empty());
        reader.reload().await.unwrap();
        assert_eq!(reader.items().len(), 1);
    }
}
