use crate::traits::KeyValueStore;
use async_trait::async_trait;
use parking_lot::Mutex;
use quicklist_core::QuicklistResult;
use std::collections::HashMap;
use std::sync::Arc;

/// In-process store. Clones share the same map, which lets a test observe
/// what a `ListStore` wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &[u8]) -> Self {
        let store = Self::new();
        store.entries.lock().insert(key.to_string(), value.to_vec());
        store
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.entries.lock().keys().cloned().collect();
        keys.sort();
        keys
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> QuicklistResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8]) -> QuicklistResult<()> {
        self.entries.lock().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn remove(&self, key: &str) -> QuicklistResult<()> {
        self.entries.lock().remove(key);
        Ok(())
    }
}
