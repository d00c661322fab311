use async_trait::async_trait;
use quicklist_core::QuicklistResult;

/// String-keyed storage for whole serialized values.
///
/// A completed `set` or `remove` is durable: implementations finish the
/// write before returning.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`, if any
    async fn get(&self, key: &str) -> QuicklistResult<Option<Vec<u8>>>;

    /// Replace the value stored under `key`
    async fn set(&self, key: &str, value: &[u8]) -> QuicklistResult<()>;

    /// Delete `key`; removing a missing key is not an error
    async fn remove(&self, key: &str) -> QuicklistResult<()>;

    /// Check whether `key` currently holds a value
    async fn contains(&self, key: &str) -> QuicklistResult<bool> {
        Ok(self.get(key).await?.is_some())
    }
}
