//! In-memory return-path store using the moka crate.

use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;

use cinehub_core::result::AppResult;
use cinehub_core::traits::store::ReturnPathStore;

/// Maximum number of remembered paths held at once.
const MAX_CAPACITY: u64 = 100_000;

/// In-memory return-path store with TTL eviction.
#[derive(Debug, Clone)]
pub struct MemoryReturnPathStore {
    /// The underlying moka cache, client key → full path.
    entries: Cache<String, String>,
}

impl MemoryReturnPathStore {
    /// Create a store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        let entries = Cache::builder()
            .max_capacity(MAX_CAPACITY)
            .time_to_live(ttl)
            .build();
        Self { entries }
    }
}

#[async_trait]
impl ReturnPathStore for MemoryReturnPathStore {
    async fn get(&self, client_key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(client_key).await)
    }

    async fn set(&self, client_key: &str, path: &str) -> AppResult<()> {
        self.entries
            .insert(client_key.to_string(), path.to_string())
            .await;
        Ok(())
    }

    async fn clear(&self, client_key: &str) -> AppResult<()> {
        self.entries.invalidate(client_key).await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_get_clear() {
        let store = MemoryReturnPathStore::new(Duration::from_secs(60));

        assert_eq!(store.get("client-1").await.unwrap(), None);

        store.set("client-1", "/movie/7?tab=comments").await.unwrap();
        assert_eq!(
            store.get("client-1").await.unwrap().as_deref(),
            Some("/movie/7?tab=comments")
        );

        store.clear("client-1").await.unwrap();
        assert_eq!(store.get("client-1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_keys_are_isolated() {
        let store = MemoryReturnPathStore::new(Duration::from_secs(60));
        store.set("client-1", "/movie").await.unwrap();
        assert_eq!(store.get("client-2").await.unwrap(), None);
    }
}
