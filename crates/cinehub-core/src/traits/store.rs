//! Return-path store trait for pluggable persistence backends.

use async_trait::async_trait;

use crate::result::AppResult;

/// Trait for remembering the path a client attempted before being
/// redirected to login, so it can be restored after authentication.
///
/// Keys are opaque client identifiers; values are full paths including the
/// query string. The store is responsible for TTL enforcement.
#[async_trait]
pub trait ReturnPathStore: Send + Sync + std::fmt::Debug + 'static {
    /// Get the remembered path for a client. Returns `None` if nothing is
    /// remembered or the entry has expired.
    async fn get(&self, client_key: &str) -> AppResult<Option<String>>;

    /// Remember a path for a client, replacing any previous entry.
    async fn set(&self, client_key: &str, path: &str) -> AppResult<()>;

    /// Forget the remembered path for a client.
    async fn clear(&self, client_key: &str) -> AppResult<()>;
}
