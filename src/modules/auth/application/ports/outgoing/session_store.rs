use async_trait::async_trait;
use std::time::Duration;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum SessionStoreError {
    #[error("session store error: {0}")]
    Backend(String),
}

/// Port for the server-side admin session registry.
///
/// Only token hashes ever reach this layer; the raw token lives in the
/// browser cookie alone. Expiry is the store's job, so a crashed server
/// never leaves immortal sessions behind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn put(&self, token_hash: &str, ttl: Duration) -> Result<(), SessionStoreError>;

    async fn contains(&self, token_hash: &str) -> Result<bool, SessionStoreError>;

    async fn remove(&self, token_hash: &str) -> Result<(), SessionStoreError>;
}
