use async_trait::async_trait;
use deadpool_redis::{redis::AsyncCommands, Pool};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::auth::application::ports::outgoing::session_store::{
    SessionStore, SessionStoreError,
};

/// Redis-backed admin session registry.
///
/// One key per live session:
/// ```text
/// admin:session:{token_hash} -> "1"
/// ```
/// with a TTL equal to the session lifetime. Redis expiry is the single
/// source of truth for cleanup; nothing scans or sweeps.
#[derive(Clone)]
pub struct SessionStoreRedis {
    pool: Arc<Pool>,
}

impl SessionStoreRedis {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn session_key(token_hash: &str) -> String {
        format!("admin:session:{token_hash}")
    }

    async fn get_conn(&self) -> Result<deadpool_redis::Connection, SessionStoreError> {
        self.pool
            .get()
            .await
            .map_err(|e| SessionStoreError::Backend(format!("Pool error: {e}")))
    }
}

#[async_trait]
impl SessionStore for SessionStoreRedis {
    async fn put(&self, token_hash: &str, ttl: Duration) -> Result<(), SessionStoreError> {
        let key = Self::session_key(token_hash);
        let mut conn = self.get_conn().await?;

        conn.set_ex::<_, _, ()>(&key, "1", ttl.as_secs())
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        Ok(())
    }

    async fn contains(&self, token_hash: &str) -> Result<bool, SessionStoreError> {
        let key = Self::session_key(token_hash);
        let mut conn = self.get_conn().await?;

        conn.exists(&key)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))
    }

    /// Removing an unknown session silently succeeds, so logout is safe
    /// to retry.
    async fn remove(&self, token_hash: &str) -> Result<(), SessionStoreError> {
        let key = Self::session_key(token_hash);
        let mut conn = self.get_conn().await?;

        conn.del::<_, ()>(&key)
            .await
            .map_err(|e| SessionStoreError::Backend(e.to_string()))?;

        Ok(())
    }
}
