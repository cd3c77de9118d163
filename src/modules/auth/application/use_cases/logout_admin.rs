use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::modules::auth::application::ports::outgoing::{SessionStore, SessionStoreError};
use crate::modules::auth::application::token::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutAdminError {
    #[error("Session store failed: {0}")]
    Session(String),
}

#[async_trait]
pub trait ILogoutAdminUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<(), LogoutAdminError>;
}

/// Closes the admin session. Idempotent: logging out an already expired
/// or unknown token succeeds.
pub struct LogoutAdminUseCase {
    sessions: Arc<dyn SessionStore>,
}

impl LogoutAdminUseCase {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ILogoutAdminUseCase for LogoutAdminUseCase {
    async fn execute(&self, token: &str) -> Result<(), LogoutAdminError> {
        self.sessions
            .remove(&hash_token(token))
            .await
            .map_err(|e: SessionStoreError| LogoutAdminError::Session(e.to_string()))?;

        info!("Admin session closed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::MockSessionStore;

    #[tokio::test]
    async fn test_logout_removes_hashed_token() {
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_remove()
            .withf(|token_hash| token_hash == hash_token("tok"))
            .times(1)
            .returning(|_| Ok(()));

        let use_case = LogoutAdminUseCase::new(Arc::new(sessions));
        use_case.execute("tok").await.unwrap();
    }
}
