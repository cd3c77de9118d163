use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::auth::application::ports::outgoing::{SessionStore, SessionStoreError};
use crate::modules::auth::application::token::hash_token;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckSessionError {
    #[error("Session store failed: {0}")]
    Session(String),
}

#[async_trait]
pub trait ICheckSessionUseCase: Send + Sync {
    async fn execute(&self, token: &str) -> Result<bool, CheckSessionError>;
}

/// Validates a cookie token against the server-side session registry.
pub struct CheckSessionUseCase {
    sessions: Arc<dyn SessionStore>,
}

impl CheckSessionUseCase {
    pub fn new(sessions: Arc<dyn SessionStore>) -> Self {
        Self { sessions }
    }
}

#[async_trait]
impl ICheckSessionUseCase for CheckSessionUseCase {
    async fn execute(&self, token: &str) -> Result<bool, CheckSessionError> {
        self.sessions
            .contains(&hash_token(token))
            .await
            .map_err(|e: SessionStoreError| CheckSessionError::Session(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::MockSessionStore;

    #[tokio::test]
    async fn test_known_token_is_valid() {
        let mut sessions = MockSessionStore::new();
        sessions
            .expect_contains()
            .withf(|token_hash| token_hash == hash_token("tok"))
            .returning(|_| Ok(true));

        let use_case = CheckSessionUseCase::new(Arc::new(sessions));
        assert!(use_case.execute("tok").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_token_is_invalid() {
        let mut sessions = MockSessionStore::new();
        sessions.expect_contains().returning(|_| Ok(false));

        let use_case = CheckSessionUseCase::new(Arc::new(sessions));
        assert!(!use_case.execute("tok").await.unwrap());
    }
}
