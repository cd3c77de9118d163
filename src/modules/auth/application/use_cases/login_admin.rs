use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use crate::modules::auth::application::ports::outgoing::{
    HashError, PasswordHasher, SessionStore, SessionStoreError,
};
use crate::modules::auth::application::token::{hash_token, mint_session_token};

// ========================= Login Response =========================
#[derive(Debug, Clone)]
pub struct LoginAdminResponse {
    /// Raw session token, handed to the browser as a cookie and never
    /// stored server-side.
    pub token: String,
}

// ========================= Login Error =========================
#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginAdminError {
    #[error("Invalid password")]
    InvalidPassword,

    #[error("Admin access is not configured")]
    NotConfigured,

    #[error("Password verification failed: {0}")]
    Hash(String),

    #[error("Session store failed: {0}")]
    Session(String),
}

impl From<SessionStoreError> for LoginAdminError {
    fn from(error: SessionStoreError) -> Self {
        LoginAdminError::Session(error.to_string())
    }
}

// ========================= Login Use Case =========================
#[async_trait]
pub trait ILoginAdminUseCase: Send + Sync {
    async fn execute(&self, password: &str) -> Result<LoginAdminResponse, LoginAdminError>;
}

/// Checks the single admin password and opens a server-side session.
///
/// There is exactly one editor identity; the configured Argon2 hash is the
/// whole user database. A successful login mints a random token, stores
/// its hash with a TTL and returns the raw token for the cookie.
pub struct LoginAdminUseCase {
    password_hash: Option<String>,
    session_ttl: Duration,
    hasher: Arc<dyn PasswordHasher>,
    sessions: Arc<dyn SessionStore>,
}

impl LoginAdminUseCase {
    pub fn new(
        password_hash: Option<String>,
        session_ttl: Duration,
        hasher: Arc<dyn PasswordHasher>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            password_hash: password_hash.filter(|h| !h.trim().is_empty()),
            session_ttl,
            hasher,
            sessions,
        }
    }
}

#[async_trait]
impl ILoginAdminUseCase for LoginAdminUseCase {
    async fn execute(&self, password: &str) -> Result<LoginAdminResponse, LoginAdminError> {
        let Some(hash) = self.password_hash.as_deref() else {
            warn!("Admin login attempted but no password hash is configured");
            return Err(LoginAdminError::NotConfigured);
        };

        let matches = self
            .hasher
            .verify_password(password, hash)
            .await
            .map_err(|e: HashError| LoginAdminError::Hash(e.to_string()))?;

        if !matches {
            return Err(LoginAdminError::InvalidPassword);
        }

        let token = mint_session_token();
        self.sessions
            .put(&hash_token(&token), self.session_ttl)
            .await?;

        info!("Admin session opened");
        Ok(LoginAdminResponse { token })
    }
}
