pub mod password_hasher;
pub mod session_store;

pub use password_hasher::{HashError, PasswordHasher};
pub use session_store::{SessionStore, SessionStoreError};

#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
#[cfg(test)]
pub use session_store::MockSessionStore;
