pub mod argon2_hasher;
pub mod session_store_redis;

pub use argon2_hasher::Argon2Hasher;
pub use session_store_redis::SessionStoreRedis;
