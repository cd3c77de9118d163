use rand::RngCore;
use sha2::{Digest, Sha256};

/// Mint a fresh session token: 32 random bytes, hex-encoded.
pub fn mint_session_token() -> String {
    let mut bytes = [0u8; 32];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

/// Hash a token with SHA-256 for storage. Raw tokens are never persisted.
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    format!("{:x}", hasher.finalize())
}
