pub mod content_store;

pub use content_store::{ContentStore, ContentStoreError, StoredDocument};

#[cfg(test)]
pub use content_store::MockContentStore;
