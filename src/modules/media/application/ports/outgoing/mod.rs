pub mod blob_store;

pub use blob_store::{BlobStore, BlobStoreError, ProgressSink};

#[cfg(test)]
pub use blob_store::MockBlobStore;
