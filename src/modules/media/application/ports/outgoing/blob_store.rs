use async_trait::async_trait;
use std::sync::Arc;

/// Receives 0-100 percent progress events for one upload.
pub type ProgressSink = Arc<dyn Fn(u8) + Send + Sync>;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum BlobStoreError {
    /// The storage client could not be built at all (missing credentials
    /// file, unset project, ...).
    #[error("blob storage is not configured")]
    NotConfigured,

    /// A client exists but carries no valid authenticated identity.
    #[error("no authenticated identity attached to the storage session")]
    NotAuthenticated,

    #[error("storage transport error: {0}")]
    Transport(String),
}

/// Port for the binary-object persistence collaborator.
///
/// Uploads require an attached authenticated identity; callers refresh it
/// immediately before each upload attempt. An upload resolves to a
/// publicly readable URL once the object is fully written.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn refresh_identity(&self) -> Result<(), BlobStoreError>;

    async fn upload(
        &self,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        on_progress: ProgressSink,
    ) -> Result<String, BlobStoreError>;

    /// Best-effort removal of a previously uploaded object.
    async fn delete(&self, path: &str) -> Result<(), BlobStoreError>;
}
