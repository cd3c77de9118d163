use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::modules::content::domain::document::SectionKind;

/// A stored section body plus the revision it was read at.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub body: JsonValue,
    pub revision: i64,
}

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ContentStoreError {
    /// The expected revision no longer matches: someone else committed
    /// since this document was loaded.
    #[error("document revision conflict")]
    RevisionConflict,

    #[error("content store error: {0}")]
    Backend(String),
}

/// Port for the one-document-per-section persistence collaborator.
///
/// Documents are plain JSON bodies; this layer enforces no schema. The
/// unit of contention is the whole document: reads and writes are always
/// wholesale, never field-level patches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContentStore: Send + Sync {
    async fn get(&self, kind: SectionKind) -> Result<Option<StoredDocument>, ContentStoreError>;

    /// Commit a whole document.
    ///
    /// `expected_revision` is the revision the caller loaded; `None` means
    /// the caller saw no stored document at all. A mismatch (including a
    /// row appearing where none was expected) fails with
    /// [`ContentStoreError::RevisionConflict`] and writes nothing.
    async fn set(
        &self,
        kind: SectionKind,
        body: JsonValue,
        expected_revision: Option<i64>,
    ) -> Result<i64, ContentStoreError>;
}
