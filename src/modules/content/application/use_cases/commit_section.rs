use std::sync::Arc;

use crate::modules::content::application::ports::outgoing::{ContentStore, ContentStoreError};
use crate::modules::content::domain::document::{ContentDocument, SectionDocument};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CommitSectionError {
    #[error("document changed since it was loaded")]
    Conflict,

    #[error("could not serialize document: {0}")]
    Serialization(String),

    #[error("content store error: {0}")]
    Store(String),
}

/// Commits a whole section document against the revision it was loaded at.
#[async_trait::async_trait]
pub trait ICommitSectionUseCase: Send + Sync {
    async fn execute(
        &self,
        document: SectionDocument,
        expected_revision: Option<i64>,
    ) -> Result<i64, CommitSectionError>;
}

#[derive(Clone)]
pub struct CommitSectionUseCase {
    store: Arc<dyn ContentStore>,
}

impl CommitSectionUseCase {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ICommitSectionUseCase for CommitSectionUseCase {
    async fn execute(
        &self,
        document: SectionDocument,
        expected_revision: Option<i64>,
    ) -> Result<i64, CommitSectionError> {
        let body = document
            .to_body()
            .map_err(|e| CommitSectionError::Serialization(e.to_string()))?;

        self.store
            .set(document.kind(), body, expected_revision)
            .await
            .map_err(|err| match err {
                ContentStoreError::RevisionConflict => CommitSectionError::Conflict,
                ContentStoreError::Backend(msg) => CommitSectionError::Store(msg),
            })
    }
}
