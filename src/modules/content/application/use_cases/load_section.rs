use std::sync::Arc;

use tracing::warn;

use crate::modules::content::application::ports::outgoing::{ContentStore, StoredDocument};
use crate::modules::content::domain::document::{SectionDocument, SectionKind};

/// Result of loading a section: always a renderable document.
///
/// `revision` is `None` when no valid stored document backed the load; a
/// later commit then requires the row to still be absent.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSection {
    pub document: SectionDocument,
    pub revision: Option<i64>,
}

/// Loads a section document, degrading silently to the built-in default.
///
/// Store failures and malformed bodies are logged and swallowed so the
/// public page always renders; there is no retry.
#[async_trait::async_trait]
pub trait ILoadSectionUseCase: Send + Sync {
    async fn execute(&self, kind: SectionKind) -> LoadedSection;
}

#[derive(Clone)]
pub struct LoadSectionUseCase {
    store: Arc<dyn ContentStore>,
}

impl LoadSectionUseCase {
    pub fn new(store: Arc<dyn ContentStore>) -> Self {
        Self { store }
    }
}

#[async_trait::async_trait]
impl ILoadSectionUseCase for LoadSectionUseCase {
    async fn execute(&self, kind: SectionKind) -> LoadedSection {
        match self.store.get(kind).await {
            Ok(Some(StoredDocument { body, revision })) => {
                match SectionDocument::from_body(kind, body) {
                    Ok(document) => LoadedSection {
                        document,
                        revision: Some(revision),
                    },
                    Err(err) => {
                        warn!(section = %kind, %err, "stored document is malformed, serving default");
                        LoadedSection {
                            document: SectionDocument::default_for(kind),
                            // Keep the revision: a later commit replaces the
                            // broken row instead of conflicting with it.
                            revision: Some(revision),
                        }
                    }
                }
            }
            Ok(None) => LoadedSection {
                document: SectionDocument::default_for(kind),
                revision: None,
            },
            Err(err) => {
                warn!(section = %kind, %err, "content store read failed, serving default");
                LoadedSection {
                    document: SectionDocument::default_for(kind),
                    revision: None,
                }
            }
        }
    }
}
