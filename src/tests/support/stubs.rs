use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use actix_web::cookie::Cookie;
use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::modules::auth::adapter::incoming::web::extractors::SESSION_COOKIE;
use crate::modules::auth::application::use_cases::check_session::{
    CheckSessionError, ICheckSessionUseCase,
};
use crate::modules::auth::application::use_cases::login_admin::{
    ILoginAdminUseCase, LoginAdminError, LoginAdminResponse,
};
use crate::modules::auth::application::use_cases::logout_admin::{
    ILogoutAdminUseCase, LogoutAdminError,
};
use crate::modules::content::application::ports::outgoing::{
    ContentStore, ContentStoreError, StoredDocument,
};
use crate::modules::content::application::use_cases::load_section::{
    ILoadSectionUseCase, LoadedSection,
};
use crate::modules::content::application::use_cases::commit_section::{
    CommitSectionError, ICommitSectionUseCase,
};
use crate::modules::content::domain::document::{SectionDocument, SectionKind};
use crate::modules::editor::application::save::SaveCoordinator;
use crate::modules::media::application::ports::outgoing::blob_store::{
    BlobStore, BlobStoreError, ProgressSink,
};
use crate::modules::status::adapter::ToastRegistry;

/// The raw token the default check-session stub treats as valid.
pub const TEST_SESSION_TOKEN: &str = "test-session-token";

/// Cookie accepted by [`StubCheckSession`], for requests behind the admin gate.
pub fn session_cookie() -> Cookie<'static> {
    Cookie::new(SESSION_COOKIE, TEST_SESSION_TOKEN)
}

#[derive(Default, Clone)]
pub struct StubCheckSession;

#[async_trait]
impl ICheckSessionUseCase for StubCheckSession {
    async fn execute(&self, token: &str) -> Result<bool, CheckSessionError> {
        Ok(token == TEST_SESSION_TOKEN)
    }
}

#[derive(Default, Clone)]
pub struct StubLoginAdminUseCase;

#[async_trait]
impl ILoginAdminUseCase for StubLoginAdminUseCase {
    async fn execute(&self, _password: &str) -> Result<LoginAdminResponse, LoginAdminError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutAdminUseCase;

#[async_trait]
impl ILogoutAdminUseCase for StubLogoutAdminUseCase {
    async fn execute(&self, _token: &str) -> Result<(), LogoutAdminError> {
        Ok(())
    }
}

/// Serves the built-in default document for every section, as if the
/// store were empty.
#[derive(Default, Clone)]
pub struct StubLoadSectionUseCase;

#[async_trait]
impl ILoadSectionUseCase for StubLoadSectionUseCase {
    async fn execute(&self, kind: SectionKind) -> LoadedSection {
        LoadedSection {
            document: SectionDocument::default_for(kind),
            revision: None,
        }
    }
}

#[derive(Default, Clone)]
pub struct StubCommitSectionUseCase;

#[async_trait]
impl ICommitSectionUseCase for StubCommitSectionUseCase {
    async fn execute(
        &self,
        _document: SectionDocument,
        _expected_revision: Option<i64>,
    ) -> Result<i64, CommitSectionError> {
        unimplemented!("Not used in this test")
    }
}

/// In-memory ContentStore with the real revision semantics, so route tests
/// can assert on what actually got committed.
#[derive(Default)]
pub struct MemoryContentStore {
    rows: Mutex<HashMap<SectionKind, (JsonValue, i64)>>,
}

impl MemoryContentStore {
    pub fn seed(&self, kind: SectionKind, body: JsonValue, revision: i64) {
        self.rows
            .lock()
            .unwrap()
            .insert(kind, (body, revision));
    }

    pub fn document(&self, kind: SectionKind) -> Option<JsonValue> {
        self.rows
            .lock()
            .unwrap()
            .get(&kind)
            .map(|(body, _)| body.clone())
    }

    pub fn revision(&self, kind: SectionKind) -> Option<i64> {
        self.rows.lock().unwrap().get(&kind).map(|(_, rev)| *rev)
    }
}

#[async_trait]
impl ContentStore for MemoryContentStore {
    async fn get(&self, kind: SectionKind) -> Result<Option<StoredDocument>, ContentStoreError> {
        Ok(self.rows.lock().unwrap().get(&kind).map(|(body, revision)| {
            StoredDocument {
                body: body.clone(),
                revision: *revision,
            }
        }))
    }

    async fn set(
        &self,
        kind: SectionKind,
        body: JsonValue,
        expected_revision: Option<i64>,
    ) -> Result<i64, ContentStoreError> {
        let mut rows = self.rows.lock().unwrap();
        let current = rows.get(&kind).map(|(_, rev)| *rev);
        if current != expected_revision {
            return Err(ContentStoreError::RevisionConflict);
        }

        let next = current.unwrap_or(0) + 1;
        rows.insert(kind, (body, next));
        Ok(next)
    }
}

/// Accepts every upload and resolves it to a deterministic public URL.
pub struct StubBlobStore;

#[async_trait]
impl BlobStore for StubBlobStore {
    async fn refresh_identity(&self) -> Result<(), BlobStoreError> {
        Ok(())
    }

    async fn upload(
        &self,
        path: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
        on_progress: ProgressSink,
    ) -> Result<String, BlobStoreError> {
        on_progress(0);
        on_progress(100);
        Ok(format!("https://storage.googleapis.com/test-bucket/{path}"))
    }

    async fn delete(&self, _path: &str) -> Result<(), BlobStoreError> {
        Ok(())
    }
}

/// Fails every upload with a transport error.
pub struct FailingBlobStore;

#[async_trait]
impl BlobStore for FailingBlobStore {
    async fn refresh_identity(&self) -> Result<(), BlobStoreError> {
        Ok(())
    }

    async fn upload(
        &self,
        _path: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
        _on_progress: ProgressSink,
    ) -> Result<String, BlobStoreError> {
        Err(BlobStoreError::Transport("injected upload failure".into()))
    }

    async fn delete(&self, _path: &str) -> Result<(), BlobStoreError> {
        Ok(())
    }
}

/// A coordinator over an in-memory store, plus a handle to that store for
/// assertions.
pub fn memory_coordinator() -> (Arc<SaveCoordinator>, Arc<MemoryContentStore>) {
    let store = Arc::new(MemoryContentStore::default());
    let coordinator = SaveCoordinator::new(
        Arc::new(StubBlobStore),
        Arc::clone(&store) as Arc<dyn ContentStore>,
        Arc::new(ToastRegistry::new()),
    );
    (Arc::new(coordinator), store)
}

/// Like [`memory_coordinator`] but every upload fails, so saves never
/// reach the commit.
pub fn failing_blob_coordinator() -> (Arc<SaveCoordinator>, Arc<MemoryContentStore>) {
    let store = Arc::new(MemoryContentStore::default());
    let coordinator = SaveCoordinator::new(
        Arc::new(FailingBlobStore),
        Arc::clone(&store) as Arc<dyn ContentStore>,
        Arc::new(ToastRegistry::new()),
    );
    (Arc::new(coordinator), store)
}
