use std::sync::Arc;
use std::time::Duration;

use tracing::warn;

use crate::modules::content::application::ports::outgoing::content_store::{
    ContentStore, ContentStoreError,
};
use crate::modules::content::domain::document::{ContentDocument, SectionKind};
use crate::modules::editor::application::session::{EditSession, StagedFile};
use crate::modules::media::application::ports::outgoing::blob_store::{
    BlobStore, BlobStoreError, ProgressSink,
};
use crate::modules::media::application::storage_path::{
    object_path_from_public_url, storage_object_path,
};
use crate::modules::status::application::ports::status_channel::{
    StatusChannel, StatusKind, StatusUpdate,
};

const SUCCESS_DISMISS: Duration = Duration::from_secs(4);
const ERROR_DISMISS: Duration = Duration::from_secs(8);

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("no edit is open")]
    NoOpenEdit,

    #[error(transparent)]
    Upload(#[from] BlobStoreError),

    #[error("document was changed by someone else")]
    Conflict,

    #[error("content store error: {0}")]
    Store(String),

    #[error("document serialization failed: {0}")]
    Serialization(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaveOutcome {
    pub revision: i64,
    pub status: crate::modules::status::application::ports::status_channel::StatusHandle,
}

/// One file's contribution to the overall save progress.
///
/// `completed` files each account for an equal share of 100; the current
/// file's local percentage fills its own share. With no files at all the
/// save is effectively done once the commit lands.
fn aggregate_progress(completed: usize, total: usize, local: u8) -> u8 {
    if total == 0 {
        return 100;
    }
    let base = completed as f64 / total as f64 * 100.0;
    let share = f64::from(local) / total as f64;
    (base + share).round().min(100.0) as u8
}

/// Runs the whole save pipeline for one section: upload every staged file
/// in order, substitute the resolved URLs into the working copy, commit
/// the document wholesale, then promote the working copy to confirmed.
///
/// Failure at any step leaves the confirmed document and the open edit
/// untouched, so the user can retry or cancel. Blobs uploaded before the
/// failing step are not rolled back. Replaced objects are deleted only
/// after a successful commit, off the request path.
pub struct SaveCoordinator {
    blob_store: Arc<dyn BlobStore>,
    content_store: Arc<dyn ContentStore>,
    statuses: Arc<dyn StatusChannel>,
}

impl SaveCoordinator {
    pub fn new(
        blob_store: Arc<dyn BlobStore>,
        content_store: Arc<dyn ContentStore>,
        statuses: Arc<dyn StatusChannel>,
    ) -> Self {
        Self {
            blob_store,
            content_store,
            statuses,
        }
    }

    pub async fn save<D: ContentDocument>(
        &self,
        session: &mut EditSession<D>,
    ) -> Result<SaveOutcome, SaveError> {
        if !session.is_editing() {
            return Err(SaveError::NoOpenEdit);
        }
        let kind = session.confirmed().kind();

        let handle = self
            .statuses
            .show(&format!("Saving {kind}..."), StatusKind::Pending, None);
        self.statuses.update(handle, StatusUpdate::progress(0));

        let files = session.take_pending_files();
        let total = files.len();
        let mut replaced: Vec<String> = Vec::new();

        for (i, staged) in files.iter().enumerate() {
            let result = self
                .upload_one(session, kind, staged, i, total, handle, &mut replaced)
                .await;

            if let Err(err) = result {
                // Unconsumed selections stay staged so a retry re-sends them.
                session.restore_pending_files(files[i..].to_vec());
                self.fail(handle, kind, &err.to_string());
                return Err(err.into());
            }
        }

        let working = match session.working() {
            Some(working) => working.clone(),
            None => return Err(SaveError::NoOpenEdit),
        };
        let body = match working.to_body() {
            Ok(body) => body,
            Err(err) => {
                self.fail(handle, kind, "could not serialize the document");
                return Err(SaveError::Serialization(err.to_string()));
            }
        };

        match self.content_store.set(kind, body, session.revision()).await {
            Ok(revision) => {
                session.promote(working, revision);
                self.statuses.update(
                    handle,
                    StatusUpdate::finished(
                        &format!("Saved {kind}"),
                        StatusKind::Success,
                        SUCCESS_DISMISS,
                    ),
                );
                self.spawn_cleanup(replaced);
                Ok(SaveOutcome {
                    revision,
                    status: handle,
                })
            }
            Err(ContentStoreError::RevisionConflict) => {
                self.fail(handle, kind, "it was changed by someone else");
                Err(SaveError::Conflict)
            }
            Err(ContentStoreError::Backend(msg)) => {
                self.fail(handle, kind, "the content store is unavailable");
                Err(SaveError::Store(msg))
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    async fn upload_one<D: ContentDocument>(
        &self,
        session: &mut EditSession<D>,
        kind: SectionKind,
        staged: &StagedFile,
        index: usize,
        total: usize,
        handle: crate::modules::status::application::ports::status_channel::StatusHandle,
        replaced: &mut Vec<String>,
    ) -> Result<(), BlobStoreError> {
        self.blob_store.refresh_identity().await?;

        let path = storage_object_path(kind, staged.slot.item_id.as_deref(), &staged.file.name);

        let statuses = Arc::clone(&self.statuses);
        let sink: ProgressSink = Arc::new(move |local| {
            statuses.update(
                handle,
                StatusUpdate::progress(aggregate_progress(index, total, local)),
            );
        });

        let url = self
            .blob_store
            .upload(&path, staged.file.bytes.clone(), &staged.file.content_type, sink)
            .await?;

        if let Some(working) = session.working_mut() {
            if let Some(old) = working.url_at(&staged.slot) {
                if !old.is_empty() && old != url {
                    replaced.push(old);
                }
            }
            if !working.apply_uploaded_url(&staged.slot, &url) {
                // The item was deleted in the same edit after the file was
                // picked; the upload becomes a harmless orphan.
                warn!(section = %kind, field = %staged.slot.field, "uploaded file has no slot to land in");
            }
        }
        Ok(())
    }

    fn fail(
        &self,
        handle: crate::modules::status::application::ports::status_channel::StatusHandle,
        kind: SectionKind,
        reason: &str,
    ) {
        self.statuses.remove(handle);
        self.statuses.show(
            &format!("Could not save {kind}: {reason}"),
            StatusKind::Error,
            Some(ERROR_DISMISS),
        );
    }

    /// Delete the objects that this save made unreachable. Best effort and
    /// detached from the request: a failure here only logs.
    fn spawn_cleanup(&self, replaced: Vec<String>) {
        let paths: Vec<String> = replaced
            .iter()
            .filter_map(|url| object_path_from_public_url(url))
            .collect();
        if paths.is_empty() {
            return;
        }

        let blob_store = Arc::clone(&self.blob_store);
        tokio::spawn(async move {
            for path in paths {
                if let Err(err) = blob_store.delete(&path).await {
                    warn!(%path, error = %err, "replaced object was not deleted");
                }
            }
        });
    }
}
