use crate::modules::content::domain::document::{ContentDocument, DeleteTarget, FileSlot};
use crate::modules::editor::application::reorder::ReorderController;
use crate::modules::media::application::policies::upload_policy::{
    FileClass, LocalFile, UploadPolicy, UploadRejection,
};

/// A file selected for a slot, held locally until save time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedFile {
    pub slot: FileSlot,
    pub file: LocalFile,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StageFileError {
    #[error("no edit is open")]
    NotEditing,

    #[error(transparent)]
    Rejected(#[from] UploadRejection),
}

/// One section's editing state: the confirmed document shown to visitors,
/// and, while the edit surface is open, a working copy that accumulates
/// every change until the user saves or cancels.
///
/// Nothing in here touches storage. File selections are staged as raw
/// bytes and the working copy keeps its stale URLs until the save
/// pipeline uploads the staged files and substitutes the real ones.
#[derive(Clone)]
pub struct EditSession<D: ContentDocument> {
    confirmed: D,
    revision: Option<i64>,
    working: Option<D>,
    pending_files: Vec<StagedFile>,
    pending_delete: Option<DeleteTarget>,
    rearranging: bool,
    pub reorder: ReorderController,
}

impl<D: ContentDocument> EditSession<D> {
    pub fn new(confirmed: D, revision: Option<i64>) -> Self {
        Self {
            confirmed,
            revision,
            working: None,
            pending_files: Vec::new(),
            pending_delete: None,
            rearranging: false,
            reorder: ReorderController::new(),
        }
    }

    pub fn confirmed(&self) -> &D {
        &self.confirmed
    }

    pub fn revision(&self) -> Option<i64> {
        self.revision
    }

    pub fn is_editing(&self) -> bool {
        self.working.is_some()
    }

    pub fn working(&self) -> Option<&D> {
        self.working.as_ref()
    }

    /// Mutable access to the working copy while an edit is open. All form
    /// bindings go through here; the confirmed document stays untouched.
    pub fn working_mut(&mut self) -> Option<&mut D> {
        self.working.as_mut()
    }

    pub fn pending_files(&self) -> &[StagedFile] {
        &self.pending_files
    }

    pub fn pending_delete(&self) -> Option<&DeleteTarget> {
        self.pending_delete.as_ref()
    }

    pub fn is_rearranging(&self) -> bool {
        self.rearranging
    }

    /// Open the edit surface with a fresh working copy of the confirmed
    /// document. Reopening resets any leftover transient state.
    pub fn open_edit(&mut self) {
        self.working = Some(self.confirmed.clone());
        self.pending_files.clear();
        self.pending_delete = None;
        self.rearranging = false;
        self.reorder = ReorderController::new();
    }

    /// Discard the working copy and every staged change. The confirmed
    /// document is exactly what it was before the edit opened.
    pub fn cancel_edit(&mut self) {
        self.working = None;
        self.pending_files.clear();
        self.pending_delete = None;
        self.rearranging = false;
        self.reorder = ReorderController::new();
    }

    /// Validate a newly selected file and stage it for its slot. Selecting
    /// again for the same slot replaces the earlier choice; only the last
    /// selection per slot is ever uploaded.
    pub fn stage_file(
        &mut self,
        slot: FileSlot,
        file: LocalFile,
        policy: &UploadPolicy,
    ) -> Result<FileClass, StageFileError> {
        if self.working.is_none() {
            return Err(StageFileError::NotEditing);
        }
        let class = policy.validate(&file)?;

        self.pending_files.retain(|staged| staged.slot != slot);
        self.pending_files.push(StagedFile { slot, file });
        Ok(class)
    }

    /// First phase of a delete: remember what the confirmation prompt is
    /// about. Nothing is removed yet.
    pub fn request_delete(&mut self, target: DeleteTarget) {
        if self.working.is_some() {
            self.pending_delete = Some(target);
        }
    }

    /// Second phase: the user confirmed, remove the item from the working
    /// copy. Returns false when there was nothing pending or the item is
    /// already gone.
    pub fn confirm_delete(&mut self) -> bool {
        let Some(target) = self.pending_delete.take() else {
            return false;
        };
        match self.working.as_mut() {
            Some(working) => working.remove_item(&target),
            None => false,
        }
    }

    pub fn dismiss_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Toggle rearrange mode. Leaving it aborts any in-flight drag.
    pub fn set_rearranging(&mut self, on: bool) {
        self.rearranging = on;
        if !on {
            self.reorder.drag_end();
        }
    }

    /// Adopt a successfully committed document as the new confirmed state
    /// and close the edit surface.
    pub(crate) fn promote(&mut self, confirmed: D, revision: i64) {
        self.confirmed = confirmed;
        self.revision = Some(revision);
        self.cancel_edit();
    }

    /// Drain staged files for the save pipeline. Called once per save
    /// attempt; a failed save leaves the working copy open but the files
    /// already consumed by the attempt are restaged by the caller.
    pub(crate) fn take_pending_files(&mut self) -> Vec<StagedFile> {
        std::mem::take(&mut self.pending_files)
    }

    pub(crate) fn restore_pending_files(&mut self, files: Vec<StagedFile>) {
        self.pending_files = files;
    }
}
