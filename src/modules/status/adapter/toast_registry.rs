use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::modules::status::application::ports::status_channel::{
    StatusChannel, StatusHandle, StatusKind, StatusUpdate,
};

#[derive(Debug, Clone, PartialEq)]
pub struct ToastEntry {
    pub handle: StatusHandle,
    pub message: String,
    pub kind: StatusKind,
    pub progress: Option<u8>,
    pub expires_at: Option<Instant>,
}

/// In-process StatusChannel: a handle-keyed map behind a mutex.
///
/// Expired entries (past their auto-dismiss deadline) are pruned lazily on
/// the next snapshot; nothing runs on a timer.
#[derive(Default)]
pub struct ToastRegistry {
    next_handle: AtomicU64,
    entries: Mutex<HashMap<StatusHandle, ToastEntry>>,
}

impl ToastRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Live entries, most recent first.
    pub fn snapshot(&self) -> Vec<ToastEntry> {
        let now = Instant::now();
        let mut entries = self.entries.lock().expect("toast registry poisoned");
        entries.retain(|_, e| e.expires_at.map(|at| at > now).unwrap_or(true));

        let mut live: Vec<ToastEntry> = entries.values().cloned().collect();
        live.sort_by(|a, b| b.handle.cmp(&a.handle));
        live
    }
}

impl StatusChannel for ToastRegistry {
    fn show(
        &self,
        message: &str,
        kind: StatusKind,
        auto_dismiss: Option<Duration>,
    ) -> StatusHandle {
        let handle = self.next_handle.fetch_add(1, Ordering::Relaxed) + 1;
        let entry = ToastEntry {
            handle,
            message: message.to_string(),
            kind,
            progress: None,
            expires_at: auto_dismiss.map(|d| Instant::now() + d),
        };

        self.entries
            .lock()
            .expect("toast registry poisoned")
            .insert(handle, entry);
        handle
    }

    fn update(&self, handle: StatusHandle, update: StatusUpdate) {
        let mut entries = self.entries.lock().expect("toast registry poisoned");
        let Some(entry) = entries.get_mut(&handle) else {
            return;
        };

        if let Some(message) = update.message {
            entry.message = message;
        }
        if let Some(kind) = update.kind {
            entry.kind = kind;
        }
        if let Some(progress) = update.progress {
            entry.progress = Some(progress);
        }
        if let Some(after) = update.auto_dismiss {
            entry.expires_at = Some(Instant::now() + after);
        }
    }

    fn remove(&self, handle: StatusHandle) {
        self.entries
            .lock()
            .expect("toast registry poisoned")
            .remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_update_remove_lifecycle() {
        let registry = ToastRegistry::new();

        let handle = registry.show("Saving hero...", StatusKind::Pending, None);
        registry.update(handle, StatusUpdate::progress(40));

        let live = registry.snapshot();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].message, "Saving hero...");
        assert_eq!(live[0].progress, Some(40));

        registry.update(
            handle,
            StatusUpdate::finished("Saved", StatusKind::Success, Duration::from_secs(5)),
        );
        let live = registry.snapshot();
        assert_eq!(live[0].kind, StatusKind::Success);
        assert_eq!(live[0].progress, Some(100));

        registry.remove(handle);
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_updating_unknown_handle_is_a_no_op() {
        let registry = ToastRegistry::new();
        registry.update(42, StatusUpdate::progress(10));
        assert!(registry.snapshot().is_empty());
    }

    #[test]
    fn test_expired_entries_are_pruned() {
        let registry = ToastRegistry::new();
        registry.show("gone", StatusKind::Error, Some(Duration::ZERO));
        registry.show("stays", StatusKind::Pending, None);

        let live = registry.snapshot();
        assert_eq!(live.len(), 1);
        assert_eq!(live[0].message, "stays");
    }

    #[test]
    fn test_handles_are_unique_and_ordered() {
        let registry = ToastRegistry::new();
        let a = registry.show("a", StatusKind::Pending, None);
        let b = registry.show("b", StatusKind::Pending, None);
        assert!(b > a);

        let live = registry.snapshot();
        assert_eq!(live[0].message, "b");
        assert_eq!(live[1].message, "a");
    }
}
