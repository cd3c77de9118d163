use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Opaque handle to one status entry, minted at `show` time so the same
/// entry can be updated in place as an async save advances.
pub type StatusHandle = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    Pending,
    Success,
    Error,
}

/// Partial update applied to an existing status entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusUpdate {
    pub message: Option<String>,
    pub kind: Option<StatusKind>,
    pub progress: Option<u8>,
    pub auto_dismiss: Option<Duration>,
}

impl StatusUpdate {
    pub fn progress(progress: u8) -> Self {
        Self {
            progress: Some(progress),
            ..Self::default()
        }
    }

    pub fn finished(message: &str, kind: StatusKind, auto_dismiss: Duration) -> Self {
        Self {
            message: Some(message.to_string()),
            kind: Some(kind),
            progress: Some(100),
            auto_dismiss: Some(auto_dismiss),
        }
    }
}

/// Port for the user-facing status narration (toasts).
///
/// This is the only feedback channel once the edit modal has closed and a
/// save is running its asynchronous tail. Injected as a service so tests
/// substitute their own and assert on calls; never a module-level global.
pub trait StatusChannel: Send + Sync {
    fn show(&self, message: &str, kind: StatusKind, auto_dismiss: Option<Duration>)
        -> StatusHandle;

    fn update(&self, handle: StatusHandle, update: StatusUpdate);

    fn remove(&self, handle: StatusHandle);
}
