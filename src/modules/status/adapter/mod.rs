pub mod incoming;
pub mod toast_registry;

pub use toast_registry::{ToastEntry, ToastRegistry};
