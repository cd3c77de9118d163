pub mod reorder;
pub mod save;
pub mod session;
