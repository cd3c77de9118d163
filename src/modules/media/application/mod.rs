pub mod policies;
pub mod ports;
pub mod storage_path;
