mod admin;

pub use admin::{AdminSession, SESSION_COOKIE};
