pub mod document;
pub mod entities;
pub mod recent;
