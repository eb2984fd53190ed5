pub mod document;
pub mod entities;
