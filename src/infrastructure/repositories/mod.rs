// src/infrastructure/repositories/mod.rs
pub mod error;
mod sqlite_document;

pub use sqlite_document::SqliteDocumentRepository;
