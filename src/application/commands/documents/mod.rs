// src/application/commands/documents/mod.rs
mod create;
mod delete;
mod regenerate;
mod service;
mod update;

pub use create::{CreateDocumentCommand, CreateDocumentCommandBuilder};
pub use delete::DeleteDocumentCommand;
pub use regenerate::RegenerateSlugCommand;
pub use service::DocumentCommandService;
pub use update::UpdateDocumentCommand;
