// src/application/commands/documents/service.rs
use std::sync::Arc;

use crate::{
    application::{dto::DocumentDto, ports::time::Clock},
    domain::{
        document::{Document, DocumentReadRepository, DocumentWriteRepository},
        slug::SlugHooks,
    },
};

pub struct DocumentCommandService {
    pub(super) write_repo: Arc<dyn DocumentWriteRepository>,
    pub(super) read_repo: Arc<dyn DocumentReadRepository>,
    pub(super) slug_hooks: SlugHooks<Document>,
    pub(super) clock: Arc<dyn Clock>,
}

impl DocumentCommandService {
    pub fn new(
        write_repo: Arc<dyn DocumentWriteRepository>,
        read_repo: Arc<dyn DocumentReadRepository>,
        slug_hooks: SlugHooks<Document>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            write_repo,
            read_repo,
            slug_hooks,
            clock,
        }
    }

    pub(super) fn to_dto(&self, document: Document) -> DocumentDto {
        let slug_field = self.slug_hooks.options_for(&document).slug_field;
        DocumentDto::from_document(document, &slug_field)
    }
}
