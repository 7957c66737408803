// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::documents::DocumentCommandService,
        ports::time::Clock,
        queries::documents::DocumentQueryService,
    },
    domain::{
        document::{Document, DocumentReadRepository, DocumentWriteRepository},
        slug::{SlugGenerators, SlugHooks, SlugOptionsProvider, SlugRepository, SlugService},
    },
};

pub struct ApplicationServices {
    pub document_commands: Arc<DocumentCommandService>,
    pub document_queries: Arc<DocumentQueryService>,
}

impl ApplicationServices {
    pub fn new(
        document_write_repo: Arc<dyn DocumentWriteRepository>,
        document_read_repo: Arc<dyn DocumentReadRepository>,
        slug_repo: Arc<dyn SlugRepository>,
        generators: SlugGenerators,
        slug_options: Arc<dyn SlugOptionsProvider<Document>>,
        slug_field: impl Into<String>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let slug_service = Arc::new(SlugService::new(slug_repo, generators));
        let slug_hooks = SlugHooks::new(slug_service, slug_options);

        let document_commands = Arc::new(DocumentCommandService::new(
            Arc::clone(&document_write_repo),
            Arc::clone(&document_read_repo),
            slug_hooks,
            Arc::clone(&clock),
        ));

        let document_queries = Arc::new(DocumentQueryService::new(
            Arc::clone(&document_read_repo),
            slug_field,
        ));

        Self {
            document_commands,
            document_queries,
        }
    }
}
