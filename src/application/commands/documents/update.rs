// src/application/commands/documents/update.rs
use super::DocumentCommandService;
use crate::{
    application::{
        dto::DocumentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::document::{Document, DocumentId},
};
use serde_json::{Map, Value};

pub struct UpdateDocumentCommand {
    pub id: i64,
    /// Merged over the stored fields.
    pub fields: Map<String, Value>,
    pub slug: Option<String>,
}

impl DocumentCommandService {
    pub async fn update_document(
        &self,
        command: UpdateDocumentCommand,
    ) -> ApplicationResult<DocumentDto> {
        let UpdateDocumentCommand { id, fields, slug } = command;
        let mut document = self.load_live(id).await?;

        document.merge(fields);
        if let Some(slug) = slug {
            let field = self.slug_hooks.options_for(&document).slug_field;
            document.set(&field, Value::String(slug));
        }
        document.touch(self.clock.now());

        if let Some(slug) = self.slug_hooks.before_update(&mut document).await? {
            tracing::info!(collection = %document.collection, id, slug = %slug, "assigned slug");
        }

        let updated = self.write_repo.update(&document).await?;
        Ok(self.to_dto(updated))
    }

    pub(super) async fn load_live(&self, id: i64) -> ApplicationResult<Document> {
        let id = DocumentId::new(id)?;
        let document = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("document not found"))?;

        if document.is_deleted() {
            return Err(ApplicationError::not_found("document has been deleted"));
        }

        Ok(document)
    }
}
