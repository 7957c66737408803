use super::DocumentQueryService;
use crate::{
    application::{
        dto::DocumentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::document::DocumentId,
};

pub struct GetDocumentByIdQuery {
    pub id: i64,
}

impl DocumentQueryService {
    pub async fn get_document_by_id(
        &self,
        query: GetDocumentByIdQuery,
    ) -> ApplicationResult<DocumentDto> {
        let id = DocumentId::new(query.id)?;
        let document = self
            .read_repo
            .find_by_id(id)
            .await?
            .filter(|document| !document.is_deleted())
            .ok_or_else(|| ApplicationError::not_found("document not found"))?;

        Ok(DocumentDto::from_document(document, &self.slug_field))
    }
}
