use super::DocumentQueryService;
use crate::{
    application::{
        dto::DocumentDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::document::CollectionName,
};

pub struct GetDocumentBySlugQuery {
    pub collection: String,
    pub slug: String,
}

impl DocumentQueryService {
    pub async fn get_document_by_slug(
        &self,
        query: GetDocumentBySlugQuery,
    ) -> ApplicationResult<DocumentDto> {
        let collection = CollectionName::new(query.collection)?;
        if query.slug.trim().is_empty() {
            return Err(ApplicationError::validation("slug cannot be empty"));
        }

        let document = self
            .read_repo
            .find_by_slug(&collection, &self.slug_field, &query.slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("document not found"))?;

        Ok(DocumentDto::from_document(document, &self.slug_field))
    }
}
