use crate::domain::document::entity::Document;
use crate::domain::document::value_objects::{CollectionName, DocumentId};
use crate::domain::errors::DomainResult;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

#[async_trait]
pub trait DocumentWriteRepository: Send + Sync {
    async fn insert(&self, document: &Document) -> DomainResult<Document>;
    async fn update(&self, document: &Document) -> DomainResult<Document>;
    async fn soft_delete(&self, id: DocumentId, deleted_at: DateTime<Utc>) -> DomainResult<()>;
}

#[async_trait]
pub trait DocumentReadRepository: Send + Sync {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>>;
    /// Live (not soft-deleted) document whose `slug_field` equals `slug`.
    async fn find_by_slug(
        &self,
        collection: &CollectionName,
        slug_field: &str,
        slug: &str,
    ) -> DomainResult<Option<Document>>;
}
