use crate::domain::errors::DomainResult;
use crate::domain::slug::value_objects::SlugQuery;
use async_trait::async_trait;

#[async_trait]
pub trait SlugRepository: Send + Sync {
    /// Whether a record other than the one excluded by the query already holds
    /// `query.slug`.
    async fn slug_exists(&self, query: &SlugQuery) -> DomainResult<bool>;
}
