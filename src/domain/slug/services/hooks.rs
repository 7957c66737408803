use std::sync::Arc;

use super::SlugService;
use crate::domain::errors::DomainResult;
use crate::domain::slug::options::{SlugOptions, SlugOptionsProvider};
use crate::domain::slug::record::SlugRecord;

/// Entry points a persistence layer calls around create and update.
pub struct SlugHooks<R> {
    service: Arc<SlugService>,
    provider: Arc<dyn SlugOptionsProvider<R>>,
}

impl<R> Clone for SlugHooks<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            provider: Arc::clone(&self.provider),
        }
    }
}

impl<R: SlugRecord> SlugHooks<R> {
    pub fn new(service: Arc<SlugService>, provider: Arc<dyn SlugOptionsProvider<R>>) -> Self {
        Self { service, provider }
    }

    pub fn options_for(&self, record: &R) -> SlugOptions<R> {
        self.provider.slug_options(record)
    }

    pub async fn before_create(&self, record: &mut R) -> DomainResult<Option<String>> {
        let options = self.provider.slug_options(record);
        self.service.generate_on_create(record, &options).await
    }

    pub async fn before_update(&self, record: &mut R) -> DomainResult<Option<String>> {
        let options = self.provider.slug_options(record);
        self.service.generate_on_update(record, &options).await
    }

    /// Explicit regeneration, ignoring the lifecycle flags.
    pub async fn regenerate(&self, record: &mut R) -> DomainResult<String> {
        let options = self.provider.slug_options(record);
        self.service.generate(record, &options).await
    }
}
