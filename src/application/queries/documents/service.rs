use std::sync::Arc;

use crate::domain::document::DocumentReadRepository;

pub struct DocumentQueryService {
    pub(super) read_repo: Arc<dyn DocumentReadRepository>,
    pub(super) slug_field: String,
}

impl DocumentQueryService {
    pub fn new(read_repo: Arc<dyn DocumentReadRepository>, slug_field: impl Into<String>) -> Self {
        Self {
            read_repo,
            slug_field: slug_field.into(),
        }
    }
}
