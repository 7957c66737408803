// tests/support/mocks/slug_repo.rs
use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;
use sluggable::domain::errors::DomainResult;
use sluggable::domain::slug::{RecordKey, SlugQuery, SlugRepository};

/// A slug already held by some stored record.
#[derive(Debug, Clone)]
pub struct StoredSlug {
    pub table: String,
    pub field: String,
    pub slug: String,
    pub key: Option<RecordKey>,
    pub deleted: bool,
    pub scope: HashMap<String, Value>,
}

impl StoredSlug {
    pub fn new(table: &str, slug: &str) -> Self {
        Self {
            table: table.into(),
            field: "slug".into(),
            slug: slug.into(),
            key: None,
            deleted: false,
            scope: HashMap::new(),
        }
    }

    pub fn key(mut self, id: i64) -> Self {
        self.key = Some(RecordKey::Int(id));
        self
    }

    pub fn deleted(mut self) -> Self {
        self.deleted = true;
        self
    }

    pub fn scoped(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.scope.insert(field.into(), value.into());
        self
    }

    fn matches(&self, query: &SlugQuery) -> bool {
        if self.table != query.table || self.field != query.slug_field || self.slug != query.slug {
            return false;
        }

        if let Some(excluded) = &query.exclude_key {
            if self.key.as_ref() == Some(excluded) {
                return false;
            }
        }

        if self.deleted && !query.include_soft_deleted {
            return false;
        }

        query.scope.as_ref().map_or(true, |scope| {
            scope.conditions().iter().all(|condition| {
                self.scope.get(&condition.field).unwrap_or(&Value::Null) == &condition.value
            })
        })
    }
}

/// Slug collaborator backed by a vector; records every query it answers.
#[derive(Default)]
pub struct InMemorySlugRepo {
    rows: Mutex<Vec<StoredSlug>>,
    queries: Mutex<Vec<SlugQuery>>,
}

impl InMemorySlugRepo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(rows: Vec<StoredSlug>) -> Self {
        Self {
            rows: Mutex::new(rows),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn holding(table: &str, slugs: &[&str]) -> Self {
        Self::with(slugs.iter().map(|slug| StoredSlug::new(table, slug)).collect())
    }

    pub fn push(&self, row: StoredSlug) {
        self.rows.lock().unwrap().push(row);
    }

    pub fn queries(&self) -> Vec<SlugQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl SlugRepository for InMemorySlugRepo {
    async fn slug_exists(&self, query: &SlugQuery) -> DomainResult<bool> {
        self.queries.lock().unwrap().push(query.clone());
        Ok(self.rows.lock().unwrap().iter().any(|row| row.matches(query)))
    }
}
