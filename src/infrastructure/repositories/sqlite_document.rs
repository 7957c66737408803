use crate::domain::document::{
    CollectionName, Document, DocumentId, DocumentReadRepository, DocumentWriteRepository,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::slug::{RecordKey, SlugQuery, SlugRepository};
use crate::infrastructure::repositories::error::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use sqlx::{FromRow, QueryBuilder, Sqlite, SqlitePool};
use std::sync::Arc;

const DOCUMENT_COLUMNS: &str = "id, collection, data, created_at, updated_at, deleted_at";

/// Documents stored as JSON text in SQLite. Also answers slug existence
/// checks, so it serves as the slug collaborator for its own records.
#[derive(Clone)]
pub struct SqliteDocumentRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteDocumentRepository {
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct DocumentRow {
    id: i64,
    collection: String,
    data: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    deleted_at: Option<DateTime<Utc>>,
}

impl TryFrom<DocumentRow> for Document {
    type Error = DomainError;

    fn try_from(row: DocumentRow) -> Result<Self, Self::Error> {
        let fields = match serde_json::from_str::<Value>(&row.data) {
            Ok(Value::Object(fields)) => fields,
            Ok(_) => {
                return Err(DomainError::Persistence(format!(
                    "document {} data is not a JSON object",
                    row.id
                )));
            }
            Err(err) => return Err(DomainError::Persistence(err.to_string())),
        };

        Ok(Document::stored(
            DocumentId::new(row.id)?,
            CollectionName::new(row.collection)?,
            fields,
            row.created_at,
            row.updated_at,
            row.deleted_at,
        ))
    }
}

fn encode_fields(fields: &Map<String, Value>) -> DomainResult<String> {
    serde_json::to_string(fields).map_err(|err| DomainError::Persistence(err.to_string()))
}

/// SQLite JSON path for a dotted field name, e.g. `author.name` becomes
/// `$."author"."name"`.
fn json_path(field: &str) -> String {
    let segments: Vec<String> = field
        .split('.')
        .map(|segment| format!("\"{}\"", segment.replace('"', "\\\"")))
        .collect();
    format!("$.{}", segments.join("."))
}

fn document_key(key: &RecordKey) -> DomainResult<i64> {
    match key {
        RecordKey::Int(id) => Ok(*id),
        RecordKey::Text(raw) => raw
            .parse::<i64>()
            .map_err(|_| DomainError::Validation(format!("invalid document key: {raw}"))),
    }
}

/// Appends a comparison of the preceding `json_extract(..)` with `value`.
fn push_json_comparison(builder: &mut QueryBuilder<'_, Sqlite>, value: &Value) {
    match value {
        Value::Null => {
            builder.push(" IS NULL");
        }
        Value::Bool(flag) => {
            builder.push(" = ");
            builder.push_bind(i64::from(*flag));
        }
        Value::Number(number) => {
            builder.push(" = ");
            if let Some(int) = number.as_i64() {
                builder.push_bind(int);
            } else {
                builder.push_bind(number.as_f64().unwrap_or_default());
            }
        }
        Value::String(text) => {
            builder.push(" = ");
            builder.push_bind(text.clone());
        }
        other => {
            builder.push(" = ");
            builder.push_bind(other.to_string());
        }
    }
}

#[async_trait]
impl DocumentWriteRepository for SqliteDocumentRepository {
    async fn insert(&self, document: &Document) -> DomainResult<Document> {
        let data = encode_fields(&document.fields)?;

        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "INSERT INTO documents (collection, data, created_at, updated_at, deleted_at) VALUES (?, ?, ?, ?, ?) RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(document.collection.as_str())
        .bind(data)
        .bind(document.created_at)
        .bind(document.updated_at)
        .bind(document.deleted_at)
        .fetch_one(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        Document::try_from(row)
    }

    async fn update(&self, document: &Document) -> DomainResult<Document> {
        let id = document
            .id
            .ok_or_else(|| DomainError::Validation("document has not been stored yet".into()))?;
        let data = encode_fields(&document.fields)?;

        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "UPDATE documents SET data = ?, updated_at = ? WHERE id = ? RETURNING {DOCUMENT_COLUMNS}"
        ))
        .bind(data)
        .bind(document.updated_at)
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?
        .ok_or_else(|| DomainError::NotFound(format!("document {id} not found")))?;

        Document::try_from(row)
    }

    async fn soft_delete(&self, id: DocumentId, deleted_at: DateTime<Utc>) -> DomainResult<()> {
        let result = sqlx::query(
            "UPDATE documents SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(deleted_at)
        .bind(i64::from(id))
        .execute(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound(format!("document {id} not found")));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentReadRepository for SqliteDocumentRepository {
    async fn find_by_id(&self, id: DocumentId) -> DomainResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE id = ?"
        ))
        .bind(i64::from(id))
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Document::try_from).transpose()
    }

    async fn find_by_slug(
        &self,
        collection: &CollectionName,
        slug_field: &str,
        slug: &str,
    ) -> DomainResult<Option<Document>> {
        let row = sqlx::query_as::<_, DocumentRow>(&format!(
            "SELECT {DOCUMENT_COLUMNS} FROM documents WHERE collection = ? AND json_extract(data, ?) = ? AND deleted_at IS NULL ORDER BY id LIMIT 1"
        ))
        .bind(collection.as_str())
        .bind(json_path(slug_field))
        .bind(slug)
        .fetch_optional(&*self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Document::try_from).transpose()
    }
}

#[async_trait]
impl SlugRepository for SqliteDocumentRepository {
    async fn slug_exists(&self, query: &SlugQuery) -> DomainResult<bool> {
        let mut builder: QueryBuilder<Sqlite> =
            QueryBuilder::new("SELECT EXISTS(SELECT 1 FROM documents WHERE collection = ");
        builder.push_bind(query.table.clone());
        builder.push(" AND json_extract(data, ");
        builder.push_bind(json_path(&query.slug_field));
        builder.push(") = ");
        builder.push_bind(query.slug.clone());

        if let Some(key) = &query.exclude_key {
            builder.push(" AND id != ");
            builder.push_bind(document_key(key)?);
        }

        if !query.include_soft_deleted {
            builder.push(" AND deleted_at IS NULL");
        }

        if let Some(scope) = &query.scope {
            for condition in scope.conditions() {
                builder.push(" AND json_extract(data, ");
                builder.push_bind(json_path(&condition.field));
                builder.push(")");
                push_json_comparison(&mut builder, &condition.value);
            }
        }

        builder.push(")");

        let exists: i64 = builder
            .build_query_scalar()
            .fetch_one(&*self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(exists != 0)
    }
}
