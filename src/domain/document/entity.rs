// src/domain/document/entity.rs
use crate::domain::document::value_objects::{CollectionName, DocumentId};
use crate::domain::slug::{RecordKey, SlugRecord};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// A schemaless record: JSON fields grouped into a collection.
#[derive(Debug, Clone)]
pub struct Document {
    pub id: Option<DocumentId>,
    pub collection: CollectionName,
    pub fields: Map<String, Value>,
    persisted: Map<String, Value>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl Document {
    /// A document that has not been stored yet.
    pub fn new(collection: CollectionName, fields: Map<String, Value>, now: DateTime<Utc>) -> Self {
        Self {
            id: None,
            collection,
            fields,
            persisted: Map::new(),
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// A document as loaded from storage; its fields become the persisted
    /// snapshot.
    pub fn stored(
        id: DocumentId,
        collection: CollectionName,
        fields: Map<String, Value>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: Some(id),
            collection,
            persisted: fields.clone(),
            fields,
            created_at,
            updated_at,
            deleted_at,
        }
    }

    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.fields, path)
    }

    pub fn original(&self, path: &str) -> Option<&Value> {
        lookup(&self.persisted, path)
    }

    pub fn set(&mut self, path: &str, value: Value) {
        assign(&mut self.fields, path, value);
    }

    /// Shallow merge of `fields` into the current ones.
    pub fn merge(&mut self, fields: Map<String, Value>) {
        for (key, value) in fields {
            self.fields.insert(key, value);
        }
    }

    pub fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

impl SlugRecord for Document {
    fn field_value(&self, path: &str) -> Option<String> {
        self.get(path).and_then(stringify)
    }

    fn original_field_value(&self, field: &str) -> Option<String> {
        self.original(field).and_then(stringify)
    }

    fn set_field_value(&mut self, field: &str, value: String) {
        self.set(field, Value::String(value));
    }

    fn exists(&self) -> bool {
        self.id.is_some()
    }

    fn identity_key(&self) -> Option<RecordKey> {
        self.id.map(|id| RecordKey::Int(id.into()))
    }

    fn table(&self) -> &str {
        self.collection.as_str()
    }

    fn supports_soft_delete(&self) -> bool {
        true
    }

    fn scope_value(&self, field: &str) -> Value {
        self.get(field).cloned().unwrap_or(Value::Null)
    }
}

fn lookup<'a>(fields: &'a Map<String, Value>, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let mut current = fields.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

fn assign(fields: &mut Map<String, Value>, path: &str, value: Value) {
    match path.split_once('.') {
        None => {
            fields.insert(path.to_string(), value);
        }
        Some((head, rest)) => {
            let entry = fields
                .entry(head.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            if let Value::Object(inner) = entry {
                assign(inner, rest, value);
            }
        }
    }
}

fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    }
}
