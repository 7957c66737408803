use crate::domain::document::Document;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Serialize)]
pub struct DocumentDto {
    pub id: i64,
    pub collection: String,
    pub slug: Option<String>,
    pub fields: Map<String, Value>,
    #[serde(with = "serde_time")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time")]
    pub updated_at: DateTime<Utc>,
    #[serde(default, with = "serde_time::option")]
    pub deleted_at: Option<DateTime<Utc>>,
}

impl DocumentDto {
    /// Builds the DTO from a stored document, reading the slug from
    /// `slug_field`.
    pub fn from_document(document: Document, slug_field: &str) -> Self {
        let slug = document
            .get(slug_field)
            .and_then(Value::as_str)
            .map(str::to_string);

        Self {
            id: document.id.map_or(0, i64::from),
            collection: document.collection.to_string(),
            slug,
            fields: document.fields,
            created_at: document.created_at,
            updated_at: document.updated_at,
            deleted_at: document.deleted_at,
        }
    }
}

pub mod serde_time {
    use chrono::{DateTime, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub mod option {
        use super::*;

        pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            match value {
                Some(dt) => serializer.serialize_some(&dt.to_rfc3339()),
                None => serializer.serialize_none(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::document::{CollectionName, DocumentId};
    use serde_json::json;

    #[test]
    fn serializes_slug_and_timestamps() {
        let now = Utc::now();
        let Value::Object(fields) = json!({ "title": "Hello", "slug": "hello" }) else {
            unreachable!()
        };
        let document = Document::stored(
            DocumentId::new(1).unwrap(),
            CollectionName::new("posts").unwrap(),
            fields,
            now,
            now,
            None,
        );

        let dto = DocumentDto::from_document(document, "slug");
        let value = serde_json::to_value(&dto).unwrap();

        assert_eq!(value["slug"], json!("hello"));
        assert_eq!(value["id"], json!(1));
        assert_eq!(value["created_at"], json!(now.to_rfc3339()));
        assert_eq!(value["deleted_at"], Value::Null);
    }
}
