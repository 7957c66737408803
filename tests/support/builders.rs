// tests/support/builders.rs
use std::collections::HashMap;

use serde_json::Value;
use sluggable::domain::slug::{RecordKey, SlugOptions, SlugRecord};

/// Minimal host record with flat string fields.
#[derive(Debug, Clone, Default)]
pub struct Post {
    pub id: Option<i64>,
    pub fields: HashMap<String, String>,
    pub original: HashMap<String, String>,
    pub team_id: Option<i64>,
    pub soft_deletes: bool,
}

impl Post {
    pub fn titled(title: &str) -> Self {
        Self::default().with("title", title)
    }

    pub fn with(mut self, field: &str, value: &str) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn stored(mut self, id: i64) -> Self {
        self.id = Some(id);
        self.original = self.fields.clone();
        self
    }

    pub fn in_team(mut self, team_id: i64) -> Self {
        self.team_id = Some(team_id);
        self
    }

    pub fn soft_deleting(mut self) -> Self {
        self.soft_deletes = true;
        self
    }

    /// Simulates a save: the current fields become the persisted ones.
    pub fn persist(&mut self, id: i64) {
        self.id = Some(id);
        self.original = self.fields.clone();
    }

    pub fn slug(&self) -> Option<&str> {
        self.fields.get("slug").map(String::as_str)
    }
}

impl SlugRecord for Post {
    fn field_value(&self, path: &str) -> Option<String> {
        self.fields.get(path).cloned()
    }

    fn original_field_value(&self, field: &str) -> Option<String> {
        self.original.get(field).cloned()
    }

    fn set_field_value(&mut self, field: &str, value: String) {
        self.fields.insert(field.into(), value);
    }

    fn exists(&self) -> bool {
        self.id.is_some()
    }

    fn identity_key(&self) -> Option<RecordKey> {
        self.id.map(RecordKey::Int)
    }

    fn table(&self) -> &str {
        "posts"
    }

    fn supports_soft_delete(&self) -> bool {
        self.soft_deletes
    }

    fn scope_value(&self, field: &str) -> Value {
        match field {
            "team_id" => self.team_id.map_or(Value::Null, Value::from),
            other => self.field_value(other).map_or(Value::Null, Value::String),
        }
    }
}

pub fn post_options() -> SlugOptions<Post> {
    SlugOptions::create()
        .generate_slugs_from(["title"])
        .save_slugs_to("slug")
}
