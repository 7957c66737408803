use crate::domain::slug::value_objects::RecordKey;
use serde_json::Value;

/// Accessor a host record implements so slugs can be derived from it and
/// written back to it.
pub trait SlugRecord: Send + Sync {
    /// Current value at a (possibly dotted) field path. `None` when missing.
    fn field_value(&self, path: &str) -> Option<String>;

    /// Value of `field` as it was last persisted.
    fn original_field_value(&self, field: &str) -> Option<String>;

    fn set_field_value(&mut self, field: &str, value: String);

    /// Whether the record is already persisted.
    fn exists(&self) -> bool;

    fn identity_key(&self) -> Option<RecordKey>;

    /// Storage table (or collection) sibling records share.
    fn table(&self) -> &str;

    fn supports_soft_delete(&self) -> bool {
        false
    }

    /// Typed value used when a scope filter is built from the record.
    fn scope_value(&self, field: &str) -> Value {
        self.field_value(field).map_or(Value::Null, Value::String)
    }
}
