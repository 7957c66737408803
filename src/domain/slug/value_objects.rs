use serde_json::Value;
use std::fmt;

/// Primary identity of a persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RecordKey {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for RecordKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for RecordKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Which normalizer turns the raw source into a slug.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransliterationMode {
    #[default]
    Default,
    Arabic,
}

impl TransliterationMode {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "default" | "latin" => Some(Self::Default),
            "arabic" => Some(Self::Arabic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScopeCondition {
    pub field: String,
    pub value: Value,
}

/// Extra equality constraints applied to the uniqueness query, e.g. limiting
/// collisions to records of the same team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScopeFilter {
    conditions: Vec<ScopeCondition>,
}

impl ScopeFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push(ScopeCondition {
            field: field.into(),
            value: value.into(),
        });
        self
    }

    pub fn conditions(&self) -> &[ScopeCondition] {
        &self.conditions
    }

    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }
}

/// Existence check issued by the uniqueness resolver.
///
/// Implementations must ignore any default filtering they would normally
/// apply; the only row filters are the ones carried here.
#[derive(Debug, Clone, PartialEq)]
pub struct SlugQuery {
    pub table: String,
    pub slug_field: String,
    pub slug: String,
    pub exclude_key: Option<RecordKey>,
    pub include_soft_deleted: bool,
    pub scope: Option<ScopeFilter>,
}
