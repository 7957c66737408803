// src/config.rs
use crate::domain::slug::options::{DEFAULT_MAXIMUM_LENGTH, DEFAULT_SEPARATOR};
use crate::domain::slug::{
    ScopeFilter, SlugOptions, SlugOptionsProvider, SlugRecord, TransliterationMode,
};
use std::env;
use thiserror::Error;

#[derive(Clone, Debug)]
pub struct SlugConfig {
    database_url: String,
    database_max_connections: u32,
    collection: String,
    source_fields: Vec<String>,
    slug_field: String,
    separator: String,
    maximum_length: usize,
    generate_unique_slugs: bool,
    generate_on_create: bool,
    generate_on_update: bool,
    prevent_overwrite: bool,
    transliteration: TransliterationMode,
    language: Option<String>,
    scope_fields: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing environment variable: {0}")]
    Missing(&'static str),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

fn default_database_url() -> String {
    "sqlite://sluggable.db?mode=rwc".into()
}

fn default_max_connections() -> u32 {
    16
}

fn default_collection() -> String {
    "documents".into()
}

fn parse_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

fn parse_flag(raw: Option<String>, default: bool) -> bool {
    raw.map(|v| {
        let v = v.trim().to_lowercase();
        v == "1" || v == "true" || v == "yes"
    })
    .unwrap_or(default)
}

impl Default for SlugConfig {
    fn default() -> Self {
        Self {
            database_url: default_database_url(),
            database_max_connections: default_max_connections(),
            collection: default_collection(),
            source_fields: vec!["title".into()],
            slug_field: "slug".into(),
            separator: DEFAULT_SEPARATOR.into(),
            maximum_length: DEFAULT_MAXIMUM_LENGTH,
            generate_unique_slugs: true,
            generate_on_create: true,
            generate_on_update: true,
            prevent_overwrite: false,
            transliteration: TransliterationMode::Default,
            language: None,
            scope_fields: Vec::new(),
        }
    }
}

impl SlugConfig {
    /// Build configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Allow dotenv files to populate env vars when present.
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SlugConfig::from_env`] but reading from an arbitrary lookup,
    /// which keeps tests away from the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let database_url = lookup("DATABASE_URL").unwrap_or(defaults.database_url);
        let database_max_connections = match lookup("DATABASE_MAX_CONNECTIONS") {
            Some(raw) => raw.trim().parse::<u32>().map_err(|_| {
                ConfigError::Invalid(format!("DATABASE_MAX_CONNECTIONS must be a number, got {raw:?}"))
            })?,
            None => defaults.database_max_connections,
        };

        let collection = lookup("SLUG_COLLECTION").unwrap_or(defaults.collection);
        if collection.trim().is_empty() {
            return Err(ConfigError::Missing("SLUG_COLLECTION"));
        }

        let source_fields = lookup("SLUG_SOURCE_FIELDS")
            .map(|raw| parse_list(&raw))
            .unwrap_or(defaults.source_fields);
        let slug_field = lookup("SLUG_FIELD").unwrap_or(defaults.slug_field);
        let separator = lookup("SLUG_SEPARATOR").unwrap_or(defaults.separator);

        let maximum_length = match lookup("SLUG_MAX_LENGTH") {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| {
                ConfigError::Invalid(format!("SLUG_MAX_LENGTH must be a number, got {raw:?}"))
            })?,
            None => defaults.maximum_length,
        };

        let transliteration = match lookup("SLUG_TRANSLITERATION") {
            Some(raw) => TransliterationMode::parse(&raw).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "SLUG_TRANSLITERATION must be `default` or `arabic`, got {raw:?}"
                ))
            })?,
            None => defaults.transliteration,
        };

        let language = lookup("SLUG_LANGUAGE")
            .map(|raw| raw.trim().to_string())
            .filter(|raw| !raw.is_empty());

        let scope_fields = lookup("SLUG_SCOPE_FIELDS")
            .map(|raw| parse_list(&raw))
            .unwrap_or_default();

        Ok(Self {
            database_url,
            database_max_connections,
            collection,
            source_fields,
            slug_field,
            separator,
            maximum_length,
            generate_unique_slugs: parse_flag(lookup("SLUG_UNIQUE"), defaults.generate_unique_slugs),
            generate_on_create: parse_flag(lookup("SLUG_ON_CREATE"), defaults.generate_on_create),
            generate_on_update: parse_flag(lookup("SLUG_ON_UPDATE"), defaults.generate_on_update),
            prevent_overwrite: parse_flag(lookup("SLUG_PREVENT_OVERWRITE"), defaults.prevent_overwrite),
            transliteration,
            language,
            scope_fields,
        })
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }

    pub fn database_max_connections(&self) -> u32 {
        self.database_max_connections
    }

    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn source_fields(&self) -> &[String] {
        &self.source_fields
    }

    pub fn slug_field(&self) -> &str {
        &self.slug_field
    }

    pub fn transliteration(&self) -> TransliterationMode {
        self.transliteration
    }
}

impl<R: SlugRecord> SlugOptionsProvider<R> for SlugConfig {
    /// Options for `record`; configured scope fields are bound to the
    /// record's own values.
    fn slug_options(&self, record: &R) -> SlugOptions<R> {
        let mut options = SlugOptions::create()
            .generate_slugs_from(self.source_fields.iter().cloned())
            .save_slugs_to(self.slug_field.clone())
            .using_separator(self.separator.clone())
            .slugs_shouldnt_be_longer_than(self.maximum_length)
            .using_transliteration(self.transliteration);

        options.generate_unique_slugs = self.generate_unique_slugs;
        options.generate_on_create = self.generate_on_create;
        options.generate_on_update = self.generate_on_update;
        options.prevent_overwrite = self.prevent_overwrite;
        options.language = self.language.clone();

        if !self.scope_fields.is_empty() {
            let scope = self
                .scope_fields
                .iter()
                .fold(ScopeFilter::new(), |scope, field| {
                    scope.eq(field.clone(), record.scope_value(field))
                });
            options = options.extra_scope(scope);
        }

        options
    }
}
