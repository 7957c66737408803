// src/domain/slug/services/mod.rs
use std::sync::Arc;

use crate::application::ports::{SlugGeneratorPort, util::SlugGenerator};
use crate::domain::errors::DomainResult;
use crate::domain::slug::options::SlugOptions;
use crate::domain::slug::record::SlugRecord;
use crate::domain::slug::repository::SlugRepository;
use crate::domain::slug::source::{resolve_source_string, truncate_chars};
use crate::domain::slug::value_objects::{SlugQuery, TransliterationMode};

mod hooks;

pub use hooks::SlugHooks;

/// One normalizer per transliteration mode.
#[derive(Clone)]
pub struct SlugGenerators {
    pub default: Arc<SlugGeneratorPort>,
    pub arabic: Arc<SlugGeneratorPort>,
}

impl SlugGenerators {
    pub fn for_mode(&self, mode: TransliterationMode) -> &dyn SlugGenerator {
        match mode {
            TransliterationMode::Default => self.default.as_ref(),
            TransliterationMode::Arabic => self.arabic.as_ref(),
        }
    }
}

/// Domain service producing (optionally unique) slugs for records.
pub struct SlugService {
    repo: Arc<dyn SlugRepository>,
    generators: SlugGenerators,
}

impl SlugService {
    pub fn new(repo: Arc<dyn SlugRepository>, generators: SlugGenerators) -> Self {
        Self { repo, generators }
    }

    /// Runs on record creation unless disabled or a slug is already present
    /// and overwrites are prevented. Returns the assigned slug, if any.
    pub async fn generate_on_create<R: SlugRecord>(
        &self,
        record: &mut R,
        options: &SlugOptions<R>,
    ) -> DomainResult<Option<String>> {
        if !options.generate_on_create {
            tracing::debug!(table = record.table(), "slug generation on create disabled");
            return Ok(None);
        }

        self.generate_unless_prevented(record, options).await
    }

    pub async fn generate_on_update<R: SlugRecord>(
        &self,
        record: &mut R,
        options: &SlugOptions<R>,
    ) -> DomainResult<Option<String>> {
        if !options.generate_on_update {
            tracing::debug!(table = record.table(), "slug generation on update disabled");
            return Ok(None);
        }

        self.generate_unless_prevented(record, options).await
    }

    async fn generate_unless_prevented<R: SlugRecord>(
        &self,
        record: &mut R,
        options: &SlugOptions<R>,
    ) -> DomainResult<Option<String>> {
        if options.prevent_overwrite && record.field_value(&options.slug_field).is_some() {
            tracing::debug!(
                table = record.table(),
                field = %options.slug_field,
                "slug already present, overwrite prevented"
            );
            return Ok(None);
        }

        self.generate(record, options).await.map(Some)
    }

    /// Regenerates the slug regardless of the lifecycle flags.
    pub async fn generate<R: SlugRecord>(
        &self,
        record: &mut R,
        options: &SlugOptions<R>,
    ) -> DomainResult<String> {
        options.ensure_valid()?;

        let mut slug = self.generate_non_unique_slug(record, options);

        if options.generate_unique_slugs {
            slug = self.make_unique(slug, record, options).await?;
        }

        record.set_field_value(&options.slug_field, slug.clone());
        Ok(slug)
    }

    /// Source text normalized with the configured mode and capped to the
    /// maximum length.
    pub fn generate_non_unique_slug<R: SlugRecord>(
        &self,
        record: &R,
        options: &SlugOptions<R>,
    ) -> String {
        let source = resolve_source_string(record, options);
        let slug = self
            .generators
            .for_mode(options.transliteration)
            .slugify(&source, &options.separator, options.language.as_deref());

        fit_to_length(&slug, options.maximum_length, &options.separator)
    }

    /// Appends `separator + n` to `candidate` until no other record holds it.
    /// An empty candidate always counts as taken.
    pub async fn make_unique<R: SlugRecord>(
        &self,
        candidate: String,
        record: &R,
        options: &SlugOptions<R>,
    ) -> DomainResult<String> {
        if !options.generate_unique_slugs {
            return Ok(candidate);
        }

        let mut slug = candidate.clone();
        let mut counter = 1u64;

        while slug.is_empty() || self.other_record_exists_with_slug(&slug, record, options).await? {
            tracing::debug!(table = record.table(), slug = %slug, "slug taken, trying next suffix");
            slug = suffixed(&candidate, counter, options);
            counter += 1;
        }

        Ok(slug)
    }

    async fn other_record_exists_with_slug<R: SlugRecord>(
        &self,
        slug: &str,
        record: &R,
        options: &SlugOptions<R>,
    ) -> DomainResult<bool> {
        let query = SlugQuery {
            table: record.table().to_string(),
            slug_field: options.slug_field.clone(),
            slug: slug.to_string(),
            exclude_key: if record.exists() {
                record.identity_key()
            } else {
                None
            },
            include_soft_deleted: record.supports_soft_delete(),
            scope: options.extra_scope.clone(),
        };

        self.repo.slug_exists(&query).await
    }
}

/// Cuts `slug` to `maximum_length` codepoints without leaving a dangling
/// separator behind.
fn fit_to_length(slug: &str, maximum_length: usize, separator: &str) -> String {
    if slug.chars().count() <= maximum_length {
        return slug.to_string();
    }

    let cut = truncate_chars(slug, maximum_length);
    trim_trailing_separator(&cut, separator).to_string()
}

fn trim_trailing_separator<'a>(value: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return value;
    }

    let mut trimmed = value;
    while let Some(rest) = trimmed.strip_suffix(separator) {
        trimmed = rest;
    }
    trimmed
}

/// `base + separator + counter`, with the base shortened so the result stays
/// within the maximum length. An empty base yields the bare number.
fn suffixed<R>(base: &str, counter: u64, options: &SlugOptions<R>) -> String {
    let suffix = counter.to_string();
    if base.is_empty() {
        return suffix;
    }

    let reserved = options.separator.chars().count() + suffix.chars().count();
    let room = options.maximum_length.saturating_sub(reserved);
    let base = if base.chars().count() > room {
        trim_trailing_separator(&truncate_chars(base, room), &options.separator).to_string()
    } else {
        base.to_string()
    };

    if base.is_empty() {
        suffix
    } else {
        format!("{base}{}{suffix}", options.separator)
    }
}
