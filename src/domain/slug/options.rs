use crate::domain::errors::InvalidOption;
use crate::domain::slug::value_objects::{ScopeFilter, TransliterationMode};
use std::fmt;
use std::sync::Arc;

pub const DEFAULT_SEPARATOR: &str = "-";
pub const DEFAULT_MAXIMUM_LENGTH: usize = 250;

pub type SourceCallback<R> = Arc<dyn Fn(&R) -> String + Send + Sync>;

/// Where the raw slug text comes from.
pub enum SlugSource<R> {
    Fields(Vec<String>),
    Callback(SourceCallback<R>),
}

impl<R> Clone for SlugSource<R> {
    fn clone(&self) -> Self {
        match self {
            Self::Fields(fields) => Self::Fields(fields.clone()),
            Self::Callback(callback) => Self::Callback(Arc::clone(callback)),
        }
    }
}

impl<R> fmt::Debug for SlugSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fields(fields) => f.debug_tuple("Fields").field(fields).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

pub struct SlugOptions<R> {
    pub source: SlugSource<R>,
    pub slug_field: String,
    pub separator: String,
    pub maximum_length: usize,
    pub generate_on_create: bool,
    pub generate_on_update: bool,
    pub prevent_overwrite: bool,
    pub generate_unique_slugs: bool,
    pub transliteration: TransliterationMode,
    /// Language code for language-specific ASCII folding, e.g. `de`.
    pub language: Option<String>,
    pub extra_scope: Option<ScopeFilter>,
}

impl<R> Clone for SlugOptions<R> {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            slug_field: self.slug_field.clone(),
            separator: self.separator.clone(),
            maximum_length: self.maximum_length,
            generate_on_create: self.generate_on_create,
            generate_on_update: self.generate_on_update,
            prevent_overwrite: self.prevent_overwrite,
            generate_unique_slugs: self.generate_unique_slugs,
            transliteration: self.transliteration,
            language: self.language.clone(),
            extra_scope: self.extra_scope.clone(),
        }
    }
}

impl<R> fmt::Debug for SlugOptions<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlugOptions")
            .field("source", &self.source)
            .field("slug_field", &self.slug_field)
            .field("separator", &self.separator)
            .field("maximum_length", &self.maximum_length)
            .field("generate_unique_slugs", &self.generate_unique_slugs)
            .field("transliteration", &self.transliteration)
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl<R> Default for SlugOptions<R> {
    fn default() -> Self {
        Self {
            source: SlugSource::Fields(Vec::new()),
            slug_field: String::new(),
            separator: DEFAULT_SEPARATOR.to_string(),
            maximum_length: DEFAULT_MAXIMUM_LENGTH,
            generate_on_create: true,
            generate_on_update: true,
            prevent_overwrite: false,
            generate_unique_slugs: true,
            transliteration: TransliterationMode::Default,
            language: None,
            extra_scope: None,
        }
    }
}

impl<R> SlugOptions<R> {
    pub fn create() -> Self {
        Self::default()
    }

    pub fn generate_slugs_from<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source = SlugSource::Fields(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn generate_slugs_with(
        mut self,
        callback: impl Fn(&R) -> String + Send + Sync + 'static,
    ) -> Self {
        self.source = SlugSource::Callback(Arc::new(callback));
        self
    }

    pub fn save_slugs_to(mut self, field: impl Into<String>) -> Self {
        self.slug_field = field.into();
        self
    }

    pub fn using_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn slugs_shouldnt_be_longer_than(mut self, maximum_length: usize) -> Self {
        self.maximum_length = maximum_length;
        self
    }

    pub fn allow_duplicate_slugs(mut self) -> Self {
        self.generate_unique_slugs = false;
        self
    }

    pub fn do_not_generate_slugs_on_create(mut self) -> Self {
        self.generate_on_create = false;
        self
    }

    pub fn do_not_generate_slugs_on_update(mut self) -> Self {
        self.generate_on_update = false;
        self
    }

    pub fn prevent_overwrite(mut self) -> Self {
        self.prevent_overwrite = true;
        self
    }

    pub fn using_transliteration(mut self, mode: TransliterationMode) -> Self {
        self.transliteration = mode;
        self
    }

    pub fn using_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn extra_scope(mut self, scope: ScopeFilter) -> Self {
        self.extra_scope = Some(scope);
        self
    }

    /// Checked before any generation; a failure leaves the record untouched.
    pub fn ensure_valid(&self) -> Result<(), InvalidOption> {
        if matches!(&self.source, SlugSource::Fields(fields) if fields.is_empty()) {
            return Err(InvalidOption::MissingSourceFields);
        }

        if self.slug_field.is_empty() {
            return Err(InvalidOption::MissingSlugField);
        }

        if self.maximum_length == 0 {
            return Err(InvalidOption::InvalidMaximumLength);
        }

        Ok(())
    }
}

/// Produces the options for a record at the moment a slug is generated.
pub trait SlugOptionsProvider<R>: Send + Sync {
    fn slug_options(&self, record: &R) -> SlugOptions<R>;
}

impl<R, F> SlugOptionsProvider<R> for F
where
    F: Fn(&R) -> SlugOptions<R> + Send + Sync,
{
    fn slug_options(&self, record: &R) -> SlugOptions<R> {
        self(record)
    }
}
