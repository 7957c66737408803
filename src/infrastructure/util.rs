use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::SlugGenerators;
use crate::infrastructure::arabic::ArabicSlugGenerator;
use crate::infrastructure::transliteration::TransliterationTable;
use slug::slugify;
use std::sync::Arc;

/// ASCII slugs through the `slug` crate, which transliterates known scripts
/// and joins words with hyphens. A known `language` folds its own letters
/// first (German `ü` becomes `ue` rather than `u`).
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str, separator: &str, language: Option<&str>) -> String {
        let slug = match language.and_then(TransliterationTable::for_language) {
            Some(table) => slugify(table.apply(input)),
            None => slugify(input),
        };
        if separator == "-" {
            slug
        } else {
            slug.replace('-', separator)
        }
    }
}

impl SlugGenerators {
    /// The built-in normalizers for both transliteration modes.
    pub fn standard() -> Self {
        Self {
            default: Arc::new(DefaultSlugGenerator),
            arabic: Arc::new(ArabicSlugGenerator::default()),
        }
    }
}
