use crate::application::ports::util::SlugGenerator;
use crate::infrastructure::transliteration::TransliterationTable;
use std::sync::Arc;

const ARABIC_LETTERS: &str = "ءاأإآؤئبتثجحخدذرزسشصضطظعغفقكلمنهويةى";

/// Slugs that keep Arabic script intact while folding accompanying Latin text.
///
/// Input is trimmed and lowercased, anything outside ASCII letters, digits,
/// hyphens, underscores, whitespace, the Arabic alphabet and the
/// transliteration table is dropped, runs of whitespace and hyphens become a
/// single separator and the table is applied last. Separators left at either
/// end are trimmed.
#[derive(Clone)]
pub struct ArabicSlugGenerator {
    table: Arc<TransliterationTable>,
}

impl Default for ArabicSlugGenerator {
    fn default() -> Self {
        Self::new(TransliterationTable::latin_diacritics())
    }
}

impl ArabicSlugGenerator {
    pub fn new(table: Arc<TransliterationTable>) -> Self {
        Self { table }
    }

    fn is_kept(&self, c: char) -> bool {
        c.is_ascii_alphanumeric()
            || c == '_'
            || c == '-'
            || c.is_whitespace()
            || ARABIC_LETTERS.contains(c)
            || self.table.contains(c)
    }
}

impl SlugGenerator for ArabicSlugGenerator {
    fn slugify(&self, input: &str, separator: &str, _language: Option<&str>) -> String {
        if input.is_empty() {
            return String::new();
        }

        let lowered = input.trim().to_lowercase();
        let kept: String = lowered.chars().filter(|&c| self.is_kept(c)).collect();

        let mut joined = String::with_capacity(kept.len());
        let mut in_gap = false;
        for c in kept.chars() {
            if c.is_whitespace() || c == '-' {
                if !in_gap {
                    joined.push_str(separator);
                    in_gap = true;
                }
            } else {
                if c == '_' {
                    joined.push_str(separator);
                } else {
                    joined.push(c);
                }
                in_gap = false;
            }
        }

        let slug = self.table.apply(&joined);
        trim_separator(&slug, separator).to_string()
    }
}

fn trim_separator<'a>(value: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return value;
    }

    let mut trimmed = value;
    while let Some(rest) = trimmed.strip_prefix(separator) {
        trimmed = rest;
    }
    while let Some(rest) = trimmed.strip_suffix(separator) {
        trimmed = rest;
    }
    trimmed
}
