use crate::domain::slug::options::{SlugOptions, SlugSource};
use crate::domain::slug::record::SlugRecord;

/// First `maximum_length` codepoints of `value`.
pub fn truncate_chars(value: &str, maximum_length: usize) -> String {
    value.chars().take(maximum_length).collect()
}

/// A slug value the caller set by hand, i.e. one that is non-empty and differs
/// from what was last persisted.
pub fn custom_slug<R: SlugRecord>(record: &R, options: &SlugOptions<R>) -> Option<String> {
    let current = record.field_value(&options.slug_field)?;
    if current.is_empty() {
        return None;
    }

    let original = record.original_field_value(&options.slug_field);
    (original.as_deref() != Some(current.as_str())).then_some(current)
}

/// Raw, not yet normalized slug text for `record`, capped to the maximum
/// length. A custom slug takes precedence over the configured source and is
/// capped as well.
pub fn resolve_source_string<R: SlugRecord>(record: &R, options: &SlugOptions<R>) -> String {
    let raw = if let Some(custom) = custom_slug(record, options) {
        custom
    } else {
        match &options.source {
            SlugSource::Callback(callback) => callback(record),
            SlugSource::Fields(fields) => fields
                .iter()
                .map(|field| record.field_value(field).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(&options.separator),
        }
    };

    truncate_chars(&raw, options.maximum_length)
}
