pub trait SlugGenerator: Send + Sync {
    /// URL-safe form of `input`, with word boundaries joined by `separator`.
    /// `language` picks language-specific folding where the generator has one.
    fn slugify(&self, input: &str, separator: &str, language: Option<&str>) -> String;
}
