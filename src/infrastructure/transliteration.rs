//! Character tables used to fold accented Latin text to ASCII.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Arc;

/// Latin-1 and Romanian diacritics, plus a few symbols, with their ASCII
/// replacements.
pub const LATIN_DIACRITICS: &[(char, &str)] = &[
    ('Š', "S"), ('š', "s"), ('Ð', "Dj"), ('Ž', "Z"), ('ž', "z"),
    ('À', "A"), ('Á', "A"), ('Â', "A"), ('Ã', "A"), ('Ä', "A"), ('Å', "A"), ('Æ', "A"),
    ('Ç', "C"), ('È', "E"), ('É', "E"), ('Ê', "E"), ('Ë', "E"),
    ('Ì', "I"), ('Í', "I"), ('Î', "I"), ('Ï', "I"), ('Ñ', "N"), ('Ń', "N"),
    ('Ò', "O"), ('Ó', "O"), ('Ô', "O"), ('Õ', "O"), ('Ö', "O"), ('Ø', "O"),
    ('Ù', "U"), ('Ú', "U"), ('Û', "U"), ('Ü', "U"), ('Ý', "Y"), ('Þ', "B"), ('ß', "ss"),
    ('à', "a"), ('á', "a"), ('â', "a"), ('ã', "a"), ('ä', "a"), ('å', "a"), ('æ', "a"),
    ('ç', "c"), ('è', "e"), ('é', "e"), ('ê', "e"), ('ë', "e"),
    ('ì', "i"), ('í', "i"), ('î', "i"), ('ï', "i"), ('ð', "o"), ('ñ', "n"), ('ń', "n"),
    ('ò', "o"), ('ó', "o"), ('ô', "o"), ('õ', "o"), ('ö', "o"), ('ø', "o"),
    ('ù', "u"), ('ú', "u"), ('û', "u"), ('ü', "u"), ('ý', "y"), ('þ', "b"), ('ÿ', "y"),
    ('ƒ', "f"), ('/', ""), ('€', "eur"),
    ('ă', "a"), ('ș', "s"), ('ț', "t"), ('Ă', "A"), ('Ș', "S"), ('Ț', "T"),
];

/// German spelling of umlauts.
pub const GERMAN: &[(char, &str)] = &[
    ('ä', "ae"), ('ö', "oe"), ('ü', "ue"), ('Ä', "Ae"), ('Ö', "Oe"), ('Ü', "Ue"), ('ß', "ss"),
];

/// Danish and Norwegian vowels.
pub const DANISH: &[(char, &str)] = &[
    ('æ', "ae"), ('ø', "oe"), ('å', "aa"), ('Æ', "Ae"), ('Ø', "Oe"), ('Å', "Aa"),
];

static LATIN: Lazy<Arc<TransliterationTable>> =
    Lazy::new(|| Arc::new(TransliterationTable::from_pairs(LATIN_DIACRITICS)));

static LANGUAGES: Lazy<HashMap<&'static str, Arc<TransliterationTable>>> = Lazy::new(|| {
    let german = Arc::new(TransliterationTable::from_pairs(GERMAN));
    let danish = Arc::new(TransliterationTable::from_pairs(DANISH));
    HashMap::from([
        ("de", Arc::clone(&german)),
        ("de_at", Arc::clone(&german)),
        ("de_ch", german),
        ("da", Arc::clone(&danish)),
        ("nb", Arc::clone(&danish)),
        ("no", danish),
    ])
});

/// Single-character replacements applied verbatim; unmapped characters pass
/// through.
#[derive(Debug, Clone, Default)]
pub struct TransliterationTable {
    map: HashMap<char, &'static str>,
}

impl TransliterationTable {
    pub fn from_pairs(pairs: &[(char, &'static str)]) -> Self {
        Self::default().extend(pairs)
    }

    /// Shared instance of [`LATIN_DIACRITICS`].
    pub fn latin_diacritics() -> Arc<Self> {
        Arc::clone(&LATIN)
    }

    /// Folding specific to `language` (`de`, `de-AT`, `da`, ...), if any.
    pub fn for_language(language: &str) -> Option<Arc<Self>> {
        let key = language.trim().to_lowercase().replace('-', "_");
        LANGUAGES.get(key.as_str()).cloned()
    }

    /// Adds or replaces mappings, e.g. for another script.
    pub fn extend(mut self, pairs: &[(char, &'static str)]) -> Self {
        self.map.extend(pairs.iter().copied());
        self
    }

    pub fn contains(&self, c: char) -> bool {
        self.map.contains_key(&c)
    }

    pub fn lookup(&self, c: char) -> Option<&'static str> {
        self.map.get(&c).copied()
    }

    pub fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for c in input.chars() {
            match self.lookup(c) {
                Some(replacement) => out.push_str(replacement),
                None => out.push(c),
            }
        }
        out
    }
}
