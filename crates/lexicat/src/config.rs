#![forbid(unsafe_code)]

//! Configuration block and the ordered language set.
//!
//! The configuration is a small JSON object consumed once at construction:
//!
//! ```json
//! { "is-allowed": true, "language": "en", "languages": { "en": "English", "ru": "Russian" } }
//! ```
//!
//! # Invariants
//!
//! 1. **Declaration order**: [`LanguageSet`] iterates in the order entries
//!    were declared (JSON document order). Reverse lookup by full name is
//!    first-match-wins in that order, so ties resolve to the first-declared
//!    entry.
//!
//! 2. **Unique codes**: inserting an existing short code replaces its full
//!    name in place; the entry keeps its original position.
//!
//! 3. **Singleton fallback**: when `languages` is absent but translation is
//!    enabled, the effective set is `{language: language}`.

use serde::Deserialize;
use serde::de::{Deserializer, MapAccess, Visitor};

use crate::error::L10nError;

/// Ordered mapping from language short code to full name.
///
/// Backed by a `Vec` rather than a hash map: the set is tiny (a handful of
/// languages), lookups are linear scans, and declaration order must survive
/// round-trips through serde (Invariant 1).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageSet {
    entries: Vec<(String, String)>,
}

impl LanguageSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A set containing exactly one language mapped to itself.
    #[must_use]
    pub fn singleton(code: impl Into<String>) -> Self {
        let code = code.into();
        let mut set = Self::new();
        set.insert(code.clone(), code);
        set
    }

    /// Insert or replace a language. Replacement keeps the original position.
    pub fn insert(&mut self, code: impl Into<String>, full_name: impl Into<String>) {
        let code = code.into();
        let full_name = full_name.into();
        if let Some(entry) = self.entries.iter_mut().find(|(c, _)| *c == code) {
            entry.1 = full_name;
        } else {
            self.entries.push((code, full_name));
        }
    }

    /// Full name for a short code.
    #[must_use]
    pub fn full_name(&self, code: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, full)| full.as_str())
    }

    /// First short code (in declaration order) whose full name matches.
    #[must_use]
    pub fn code_for_name(&self, full_name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, full)| full == full_name)
            .map(|(code, _)| code.as_str())
    }

    /// Whether a short code is in the set.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == code)
    }

    /// Iterate `(short code, full name)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(c, f)| (c.as_str(), f.as_str()))
    }

    /// Number of languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the set has no languages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LanguageSet {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        let mut set = Self::new();
        for (code, full) in iter {
            set.insert(code, full);
        }
        set
    }
}

// Deserialized with an explicit map visitor so JSON document order is
// preserved; deserializing through a hash map would lose it.
impl<'de> Deserialize<'de> for LanguageSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct SetVisitor;

        impl<'de> Visitor<'de> for SetVisitor {
            type Value = LanguageSet;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of language short codes to full names")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut set = LanguageSet::new();
                while let Some((code, full)) = access.next_entry::<String, String>()? {
                    set.insert(code, full);
                }
                Ok(set)
            }
        }

        deserializer.deserialize_map(SetVisitor)
    }
}

/// The `l10n` configuration block.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct L10nConfig {
    /// Whether translation is enabled at all. When `false`, lookups and
    /// catalog loading are skipped entirely and `translate` echoes its key.
    #[serde(rename = "is-allowed", default)]
    pub is_allowed: bool,

    /// Default (and initially current) language short code.
    #[serde(default)]
    pub language: Option<String>,

    /// Allowed languages. Absent means `{language: language}` (Invariant 3).
    #[serde(default)]
    pub languages: Option<LanguageSet>,
}

impl L10nConfig {
    /// Parse a configuration block from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::Config`] when the text is not a valid
    /// configuration object.
    pub fn from_json_str(text: &str) -> Result<Self, L10nError> {
        serde_json::from_str(text).map_err(|err| L10nError::Config(err.to_string()))
    }

    /// A configuration with translation disabled.
    #[must_use]
    pub fn disabled() -> Self {
        Self::default()
    }

    /// A configuration enabled for a single default language.
    #[must_use]
    pub fn enabled(language: impl Into<String>) -> Self {
        Self {
            is_allowed: true,
            language: Some(language.into()),
            languages: None,
        }
    }

    /// Replace the allowed language set.
    #[must_use]
    pub fn with_languages(mut self, languages: LanguageSet) -> Self {
        self.languages = Some(languages);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_block() {
        let cfg = L10nConfig::from_json_str(
            r#"{ "is-allowed": true, "language": "en",
                 "languages": { "en": "English", "ru": "Russian" } }"#,
        )
        .unwrap();
        assert!(cfg.is_allowed);
        assert_eq!(cfg.language.as_deref(), Some("en"));
        let langs = cfg.languages.unwrap();
        assert_eq!(langs.full_name("ru"), Some("Russian"));
    }

    #[test]
    fn missing_fields_default_to_disabled() {
        let cfg = L10nConfig::from_json_str("{}").unwrap();
        assert!(!cfg.is_allowed);
        assert!(cfg.language.is_none());
        assert!(cfg.languages.is_none());
    }

    #[test]
    fn malformed_block_is_a_config_error() {
        let err = L10nConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, L10nError::Config(_)));
    }

    #[test]
    fn declaration_order_is_preserved() {
        let cfg = L10nConfig::from_json_str(
            r#"{ "languages": { "ru": "Russian", "en": "English", "de": "German" } }"#,
        )
        .unwrap();
        let codes: Vec<&str> = cfg.languages.as_ref().unwrap().iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["ru", "en", "de"]);
    }

    #[test]
    fn reverse_lookup_is_first_match() {
        // Two codes share a full name; the first-declared one wins.
        let set: LanguageSet = [("en", "English"), ("en-GB", "English")]
            .into_iter()
            .collect();
        assert_eq!(set.code_for_name("English"), Some("en"));
        assert_eq!(set.code_for_name("French"), None);
    }

    #[test]
    fn insert_replaces_in_place() {
        let mut set: LanguageSet = [("en", "English"), ("ru", "Russian")].into_iter().collect();
        set.insert("en", "English (US)");
        assert_eq!(set.len(), 2);
        assert_eq!(set.full_name("en"), Some("English (US)"));
        let codes: Vec<&str> = set.iter().map(|(c, _)| c).collect();
        assert_eq!(codes, vec!["en", "ru"]);
    }

    #[test]
    fn singleton_maps_code_to_itself() {
        let set = LanguageSet::singleton("en");
        assert_eq!(set.len(), 1);
        assert_eq!(set.full_name("en"), Some("en"));
    }
}
