#![forbid(unsafe_code)]

//! Public translation API: key lookup plus `:name` placeholder substitution.
//!
//! # Invariants
//!
//! 1. **Key echo**: a key with no catalog entry translates to itself, never
//!    to an error or an empty string.
//!
//! 2. **Disabled short-circuit**: with translation disabled no storage scan
//!    and no catalog lookup happens; substitution still runs over the
//!    literal key text.
//!
//! 3. **Caller-ordered substitution**: parameters are applied in the order
//!    the caller supplies them, each as a plain substring replacement of
//!    every `:name` occurrence. When one parameter name is a textual prefix
//!    of another (`:user` vs `:username`), an unfavorable order can consume
//!    part of the longer token. Existing callers depend on this exact
//!    behavior, so it is documented rather than fixed.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing key | No catalog entry | Key echoed back |
//! | Missing language dirs | Nothing on disk | Empty catalog, key echoed back |
//! | Unknown language selected | Code outside configured set | `Err(L10nError::UnknownLanguage)` |

use crate::cache::CatalogCache;
use crate::config::{L10nConfig, LanguageSet};
use crate::error::L10nError;
use crate::loader::{CatalogLoader, Locations, Messages};
use crate::registry::LanguageRegistry;

/// Facade over the registry, cache, and loader.
///
/// `translate`, `load`, and `messages` take `&self`; catalog loading uses
/// interior, compute-once caching, so a `Translator` can be shared across
/// threads. Changing the current language takes `&mut self` — selection is
/// configuration-scoped state, set at startup, not flipped mid-request.
///
/// # Example
///
/// ```no_run
/// use lexicat::{L10nConfig, Locations, Translator};
///
/// let config = L10nConfig::from_json_str(
///     r#"{ "is-allowed": true, "language": "en",
///          "languages": { "en": "English", "ru": "Russian" } }"#,
/// )?;
/// let translator = Translator::new(&config, Locations::new("data/locale", "app/locale"));
///
/// // With a catalog entry `greet = "Hi :name"`:
/// let line = translator.translate("greet", &[("name", "Ann")], None);
/// assert_eq!(line, "Hi Ann");
/// # Ok::<(), lexicat::L10nError>(())
/// ```
#[derive(Debug)]
pub struct Translator {
    registry: LanguageRegistry,
    cache: CatalogCache,
}

impl Translator {
    /// Build a translator from a configuration block and the host-resolved
    /// storage roots.
    #[must_use]
    pub fn new(config: &L10nConfig, locations: Locations) -> Self {
        Self {
            registry: LanguageRegistry::from_config(config),
            cache: CatalogCache::new(CatalogLoader::new(locations)),
        }
    }

    /// Whether translation is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.registry.is_enabled()
    }

    /// The configured language set.
    #[must_use]
    pub fn languages(&self) -> &LanguageSet {
        self.registry.languages()
    }

    /// Select the current language by short code.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::UnknownLanguage`] for a code outside the
    /// configured set; the previous selection is kept.
    pub fn set_current_by_name(&mut self, code: &str) -> Result<&mut Self, L10nError> {
        self.registry.set_current(code)?;
        Ok(self)
    }

    /// Current language as a short code (`short = true`) or full name.
    #[must_use]
    pub fn current(&self, short: bool) -> Option<&str> {
        self.registry.current_name(short)
    }

    /// Short code for a full language name, or `None`.
    #[must_use]
    pub fn short_name(&self, full_name: &str) -> Option<&str> {
        self.registry.short_name(full_name)
    }

    /// Full name for a short code (defaulting to the current language), or
    /// `None`.
    #[must_use]
    pub fn full_name(&self, code: Option<&str>) -> Option<&str> {
        self.registry.full_name(code)
    }

    /// Translate a key with no parameters in the current language.
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        self.translate(key, &[], None)
    }

    /// Translate `key`, substitute `params`, optionally overriding the
    /// language for this one call.
    ///
    /// The catalog for the resolved language is loaded on first use and
    /// cached for the process lifetime. A key without an entry — or any
    /// lookup while translation is disabled — echoes the key itself into
    /// substitution.
    #[must_use]
    pub fn translate(&self, key: &str, params: &[(&str, &str)], language: Option<&str>) -> String {
        let mut result = key.to_string();

        if self.registry.is_enabled()
            && let Some(code) = language.or_else(|| self.registry.current())
        {
            self.cache.ensure_loaded(code);
            if let Some(template) = self.cache.lookup(code, key) {
                result = template;
            }
        }

        substitute(&result, params)
    }

    /// Cached messages for a language (defaulting to the current one), or an
    /// empty map when that language has never been loaded. Never loads.
    #[must_use]
    pub fn messages(&self, code: Option<&str>) -> Messages {
        match code.or_else(|| self.registry.current()) {
            Some(code) => self.cache.snapshot(code),
            None => Messages::new(),
        }
    }

    /// Explicitly pre-warm the catalog for a language (defaulting to the
    /// current one). A no-op for an already-loaded language.
    pub fn load(&self, code: Option<&str>) {
        if let Some(code) = code.or_else(|| self.registry.current()) {
            self.cache.ensure_loaded(code);
        }
    }

    #[cfg(test)]
    pub(crate) fn catalog_loaded(&self, code: &str) -> bool {
        self.cache.is_loaded(code)
    }
}

/// Apply each `(name, value)` pair in order, replacing every literal
/// `:name` occurrence.
fn substitute(template: &str, params: &[(&str, &str)]) -> String {
    let mut result = template.to_string();
    for (name, value) in params {
        result = result.replace(&format!(":{name}"), value);
    }
    result
}
