#![forbid(unsafe_code)]

//! Language registry: the allowed language set and the current selection.
//!
//! # Invariants
//!
//! 1. **Valid selection**: whenever translation is enabled, the current
//!    language is a member of the configured set. [`LanguageRegistry::set_current`]
//!    rejects unknown codes without mutating anything.
//!
//! 2. **Disabled means empty**: with translation disabled there is no current
//!    language and the set is empty; every lookup returns `None`.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Unknown code selected | Code not in set | `Err(L10nError::UnknownLanguage)`, no mutation |
//! | Enabled without a language | Config omits `language` | Registry constructed disabled |
//! | Reverse lookup miss | Full name not in set | Returns `None` |

use crate::config::{L10nConfig, LanguageSet};
use crate::error::L10nError;

/// Allowed languages and the currently selected one.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    enabled: bool,
    current: Option<String>,
    languages: LanguageSet,
}

impl LanguageRegistry {
    /// Build a registry from a configuration block.
    ///
    /// A block that enables translation but names no default language is
    /// treated as disabled; there is nothing valid to select.
    #[must_use]
    pub fn from_config(config: &L10nConfig) -> Self {
        match (&config.language, config.is_allowed) {
            (Some(language), true) => {
                let languages = config
                    .languages
                    .clone()
                    .unwrap_or_else(|| LanguageSet::singleton(language.clone()));
                Self {
                    enabled: true,
                    current: Some(language.clone()),
                    languages,
                }
            }
            _ => Self {
                enabled: false,
                current: None,
                languages: LanguageSet::new(),
            },
        }
    }

    /// Whether translation is enabled.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The configured language set.
    #[must_use]
    pub fn languages(&self) -> &LanguageSet {
        &self.languages
    }

    /// Select the current language by short code.
    ///
    /// # Errors
    ///
    /// Returns [`L10nError::UnknownLanguage`] when the code is not in the
    /// configured set; the previous selection is kept.
    pub fn set_current(&mut self, code: &str) -> Result<(), L10nError> {
        if self.languages.contains(code) {
            self.current = Some(code.to_string());
            Ok(())
        } else {
            Err(L10nError::UnknownLanguage(code.to_string()))
        }
    }

    /// Current language short code, or `None` when translation is disabled.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    /// Current language as a short code or as its configured full name.
    #[must_use]
    pub fn current_name(&self, short: bool) -> Option<&str> {
        let code = self.current()?;
        if short {
            Some(code)
        } else {
            self.languages.full_name(code)
        }
    }

    /// First short code whose full name matches, in declaration order.
    #[must_use]
    pub fn short_name(&self, full_name: &str) -> Option<&str> {
        self.languages.code_for_name(full_name)
    }

    /// Full name for a short code, defaulting to the current language.
    #[must_use]
    pub fn full_name(&self, code: Option<&str>) -> Option<&str> {
        let code = code.or_else(|| self.current())?;
        self.languages.full_name(code)
    }
}
