#![forbid(unsafe_code)]

//! Error taxonomy for the localization subsystem.
//!
//! Only one condition is a hard failure: selecting a language outside the
//! configured set. Everything else (missing catalog directories, missing
//! message keys, malformed catalog sources) degrades gracefully so that
//! `translate` stays available; see the `loader` and `translator` module
//! docs for the exact degradation behavior.

/// Errors from localization operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum L10nError {
    /// The requested short code is not in the configured language set.
    UnknownLanguage(String),
    /// The configuration block could not be parsed.
    Config(String),
}

impl std::fmt::Display for L10nError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownLanguage(code) => write!(f, "language '{code}' not allowed"),
            Self::Config(msg) => write!(f, "invalid l10n configuration: {msg}"),
        }
    }
}

impl std::error::Error for L10nError {}
