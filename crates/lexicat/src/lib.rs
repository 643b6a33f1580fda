#![forbid(unsafe_code)]

//! Layered, lazily loaded localization catalogs for Lexicat.
//!
//! Resolves a string key to a localized, parameter-substituted message.
//! Catalogs are merged from an ordered pair of storage roots (framework
//! defaults, then application overrides), loaded per language on first use,
//! and cached for the process lifetime.
//!
//! The entry point is [`Translator`]; the pieces underneath are usable on
//! their own: [`LanguageRegistry`] for selection/validation,
//! [`CatalogLoader`] for the merge scan, and [`CatalogCache`] for the
//! compute-once caching layer.

pub mod cache;
pub mod config;
pub mod error;
pub mod loader;
pub mod registry;
pub mod translator;

pub use cache::CatalogCache;
pub use config::{L10nConfig, LanguageSet};
pub use error::L10nError;
pub use loader::{CatalogLoader, Locations, Messages};
pub use registry::LanguageRegistry;
pub use translator::Translator;
