#![forbid(unsafe_code)]

//! Catalog cache: compute-once-per-language lazy loading.
//!
//! Per language the cache follows `NotLoaded → Loading → Loaded`, and
//! `Loaded` is terminal — there is no invalidation or reload primitive.
//!
//! # Invariants
//!
//! 1. **Compute-once**: concurrent [`CatalogCache::ensure_loaded`] calls for
//!    the same language observe exactly one underlying storage scan. The
//!    slot map mutex is held only to hand out the slot; the load itself runs
//!    inside `OnceLock::get_or_init`, so a slow load for one language never
//!    blocks loads or reads for another.
//!
//! 2. **Immutable after load**: a loaded catalog is never mutated again;
//!    reads need no locking beyond cloning the slot handle.
//!
//! 3. **Read-only snapshots**: [`CatalogCache::snapshot`] and
//!    [`CatalogCache::lookup`] never trigger a load as a side effect.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

use crate::loader::{CatalogLoader, Messages};

#[cfg(feature = "tracing")]
use tracing::trace;

type Slot = Arc<OnceLock<Messages>>;

/// Lazily loaded, per-language merged catalogs.
#[derive(Debug)]
pub struct CatalogCache {
    loader: CatalogLoader,
    slots: Mutex<HashMap<String, Slot>>,
}

impl CatalogCache {
    /// Create an empty cache over a loader.
    #[must_use]
    pub fn new(loader: CatalogLoader) -> Self {
        Self {
            loader,
            slots: Mutex::new(HashMap::new()),
        }
    }

    fn slot(&self, code: &str) -> Slot {
        let mut slots = self.slots.lock().expect("catalog slot map poisoned");
        slots.entry(code.to_string()).or_default().clone()
    }

    /// Ensure the catalog for `code` is loaded, scanning storage at most
    /// once per language for the lifetime of the cache.
    pub fn ensure_loaded(&self, code: &str) {
        let slot = self.slot(code);
        #[cfg(feature = "tracing")]
        if slot.get().is_some() {
            trace!(language = code, "catalog cache hit");
        }
        slot.get_or_init(|| self.loader.load(code));
    }

    /// Whether the catalog for `code` has completed loading.
    #[must_use]
    pub fn is_loaded(&self, code: &str) -> bool {
        let slots = self.slots.lock().expect("catalog slot map poisoned");
        slots.get(code).is_some_and(|slot| slot.get().is_some())
    }

    /// Template for one key, or `None` when the key (or the whole language)
    /// is not in the cache. Never loads.
    #[must_use]
    pub fn lookup(&self, code: &str, key: &str) -> Option<String> {
        let slot = {
            let slots = self.slots.lock().expect("catalog slot map poisoned");
            slots.get(code).cloned()
        }?;
        slot.get()?.get(key).cloned()
    }

    /// A copy of the cached mapping for `code`, or an empty map when the
    /// language has never been loaded. Never loads.
    #[must_use]
    pub fn snapshot(&self, code: &str) -> Messages {
        let slot = {
            let slots = self.slots.lock().expect("catalog slot map poisoned");
            slots.get(code).cloned()
        };
        slot.and_then(|slot| slot.get().cloned()).unwrap_or_default()
    }
}
