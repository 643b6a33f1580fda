#![forbid(unsafe_code)]

//! Catalog loader: scans layered storage roots and merges message sources.
//!
//! For one language the loader probes a fixed, ordered pair of roots — the
//! framework default root first, then the application override root. Each
//! root is expected to contain a subdirectory named by the language short
//! code; every regular file directly inside it (non-recursive) is parsed as
//! a flat JSON object of message key → template and merged into the result.
//!
//! # Invariants
//!
//! 1. **Last write wins**: entries from a later root overwrite same-named
//!    keys from an earlier one; within one directory, files merge in
//!    file-name order, later files overwriting earlier ones.
//!
//! 2. **Deterministic**: directory entries are sorted by path before
//!    merging, so the result does not depend on readdir order.
//!
//! 3. **Pure**: `load` never consults or mutates cache state; idempotence
//!    per language is the cache's job.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Missing directory | Root has no subdir for the code | Contributes nothing, silently |
//! | Unreadable file | Permissions, I/O error | Skipped with a `warn!`, load continues |
//! | Malformed file | Not a flat JSON string map | Skipped with a `warn!`, load continues |
//!
//! Skip-and-continue is a deliberate policy choice: one bad file must not
//! take down translation for the whole language.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

#[cfg(feature = "tracing")]
use tracing::{debug, warn};

/// Merged message key → template mapping for one language.
pub type Messages = HashMap<String, String>;

/// The ordered pair of storage roots probed for every language.
///
/// Replaces the source system's ambient application locator: the host
/// resolves its paths once and passes them in explicitly.
#[derive(Debug, Clone)]
pub struct Locations {
    /// Framework defaults, probed first (lowest precedence).
    pub default_root: PathBuf,
    /// Application overrides, probed second (highest precedence).
    pub override_root: PathBuf,
}

impl Locations {
    /// Build the pair from the two host-resolved roots.
    pub fn new(default_root: impl Into<PathBuf>, override_root: impl Into<PathBuf>) -> Self {
        Self {
            default_root: default_root.into(),
            override_root: override_root.into(),
        }
    }

    fn roots(&self) -> [&Path; 2] {
        [&self.default_root, &self.override_root]
    }
}

/// Scans storage locations and merges per-language catalog sources.
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    locations: Locations,
}

impl CatalogLoader {
    /// Create a loader over the given root pair.
    #[must_use]
    pub fn new(locations: Locations) -> Self {
        Self { locations }
    }

    /// Load and merge every catalog source for one language.
    ///
    /// Missing directories contribute nothing; bad files are skipped (see
    /// the module docs for the full policy). The returned map may be empty.
    #[must_use]
    pub fn load(&self, code: &str) -> Messages {
        let mut merged = Messages::new();
        for root in self.locations.roots() {
            let dir = root.join(code);
            if dir.is_dir() {
                merge_dir(&dir, &mut merged);
            }
        }
        #[cfg(feature = "tracing")]
        debug!(language = code, keys = merged.len(), "catalog load complete");
        merged
    }
}

/// Merge every regular file directly inside `dir` into `acc`, in file-name
/// order. Subdirectories are ignored (catalogs are flat).
fn merge_dir(dir: &Path, acc: &mut Messages) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            warn_skip(dir, &err);
            return;
        }
    };

    let mut files: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    for path in files {
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(err) => {
                warn_skip(&path, &err);
                continue;
            }
        };
        match serde_json::from_str::<Messages>(&text) {
            Ok(entries) => acc.extend(entries),
            Err(err) => warn_skip(&path, &err),
        }
    }
}

fn warn_skip(path: &Path, reason: &dyn std::fmt::Display) {
    #[cfg(feature = "tracing")]
    warn!(path = %path.display(), reason = %reason, "skipping catalog source");
    #[cfg(not(feature = "tracing"))]
    let _ = (path, reason);
}
