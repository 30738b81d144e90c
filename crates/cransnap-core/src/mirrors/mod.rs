//! Mirror configuration model.
//!
//! An ordered name→URL list, explicit and passed by reference — the
//! "process-wide" semantics live in [`persist`] rather than in a global.

mod persist;

use serde::{Deserialize, Serialize};

/// Name of the conventional default package source entry.
pub const CRAN_MIRROR_NAME: &str = "CRAN";

/// Canonical CRAN host used for the default configuration.
pub const DEFAULT_CRAN_URL: &str = "https://cran.r-project.org";

/// One mirror: a name (possibly empty) and a URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorEntry {
    #[serde(default)]
    pub name: String,
    pub url: String,
}

impl MirrorEntry {
    pub fn new(name: &str, url: &str) -> Self {
        Self {
            name: name.to_string(),
            url: url.to_string(),
        }
    }
}

/// Ordered mirror configuration consulted by the package manager.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MirrorConfig {
    #[serde(default, rename = "mirror")]
    entries: Vec<MirrorEntry>,
}

impl MirrorConfig {
    pub fn new(entries: Vec<MirrorEntry>) -> Self {
        Self { entries }
    }

    /// Default configuration: a single CRAN entry on the canonical host.
    pub fn cran() -> Self {
        Self::new(vec![MirrorEntry::new(CRAN_MIRROR_NAME, DEFAULT_CRAN_URL)])
    }

    pub fn entries(&self) -> &[MirrorEntry] {
        &self.entries
    }

    /// Repoints the CRAN entry at `url`.
    ///
    /// If no entry carries a name, the whole configuration is replaced by
    /// the single entry `CRAN → url`. Otherwise every unnamed or
    /// CRAN-named entry is removed and `CRAN → url` is prepended; the
    /// remaining named entries keep their relative order. Afterwards
    /// exactly one CRAN entry exists.
    pub fn set_snapshot_entry(&mut self, url: &str) {
        let has_named = self.entries.iter().any(|e| !e.name.is_empty());
        if !has_named {
            self.entries = vec![MirrorEntry::new(CRAN_MIRROR_NAME, url)];
            return;
        }
        self.entries
            .retain(|e| !e.name.is_empty() && e.name != CRAN_MIRROR_NAME);
        self.entries
            .insert(0, MirrorEntry::new(CRAN_MIRROR_NAME, url));
    }
}
