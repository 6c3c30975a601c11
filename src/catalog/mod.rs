//! Catalog readers for item sizes.
//!
//! IIAB keeps three JSON catalogs, one per kind of downloadable content.
//! They differ only in file location, field names and size units, so a
//! single reader is parameterized by [`CatalogKind`].
//!
//! | Kind | Top-level key | Re-keyed by | URL field | Size field | Unit |
//! |------|---------------|-------------|-----------|------------|------|
//! | Zim | `zims` | `perma_ref` | `download_url` | `size` | KiB |
//! | Module | `modules` | (module dir) | `rsync_url` | `ksize` | KiB |
//! | Map | `base` | `perma_ref` | `archive_url` | `size` | bytes |

pub mod reader;

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::paths;

pub use reader::{read_entry, rekey};

/// Added to every size found in a catalog
pub const SIZE_BIAS: i64 = 1023;

/// The three catalogs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CatalogKind {
    /// Kiwix ZIM catalog
    Zim,

    /// OER2Go module catalog
    Module,

    /// Map tile catalog
    Map,
}

impl CatalogKind {
    /// Top-level object holding the records
    pub fn top_level_key(self) -> &'static str {
        match self {
            CatalogKind::Zim => "zims",
            CatalogKind::Module => "modules",
            CatalogKind::Map => "base",
        }
    }

    /// Field records are re-keyed by, if the file is not keyed by identifier already
    pub fn rekey_field(self) -> Option<&'static str> {
        match self {
            CatalogKind::Zim | CatalogKind::Map => Some("perma_ref"),
            CatalogKind::Module => None,
        }
    }

    pub fn url_field(self) -> &'static str {
        match self {
            CatalogKind::Zim => "download_url",
            CatalogKind::Module => "rsync_url",
            CatalogKind::Map => "archive_url",
        }
    }

    pub fn size_field(self) -> &'static str {
        match self {
            CatalogKind::Zim | CatalogKind::Map => "size",
            CatalogKind::Module => "ksize",
        }
    }

    /// Convert a raw catalog size to bytes, including [`SIZE_BIAS`].
    ///
    /// Returns `None` on overflow.
    pub fn to_bytes(self, raw: i64) -> Option<i64> {
        match self {
            CatalogKind::Zim | CatalogKind::Module => raw.checked_mul(1024)?.checked_add(SIZE_BIAS),
            CatalogKind::Map => raw.checked_add(SIZE_BIAS),
        }
    }
}

impl std::fmt::Display for CatalogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogKind::Zim => write!(f, "zim"),
            CatalogKind::Module => write!(f, "module"),
            CatalogKind::Map => write!(f, "map"),
        }
    }
}

/// Locations of the three catalog files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPaths {
    pub zim: PathBuf,
    pub module: PathBuf,
    pub map: PathBuf,
}

impl Default for CatalogPaths {
    fn default() -> Self {
        Self {
            zim: PathBuf::from(paths::KIWIX_CATALOG),
            module: PathBuf::from(paths::OER2GO_CATALOG),
            map: PathBuf::from(paths::MAP_CATALOG),
        }
    }
}

impl CatalogPaths {
    pub fn path_for(&self, kind: CatalogKind) -> &Path {
        match kind {
            CatalogKind::Zim => &self.zim,
            CatalogKind::Module => &self.module,
            CatalogKind::Map => &self.map,
        }
    }
}

/// What a catalog knows about one item
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogEntry {
    pub download_url: String,

    /// Size in bytes, 0 when the item is not in the catalog
    pub size: i64,
}

/// Errors reading a catalog file
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog {} has no '{key}' object", .path.display())]
    MissingKey { path: PathBuf, key: &'static str },

    #[error("catalog {} has a malformed record '{record}': {reason}", .path.display())]
    MalformedRecord {
        path: PathBuf,
        record: String,
        reason: String,
    },
}
