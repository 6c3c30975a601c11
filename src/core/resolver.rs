//! Item size resolution.
//!
//! Looks an item up in the menu registry, picks the catalog its kind
//! points at, and reports the catalog size in bytes. A size of 0 is the
//! only not-found signal: it is logged as a warning and returned like
//! any other result.

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::catalog::{read_entry, CatalogEntry, CatalogPaths};
use crate::domain::{ItemKind, SizeResult};
use crate::registry::MenuRegistry;

/// A resolved item plus the download URL its catalog listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedItem {
    pub result: SizeResult,

    /// Empty when the catalog had no entry, or for unknown items
    pub download_url: String,
}

/// Resolves item names to sizes
#[derive(Debug, Clone)]
pub struct SizeResolver {
    registry: MenuRegistry,
    catalogs: CatalogPaths,
}

impl SizeResolver {
    /// Create a resolver over a loaded registry and a set of catalogs
    pub fn new(registry: MenuRegistry, catalogs: CatalogPaths) -> Self {
        Self { registry, catalogs }
    }

    /// Resolve one item name, warning when it is not found
    pub fn resolve(&self, name: &str) -> Result<SizeResult> {
        let result = self.resolve_entry(name)?.result;
        warn_if_missing(&result);
        Ok(result)
    }

    /// Resolve one item name, keeping the catalog's download URL.
    ///
    /// Does not log the not-found warning; callers that adjust the size
    /// afterwards call [`warn_if_missing`] on the final result.
    pub fn resolve_entry(&self, name: &str) -> Result<ResolvedItem> {
        let kind = match self.registry.get(name) {
            Some(def) => ItemKind::from_definition(name, def)?,
            None => {
                debug!(name, "Not in menu registry");
                ItemKind::Unknown
            }
        };

        let (reported, entry) = match kind.catalog_lookup() {
            Some((catalog, id)) => {
                let path = self.catalogs.path_for(catalog);
                let entry = read_entry(catalog, path, id)
                    .with_context(|| format!("Failed to look up '{}' in the {} catalog", id, catalog))?;
                (id, entry)
            }
            None => (name, CatalogEntry::default()),
        };

        Ok(ResolvedItem {
            result: SizeResult::new(reported, kind.item_type(), entry.size),
            download_url: entry.download_url,
        })
    }

    /// Resolve names lazily, in order.
    ///
    /// Each item is resolved independently when the iterator is advanced;
    /// an error for one item does not stop the others.
    pub fn resolve_all<'a, I, S>(&'a self, names: I) -> impl Iterator<Item = Result<SizeResult>> + 'a
    where
        I: IntoIterator<Item = S> + 'a,
        I::IntoIter: 'a,
        S: AsRef<str> + 'a,
    {
        names.into_iter().map(move |name| self.resolve(name.as_ref()))
    }
}

/// Log the not-found diagnostic for a zero-sized result
pub fn warn_if_missing(result: &SizeResult) {
    if !result.is_found() {
        warn!("{} element {} not found", result.name, result.item_type);
    }
}
