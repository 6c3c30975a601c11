//! Adapter interfaces for external systems.
//!
//! The only external system is the content mirror itself, which can be
//! asked for a file's size when the local catalog does not know it.

pub mod header_probe;

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::catalog::SIZE_BIAS;
use crate::core::ResolvedItem;
use crate::domain::ItemType;

// Re-export the HTTP probe
pub use header_probe::HeaderProbe;

/// Trait for remote size lookups
#[async_trait]
pub trait SizeProbe: Send + Sync {
    /// Human-readable probe name
    fn name(&self) -> &str;

    /// Size in bytes of the resource at `url`, 0 if it cannot be determined
    async fn content_length(&self, url: &str) -> Result<i64>;
}

/// Replace a catalog size with a probed one.
///
/// Only ZIM items are probed, and only when their catalog size is at most
/// the bias (a catalog entry of size 0) and the download URL is HTTP(S).
/// Module and map URLs are left alone.
pub async fn apply_probe(mut item: ResolvedItem, probe: &dyn SizeProbe) -> Result<ResolvedItem> {
    if !is_probeable(&item) {
        return Ok(item);
    }

    debug!(probe = probe.name(), url = %item.download_url, "Probing download size");
    item.result.size = probe.content_length(&item.download_url).await?;
    Ok(item)
}

fn is_probeable(item: &ResolvedItem) -> bool {
    let url = item.download_url.as_str();
    item.result.item_type == ItemType::Zim
        && item.result.size <= SIZE_BIAS
        && (url.starts_with("http://") || url.starts_with("https://"))
}
