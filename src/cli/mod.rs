//! Command-line interface for iiab-item-size.
//!
//! Resolves one or more item names and prints the results on a single
//! line. The exit status is 0 whether or not the items were found; only
//! unreadable registries and catalogs end the process with an error.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::adapters::{apply_probe, HeaderProbe};
use crate::config::{self, ResolvedConfig};
use crate::core::{warn_if_missing, SizeResolver};
use crate::domain::SizeResult;
use crate::registry::MenuRegistry;

/// iiab-item-size - Get size for item
#[derive(Parser, Debug)]
#[command(name = "iiab-item-size")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Item name(s), as keyed in the menu definitions
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Ask the mirror for sizes the catalog does not know (HTTP HEAD)
    #[arg(long)]
    pub probe_headers: bool,

    /// Menu definitions directory
    #[arg(long)]
    pub menu_defs: Option<PathBuf>,

    /// Kiwix ZIM catalog
    #[arg(long)]
    pub kiwix_catalog: Option<PathBuf>,

    /// OER2Go module catalog
    #[arg(long)]
    pub oer2go_catalog: Option<PathBuf>,

    /// Map tile catalog
    #[arg(long)]
    pub map_catalog: Option<PathBuf>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        println!("{}", self.run().await?);
        Ok(())
    }

    /// Resolve the requested names and render the output line
    pub async fn run(&self) -> Result<String> {
        let config = self.apply_overrides(config::config()?.clone());

        let registry = MenuRegistry::load_dir(&config.menu_defs)?;
        let resolver = SizeResolver::new(registry, config.catalogs);

        let results = if self.probe_headers {
            probe_all(&resolver, &self.names).await?
        } else {
            resolver.resolve_all(&self.names).collect::<Result<Vec<_>>>()?
        };

        render(&results, self.json)
    }

    /// Layer command-line paths over the loaded configuration
    fn apply_overrides(&self, mut config: ResolvedConfig) -> ResolvedConfig {
        if let Some(path) = &self.menu_defs {
            config.menu_defs = path.clone();
        }
        if let Some(path) = &self.kiwix_catalog {
            config.catalogs.zim = path.clone();
        }
        if let Some(path) = &self.oer2go_catalog {
            config.catalogs.module = path.clone();
        }
        if let Some(path) = &self.map_catalog {
            config.catalogs.map = path.clone();
        }
        config
    }
}

/// Resolve names in order, probing the mirror for unknown sizes
async fn probe_all(resolver: &SizeResolver, names: &[String]) -> Result<Vec<SizeResult>> {
    let probe = HeaderProbe::new();
    let mut results = Vec::with_capacity(names.len());

    for name in names {
        let item = resolver.resolve_entry(name)?;
        let item = apply_probe(item, &probe)
            .await
            .with_context(|| format!("Failed to probe size of '{}'", name))?;
        warn_if_missing(&item.result);
        results.push(item.result);
    }

    Ok(results)
}

/// Format results for stdout
fn render(results: &[SizeResult], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(results)?)
    } else {
        Ok(format!("content {:?}", results))
    }
}
