//! Configuration for catalog and registry paths.
//!
//! Configuration sources (highest priority first):
//! 1. Command-line flags (applied by the CLI on top of this)
//! 2. Environment variables (IIAB_MENU_DEFS, IIAB_KIWIX_CATALOG,
//!    IIAB_OER2GO_CATALOG, IIAB_MAP_CATALOG)
//! 3. Config file (.iiab/item-size.yaml, then the user config dir)
//! 4. Defaults (see `paths`)
//!
//! Config file discovery:
//! - Searches current directory and parents for .iiab/item-size.yaml
//! - Falls back to <config_dir>/iiab-item-size/config.yaml
//! - Relative paths in a config file resolve against the file's directory

pub mod paths;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::catalog::CatalogPaths;

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

pub const ENV_MENU_DEFS: &str = "IIAB_MENU_DEFS";
pub const ENV_KIWIX_CATALOG: &str = "IIAB_KIWIX_CATALOG";
pub const ENV_OER2GO_CATALOG: &str = "IIAB_OER2GO_CATALOG";
pub const ENV_MAP_CATALOG: &str = "IIAB_MAP_CATALOG";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathsConfig {
    /// Menu definitions directory
    pub menu_defs: Option<String>,
    pub kiwix_catalog: Option<String>,
    pub oer2go_catalog: Option<String>,
    pub map_catalog: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Menu definitions directory
    pub menu_defs: PathBuf,
    /// Catalog file locations
    pub catalogs: CatalogPaths,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            menu_defs: PathBuf::from(paths::MENU_DEFS_DIR),
            catalogs: CatalogPaths::default(),
            config_file: None,
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".iiab").join("item-size.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let user_config = dirs::config_dir()?
        .join("iiab-item-size")
        .join("config.yaml");
    user_config.exists().then_some(user_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's directory
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
    }
}

/// Merge config file and environment over the defaults.
///
/// `env` is injected so the precedence rules can be tested without
/// touching the process environment.
fn merge(
    file: Option<(&Path, &ConfigFile)>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let mut resolved = ResolvedConfig::default();

    if let Some((config_path, config)) = file {
        let base = config_path.parent().unwrap_or(Path::new("."));
        let from_file = |value: &Option<String>| value.as_deref().map(|p| resolve_path(base, p));

        if let Some(path) = from_file(&config.paths.menu_defs) {
            resolved.menu_defs = path;
        }
        if let Some(path) = from_file(&config.paths.kiwix_catalog) {
            resolved.catalogs.zim = path;
        }
        if let Some(path) = from_file(&config.paths.oer2go_catalog) {
            resolved.catalogs.module = path;
        }
        if let Some(path) = from_file(&config.paths.map_catalog) {
            resolved.catalogs.map = path;
        }
        resolved.config_file = Some(config_path.to_path_buf());
    }

    if let Some(path) = env(ENV_MENU_DEFS) {
        resolved.menu_defs = PathBuf::from(path);
    }
    if let Some(path) = env(ENV_KIWIX_CATALOG) {
        resolved.catalogs.zim = PathBuf::from(path);
    }
    if let Some(path) = env(ENV_OER2GO_CATALOG) {
        resolved.catalogs.module = PathBuf::from(path);
    }
    if let Some(path) = env(ENV_MAP_CATALOG) {
        resolved.catalogs.map = PathBuf::from(path);
    }

    resolved
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    let env = |key: &str| std::env::var(key).ok();

    let resolved = match find_config_file() {
        Some(config_path) => {
            let config = load_config_file(&config_path)?;
            merge(Some((config_path.as_path(), &config)), env)
        }
        None => merge(None, env),
    };

    match &resolved.config_file {
        Some(path) => debug!(config_file = %path.display(), "Loaded config file"),
        None => debug!("No config file found, using defaults and environment"),
    }
    Ok(resolved)
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}
