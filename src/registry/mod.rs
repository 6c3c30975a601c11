//! Menu-definition registry.
//!
//! Every content item the IIAB menu knows about has a JSON definition
//! file in the menu-defs directory, named `<item>.json`. The registry
//! is loaded once at startup and handed to the resolver; it is never
//! reloaded or mutated afterwards.
//!
//! # Storage Layout
//!
//! ```text
//! menu-defs/
//! ├── en-wikipedia_for_schools.json   # {"intended_use": "zim", "zim_name": ...}
//! ├── en-phet.json                    # {"intended_use": "html", "moddir": ...}
//! └── en-osm-omt-min.json             # {"intended_use": "webroot", "name": ...}
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::domain::MenuDefinition;

/// Name-keyed menu definitions
#[derive(Debug, Clone, Default)]
pub struct MenuRegistry {
    defs: HashMap<String, MenuDefinition>,
}

impl MenuRegistry {
    /// Build a registry from definitions already in memory
    pub fn from_defs(defs: HashMap<String, MenuDefinition>) -> Self {
        Self { defs }
    }

    /// Load every `*.json` file in `dir`, keyed by file stem.
    ///
    /// Files are read in name order. A definition that cannot be read or
    /// parsed is skipped with a warning; a missing directory is an error.
    pub fn load_dir(dir: &Path) -> Result<Self> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read menu definitions: {}", dir.display()))?;

        let mut files: Vec<_> = entries
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.is_file() && path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        files.sort();

        let mut defs = HashMap::with_capacity(files.len());
        for path in files {
            let Some(name) = path.file_stem().and_then(|s| s.to_str()) else {
                warn!(path = %path.display(), "Skipping menu definition with non-UTF-8 name");
                continue;
            };

            let parsed = std::fs::read_to_string(&path)
                .map_err(anyhow::Error::from)
                .and_then(|content| Ok(serde_json::from_str::<MenuDefinition>(&content)?));

            match parsed {
                Ok(def) => {
                    defs.insert(name.to_string(), def);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Skipping unreadable menu definition"),
            }
        }

        debug!(count = defs.len(), dir = %dir.display(), "Loaded menu definitions");
        Ok(Self { defs })
    }

    /// All definitions, keyed by item name
    pub fn get_all_menu_defs(&self) -> &HashMap<String, MenuDefinition> {
        &self.defs
    }

    /// Get a definition by item name
    pub fn get(&self, name: &str) -> Option<&MenuDefinition> {
        self.defs.get(name)
    }

    /// Get the number of definitions
    pub fn len(&self) -> usize {
        self.defs.len()
    }

    /// Check if the registry is empty
    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_dir_keys_by_file_stem() {
        let temp = TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("en-wikipedia.json"),
            r#"{"intended_use": "zim", "zim_name": "wikipedia_en_all"}"#,
        )
        .unwrap();
        std::fs::write(
            temp.path().join("en-phet.json"),
            r#"{"intended_use": "html", "moddir": "en-phet", "title": "PhET"}"#,
        )
        .unwrap();

        let registry = MenuRegistry::load_dir(temp.path()).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get("en-wikipedia").unwrap().zim_name.as_deref(),
            Some("wikipedia_en_all")
        );
        assert_eq!(registry.get("en-phet").unwrap().intended_use, "html");
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn test_load_dir_skips_bad_and_non_json_files() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("broken.json"), "{not json").unwrap();
        std::fs::write(temp.path().join("untagged.json"), r#"{"moddir": "x"}"#).unwrap();
        std::fs::write(temp.path().join("notes.txt"), "ignore me").unwrap();
        std::fs::write(
            temp.path().join("good.json"),
            r#"{"intended_use": "webroot", "name": "osm"}"#,
        )
        .unwrap();

        let registry = MenuRegistry::load_dir(temp.path()).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.get("good").is_some());
    }

    #[test]
    fn test_load_missing_dir_fails() {
        let temp = TempDir::new().unwrap();
        assert!(MenuRegistry::load_dir(&temp.path().join("nope")).is_err());
    }

    #[test]
    fn test_from_defs() {
        let registry = MenuRegistry::from_defs(
            [("a".to_string(), MenuDefinition::new("zim").with_zim_name("a_zim"))]
                .into_iter()
                .collect(),
        );
        assert_eq!(registry.get_all_menu_defs().len(), 1);
        assert!(!registry.is_empty());
    }
}
