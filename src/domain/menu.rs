//! Menu definitions and the item kinds derived from them.
//!
//! A menu definition is the registry's record for one content item. Its
//! `intended_use` tag decides which catalog holds the item's size.

use serde::Deserialize;
use thiserror::Error;

use super::size::ItemType;
use crate::catalog::CatalogKind;

/// A content item as described by the menu-definition registry
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MenuDefinition {
    /// The registry's own name for the item (used for map lookups)
    #[serde(default)]
    pub name: Option<String>,

    /// Type tag: `html`, `zim`, `webroot`, ...
    pub intended_use: String,

    /// Module directory for `html` items
    #[serde(default)]
    pub moddir: Option<String>,

    /// ZIM perma_ref for `zim` items
    #[serde(default)]
    pub zim_name: Option<String>,
}

impl MenuDefinition {
    /// Create a definition with only the type tag set
    pub fn new(intended_use: impl Into<String>) -> Self {
        Self {
            name: None,
            intended_use: intended_use.into(),
            moddir: None,
            zim_name: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_moddir(mut self, moddir: impl Into<String>) -> Self {
        self.moddir = Some(moddir.into());
        self
    }

    pub fn with_zim_name(mut self, zim_name: impl Into<String>) -> Self {
        self.zim_name = Some(zim_name.into());
        self
    }
}

/// Errors turning a menu definition into an [`ItemKind`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("menu definition for '{item}' has intended_use '{intended_use}' but no '{field}' field")]
    MissingField {
        item: String,
        intended_use: String,
        field: &'static str,
    },
}

/// Where an item's size is looked up, with the identifier that catalog uses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    /// Offline-HTML module, keyed by module directory
    Module { moddir: String },

    /// ZIM archive, keyed by perma_ref
    Zim { zim_name: String },

    /// Map tile archive, keyed by the registry's own name
    Map { name: String },

    /// Unrecognized `intended_use`
    Unknown,
}

impl ItemKind {
    /// Map a definition to its kind.
    ///
    /// `item` is the registry key, used only in error messages.
    pub fn from_definition(item: &str, def: &MenuDefinition) -> Result<Self, ResolveError> {
        let missing = |field| ResolveError::MissingField {
            item: item.to_string(),
            intended_use: def.intended_use.clone(),
            field,
        };

        match def.intended_use.as_str() {
            "html" => def
                .moddir
                .clone()
                .map(|moddir| ItemKind::Module { moddir })
                .ok_or_else(|| missing("moddir")),
            "zim" => def
                .zim_name
                .clone()
                .map(|zim_name| ItemKind::Zim { zim_name })
                .ok_or_else(|| missing("zim_name")),
            "webroot" => def
                .name
                .clone()
                .map(|name| ItemKind::Map { name })
                .ok_or_else(|| missing("name")),
            _ => Ok(ItemKind::Unknown),
        }
    }

    /// The reported type
    pub fn item_type(&self) -> ItemType {
        match self {
            ItemKind::Module { .. } => ItemType::Module,
            ItemKind::Zim { .. } => ItemType::Zim,
            ItemKind::Map { .. } => ItemType::Map,
            ItemKind::Unknown => ItemType::Unknown,
        }
    }

    /// Catalog to read, paired with the lookup identifier
    pub fn catalog_lookup(&self) -> Option<(CatalogKind, &str)> {
        match self {
            ItemKind::Module { moddir } => Some((CatalogKind::Module, moddir)),
            ItemKind::Zim { zim_name } => Some((CatalogKind::Zim, zim_name)),
            ItemKind::Map { name } => Some((CatalogKind::Map, name)),
            ItemKind::Unknown => None,
        }
    }
}
