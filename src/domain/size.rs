//! The per-item size answer.

use serde::Serialize;

/// Reported item type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemType {
    /// Offline-HTML module
    Module,

    /// ZIM archive
    Zim,

    /// Map tile archive
    Map,

    /// Not in the registry, or an unrecognized tag
    Unknown,
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemType::Module => write!(f, "module"),
            ItemType::Zim => write!(f, "zim"),
            ItemType::Map => write!(f, "map"),
            ItemType::Unknown => write!(f, "unknown"),
        }
    }
}

/// Size of one item, in bytes.
///
/// A size of 0 means the item was not found (or its catalog says 0).
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SizeResult {
    /// Catalog identifier, or the query name for unknown items
    pub name: String,

    #[serde(rename = "type")]
    pub item_type: ItemType,

    pub size: i64,
}

impl SizeResult {
    pub fn new(name: impl Into<String>, item_type: ItemType, size: i64) -> Self {
        Self {
            name: name.into(),
            item_type,
            size,
        }
    }

    /// Result for a name with nothing to look up
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::new(name, ItemType::Unknown, 0)
    }

    pub fn is_found(&self) -> bool {
        self.size != 0
    }
}

// Keeps the `type` key and lowercase type name in the CLI's debug line
impl std::fmt::Debug for SizeResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SizeResult")
            .field("name", &self.name)
            .field("type", &self.item_type.to_string())
            .field("size", &self.size)
            .finish()
    }
}
