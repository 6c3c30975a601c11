//! iiab-item-size - size lookup for IIAB content items
//!
//! Resolves the download size of a named content item (a ZIM archive,
//! an offline-HTML module, or a map tile archive) from the catalogs
//! IIAB keeps under `/etc/iiab`.
//!
//! # Architecture
//!
//! - The menu-definition registry is loaded once and injected into the resolver
//! - Each definition's `intended_use` selects one of three catalogs
//! - The catalog's raw size is converted to bytes with a fixed `+1023` bias
//!
//! # Modules
//!
//! - `adapters`: Optional HTTP header probe
//! - `catalog`: Catalog readers (ZIM, module, map)
//! - `config`: Path configuration
//! - `core`: Size resolver
//! - `domain`: Data structures (MenuDefinition, ItemKind, SizeResult)
//! - `registry`: Menu-definition registry
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Size of a single item
//! iiab-item-size wikipedia_for_schools
//!
//! # Several items, as JSON
//! iiab-item-size --json en-wikipedia en-osm-omt-min
//! ```

pub mod adapters;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod registry;

// Re-export main types at crate root for convenience
pub use crate::catalog::{CatalogEntry, CatalogError, CatalogKind, CatalogPaths};
pub use crate::core::{ResolvedItem, SizeResolver};
pub use crate::domain::{ItemKind, ItemType, MenuDefinition, ResolveError, SizeResult};
pub use crate::registry::MenuRegistry;
