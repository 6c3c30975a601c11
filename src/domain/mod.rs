//! Domain types for item size lookup.
//!
//! This module contains the core data structures:
//! - MenuDefinition: A registry entry for a content item
//! - ItemKind: The catalog an item's size comes from
//! - SizeResult: The per-item answer

pub mod menu;
pub mod size;

// Re-export commonly used types
pub use menu::{ItemKind, MenuDefinition, ResolveError};
pub use size::{ItemType, SizeResult};
