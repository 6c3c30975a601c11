//! Core lookup logic.
//!
//! This module contains:
//! - SizeResolver: registry lookup and catalog dispatch

pub mod resolver;

// Re-export commonly used types
pub use resolver::{warn_if_missing, ResolvedItem, SizeResolver};
