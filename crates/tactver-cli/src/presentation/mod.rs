//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no domain transforms. View-model helpers
//! that need domain logic live next to their handler.

pub mod tables;

// Re-export commonly used items
pub use tables::{render_versions_table, separator, truncate_string};
