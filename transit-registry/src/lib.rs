//! In-memory transit network registry.
//!
//! Stations with multi-indexed lookup (id, coordinate, name), cached
//! orderings, nearest-station queries, and a region forest with
//! ancestor, descendant, and common-parent traversal.

pub mod domain;
pub mod regions;
pub mod registry;
pub mod repl;
pub mod stations;

pub use registry::TransitRegistry;
