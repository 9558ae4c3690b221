//! Species Catalog
//!
//! Static registry of pest and disease profiles consulted by the classifier
//! and joined by the dashboard for display detail.
//!
//! ## Architecture
//! - `species.rs` - SpeciesProfile / ConditionPair shared by pests and diseases
//! - `registry.rs` - SpeciesCatalog: validated, immutable, name-indexed
//! - `loader.rs` - JSON catalog parsing
//! - `builtin.rs` - Embedded default catalog

pub mod species;
pub mod registry;
pub mod loader;
pub mod builtin;

// Re-export public API
pub use species::{ConditionPair, ConditionPairs, SpeciesKind, SpeciesProfile};
pub use registry::SpeciesCatalog;
pub use builtin::builtin_catalog;
