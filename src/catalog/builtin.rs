//! Built-in species catalog
//!
//! The default registry ships inside the binary so the engine works without
//! any data directory. Override with `CATALOG_PATH` (see `config`).

use super::registry::SpeciesCatalog;
use crate::error::Result;

const BUILTIN_CATALOG_JSON: &str = include_str!("../../data/species_catalog.json");

/// Parse and validate the embedded catalog
pub fn builtin_catalog() -> Result<SpeciesCatalog> {
    SpeciesCatalog::from_json_str(BUILTIN_CATALOG_JSON)
}
