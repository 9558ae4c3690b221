//! Engine configuration from environment variables
//!
//! - `CATALOG_PATH`: JSON species catalog (default: embedded catalog)
//! - `MATCH_MODE`: `independent` (default) or `joint`
//! - `REFERENCE_DATE`: `YYYY-MM-DD` override for today's date

use chrono::NaiveDate;
use std::path::PathBuf;
use std::sync::Arc;

use crate::assessment::RiskEngine;
use crate::catalog::{builtin_catalog, SpeciesCatalog};
use crate::classifier::MatchMode;
use crate::error::{Result, RiskError};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EngineConfig {
    pub catalog_path: Option<PathBuf>,
    pub match_mode: MatchMode,
    pub reference_date: Option<NaiveDate>,
}

impl EngineConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let catalog_path = get("CATALOG_PATH").map(PathBuf::from);

        let match_mode = match get("MATCH_MODE") {
            Some(value) => MatchMode::parse(&value)?,
            None => MatchMode::default(),
        };

        let reference_date = get("REFERENCE_DATE")
            .map(|value| {
                NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
                    RiskError::invalid_input(
                        "REFERENCE_DATE",
                        format!("'{}' is not a valid YYYY-MM-DD date ({})", value, e),
                    )
                })
            })
            .transpose()?;

        Ok(EngineConfig {
            catalog_path,
            match_mode,
            reference_date,
        })
    }

    /// Load the configured catalog (embedded one when no path is set)
    pub fn load_catalog(&self) -> Result<SpeciesCatalog> {
        match &self.catalog_path {
            Some(path) => SpeciesCatalog::from_path(path),
            None => builtin_catalog(),
        }
    }

    /// Build a ready-to-use engine from this configuration
    pub fn build_engine(&self) -> Result<RiskEngine> {
        let catalog = Arc::new(self.load_catalog()?);
        Ok(RiskEngine::new(catalog)?
            .with_match_mode(self.match_mode)
            .with_reference_date(self.reference_date))
    }
}
