//! Catalog loading from JSON
//!
//! File layout:
//! ```json
//! {
//!   "pests":    [{ "name": "...", "activeMonths": ["March"], "conditions": [{ "temperature": [28, 32], "humidity": [70, 80] }] }],
//!   "diseases": [ ... ]
//! }
//! ```
//! Category comes from the list an entry sits in.

use serde::Deserialize;
use std::path::Path;

use super::registry::SpeciesCatalog;
use super::species::{ConditionPairs, SpeciesKind, SpeciesProfile};
use crate::error::Result;
use crate::utils::Month;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SpeciesRecord {
    name: String,
    active_months: Vec<Month>,
    #[serde(default)]
    conditions: ConditionPairs,
    #[serde(default)]
    description: String,
    #[serde(default)]
    image: Option<String>,
}

impl SpeciesRecord {
    fn into_profile(self, kind: SpeciesKind) -> SpeciesProfile {
        SpeciesProfile {
            kind,
            name: self.name,
            active_months: self.active_months,
            conditions: self.conditions,
            description: self.description,
            image: self.image,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    pests: Vec<SpeciesRecord>,
    #[serde(default)]
    diseases: Vec<SpeciesRecord>,
}

impl SpeciesCatalog {
    /// Parse and validate a catalog from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;

        let profiles = file
            .pests
            .into_iter()
            .map(|r| r.into_profile(SpeciesKind::Pest))
            .chain(
                file.diseases
                    .into_iter()
                    .map(|r| r.into_profile(SpeciesKind::Disease)),
            );

        let catalog = Self::new(profiles)?;
        tracing::info!(
            "Loaded species catalog: {} pests, {} diseases",
            catalog.pests().len(),
            catalog.diseases().len()
        );
        Ok(catalog)
    }

    /// Read, parse and validate a catalog file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!("Reading species catalog from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RiskError;

    const SAMPLE: &str = r#"{
        "pests": [
            {
                "name": "Thrips",
                "activeMonths": ["March", "april"],
                "conditions": [
                    { "temperature": [28, 32], "humidity": [70, 80] },
                    { "temperature": [20, 24], "humidity": [40, 50] }
                ],
                "description": "Rasping insects that scar leaves.",
                "image": "images/thrips.jpg"
            }
        ],
        "diseases": [
            {
                "name": "Powdery Mildew",
                "activeMonths": ["June"],
                "conditions": [{ "temperature": [15, 27], "humidity": [40, 70] }]
            }
        ]
    }"#;

    #[test]
    fn test_parse_sample() {
        let catalog = SpeciesCatalog::from_json_str(SAMPLE).unwrap();
        let thrips = catalog.get(SpeciesKind::Pest, "Thrips").unwrap();
        assert_eq!(thrips.active_months, vec![Month::March, Month::April]);
        assert_eq!(thrips.conditions.len(), 2);
        assert_eq!(thrips.image.as_deref(), Some("images/thrips.jpg"));

        let mildew = catalog.get(SpeciesKind::Disease, "Powdery Mildew").unwrap();
        assert_eq!(mildew.kind, SpeciesKind::Disease);
        assert!(mildew.description.is_empty());
    }

    #[test]
    fn test_missing_ranges_is_integrity_error() {
        let json = r#"{ "pests": [{ "name": "Aphids", "activeMonths": ["May"] }] }"#;
        let err = SpeciesCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, RiskError::DataIntegrity { .. }));
    }

    #[test]
    fn test_unknown_month_is_parse_error() {
        let json = r#"{ "pests": [{ "name": "Aphids", "activeMonths": ["Maytember"],
            "conditions": [{ "temperature": [1, 2], "humidity": [1, 2] }] }] }"#;
        let err = SpeciesCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, RiskError::CatalogParse(_)));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn test_misspelled_active_months_rejected() {
        let json = r#"{ "pests": [{ "name": "Aphids", "activeMonth": ["May"],
            "conditions": [{ "temperature": [18, 25], "humidity": [60, 80] }] }] }"#;
        let err = SpeciesCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, RiskError::CatalogParse(_)));
        assert!(err.is_data_integrity());
    }

    #[test]
    fn test_missing_active_months_rejected() {
        let json = r#"{ "diseases": [{ "name": "Blast",
            "conditions": [{ "temperature": [20, 28], "humidity": [90, 100] }] }] }"#;
        let err = SpeciesCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, RiskError::CatalogParse(_)));
    }

    #[test]
    fn test_abbreviated_month_in_catalog_rejected() {
        let json = r#"{ "pests": [{ "name": "Aphids", "activeMonths": ["May", "jun"],
            "conditions": [{ "temperature": [18, 25], "humidity": [60, 80] }] }] }"#;
        assert!(SpeciesCatalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SpeciesCatalog::from_path("/nonexistent/catalog.json").unwrap_err();
        assert!(matches!(err, RiskError::Io(_)));
    }
}
