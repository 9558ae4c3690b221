//! Species Catalog
//!
//! Immutable registry of pest and disease profiles. Built once, validated on
//! construction, then shared read-only by every assessment.

use rustc_hash::FxHashMap;

use super::species::{SpeciesKind, SpeciesProfile};
use crate::error::{Result, RiskError};

/// Validated, read-only set of species profiles
///
/// Declaration order is preserved; assessment buckets rely on it.
#[derive(Debug, Clone)]
pub struct SpeciesCatalog {
    pests: Vec<SpeciesProfile>,
    diseases: Vec<SpeciesProfile>,

    /// (kind, name) → index into `pests` or `diseases`
    index: FxHashMap<(SpeciesKind, String), usize>,
}

impl SpeciesCatalog {
    /// Build a catalog from profiles in declaration order
    ///
    /// Any malformed entry or duplicate name within a kind rejects the whole
    /// catalog with `DataIntegrity`.
    pub fn new(profiles: impl IntoIterator<Item = SpeciesProfile>) -> Result<Self> {
        let mut pests = Vec::new();
        let mut diseases = Vec::new();
        let mut index = FxHashMap::default();

        for profile in profiles {
            if let Some(defect) = profile.integrity_defect() {
                return Err(RiskError::data_integrity(defect));
            }

            let bucket = match profile.kind {
                SpeciesKind::Pest => &mut pests,
                SpeciesKind::Disease => &mut diseases,
            };

            let key = (profile.kind, profile.name.clone());
            if index.contains_key(&key) {
                return Err(RiskError::data_integrity(format!(
                    "duplicate {} name '{}'",
                    profile.kind, profile.name
                )));
            }
            index.insert(key, bucket.len());
            bucket.push(profile);
        }

        Ok(SpeciesCatalog {
            pests,
            diseases,
            index,
        })
    }

    pub fn pests(&self) -> &[SpeciesProfile] {
        &self.pests
    }

    pub fn diseases(&self) -> &[SpeciesProfile] {
        &self.diseases
    }

    pub fn profiles(&self, kind: SpeciesKind) -> &[SpeciesProfile] {
        match kind {
            SpeciesKind::Pest => &self.pests,
            SpeciesKind::Disease => &self.diseases,
        }
    }

    /// Look up a profile for display detail (image, description, active months)
    pub fn get(&self, kind: SpeciesKind, name: &str) -> Option<&SpeciesProfile> {
        let idx = *self.index.get(&(kind, name.to_string()))?;
        self.profiles(kind).get(idx)
    }

    pub fn len(&self) -> usize {
        self.pests.len() + self.diseases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Re-check every entry; used before trusting a catalog handed in by a caller
    pub fn verify(&self) -> Result<()> {
        for (kind, profiles) in [
            (SpeciesKind::Pest, &self.pests),
            (SpeciesKind::Disease, &self.diseases),
        ] {
            for (idx, profile) in profiles.iter().enumerate() {
                if profile.kind != kind {
                    return Err(RiskError::data_integrity(format!(
                        "'{}' is filed under {} but declared as {}",
                        profile.name, kind, profile.kind
                    )));
                }
                if let Some(defect) = profile.integrity_defect() {
                    return Err(RiskError::data_integrity(defect));
                }
                if self.index.get(&(kind, profile.name.clone())) != Some(&idx) {
                    return Err(RiskError::data_integrity(format!(
                        "duplicate {} name '{}'",
                        kind, profile.name
                    )));
                }
            }
        }
        Ok(())
    }
}
