//! Species profile definitions
//!
//! Pests and diseases share one shape so the classifier has a single code path.
//! The category lives in `SpeciesKind`, not in separate record types.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;

use crate::conditions::{MAX_TEMPERATURE_C, MIN_TEMPERATURE_C};
use crate::utils::{ClosedRange, Month};

/// Threat category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SpeciesKind {
    Pest,
    Disease,
}

impl SpeciesKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            SpeciesKind::Pest => "pest",
            SpeciesKind::Disease => "disease",
        }
    }
}

impl fmt::Display for SpeciesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One declared favourable envelope: a temperature range paired with a humidity range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConditionPair {
    /// Favourable temperature (°C)
    pub temperature: ClosedRange,

    /// Favourable relative humidity (%)
    pub humidity: ClosedRange,
}

impl ConditionPair {
    pub fn new(temperature: (f64, f64), humidity: (f64, f64)) -> Self {
        ConditionPair {
            temperature: ClosedRange::new(temperature.0, temperature.1),
            humidity: ClosedRange::new(humidity.0, humidity.1),
        }
    }

    /// Both readings fall inside this pair's ranges
    pub fn matches_jointly(&self, temperature_c: f64, humidity_pct: f64) -> bool {
        self.temperature.contains(temperature_c) && self.humidity.contains(humidity_pct)
    }
}

/// Most profiles declare one or two envelopes
pub type ConditionPairs = SmallVec<[ConditionPair; 2]>;

/// Static seasonal and environmental risk factors for one pest or disease
#[derive(Debug, Clone, PartialEq)]
pub struct SpeciesProfile {
    pub kind: SpeciesKind,

    /// Unique within its kind
    pub name: String,

    /// Months in which the species is seasonally active
    pub active_months: Vec<Month>,

    /// Favourable envelopes; never empty in a validated catalog
    pub conditions: ConditionPairs,

    // Display detail for the dashboard join, not used in classification
    pub description: String,
    pub image: Option<String>,
}

impl SpeciesProfile {
    pub fn new(
        kind: SpeciesKind,
        name: impl Into<String>,
        active_months: Vec<Month>,
        conditions: impl IntoIterator<Item = ConditionPair>,
    ) -> Self {
        SpeciesProfile {
            kind,
            name: name.into(),
            active_months,
            conditions: conditions.into_iter().collect(),
            description: String::new(),
            image: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    pub fn is_active_in(&self, month: Month) -> bool {
        self.active_months.contains(&month)
    }

    pub fn temperature_ranges(&self) -> impl Iterator<Item = &ClosedRange> {
        self.conditions.iter().map(|c| &c.temperature)
    }

    pub fn humidity_ranges(&self) -> impl Iterator<Item = &ClosedRange> {
        self.conditions.iter().map(|c| &c.humidity)
    }

    /// Describe the first integrity defect in this profile, if any
    pub fn integrity_defect(&self) -> Option<String> {
        if self.name.trim().is_empty() {
            return Some(format!("{} entry with empty name", self.kind));
        }
        if self.conditions.is_empty() {
            return Some(format!(
                "{} '{}' declares no temperature/humidity ranges",
                self.kind, self.name
            ));
        }
        for (idx, pair) in self.conditions.iter().enumerate() {
            if !pair.temperature.is_well_formed() {
                return Some(format!(
                    "{} '{}' condition {} has malformed temperature range [{}, {}]",
                    self.kind, self.name, idx, pair.temperature.min, pair.temperature.max
                ));
            }
            if !pair.humidity.is_well_formed() {
                return Some(format!(
                    "{} '{}' condition {} has malformed humidity range [{}, {}]",
                    self.kind, self.name, idx, pair.humidity.min, pair.humidity.max
                ));
            }
            // Ranges outside what a valid reading can take would never match
            if pair.humidity.min < 0.0 || pair.humidity.max > 100.0 {
                return Some(format!(
                    "{} '{}' condition {} has humidity range [{}, {}] outside [0, 100]",
                    self.kind, self.name, idx, pair.humidity.min, pair.humidity.max
                ));
            }
            if pair.temperature.min < MIN_TEMPERATURE_C || pair.temperature.max > MAX_TEMPERATURE_C {
                return Some(format!(
                    "{} '{}' condition {} has temperature range [{}, {}] outside [{}, {}]",
                    self.kind,
                    self.name,
                    idx,
                    pair.temperature.min,
                    pair.temperature.max,
                    MIN_TEMPERATURE_C,
                    MAX_TEMPERATURE_C
                ));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thrips() -> SpeciesProfile {
        SpeciesProfile::new(
            SpeciesKind::Pest,
            "Thrips",
            vec![Month::March, Month::April],
            [ConditionPair::new((28.0, 32.0), (70.0, 80.0))],
        )
    }

    #[test]
    fn test_active_months() {
        let profile = thrips();
        assert!(profile.is_active_in(Month::March));
        assert!(!profile.is_active_in(Month::June));
    }

    #[test]
    fn test_display_detail_builders() {
        let profile = thrips()
            .with_description("Slender rasping insects.")
            .with_image("images/pests/thrips.jpg");
        assert_eq!(profile.description, "Slender rasping insects.");
        assert_eq!(profile.image.as_deref(), Some("images/pests/thrips.jpg"));
        assert!(profile.integrity_defect().is_none());
    }

    #[test]
    fn test_joint_match() {
        let pair = ConditionPair::new((28.0, 32.0), (70.0, 80.0));
        assert!(pair.matches_jointly(28.0, 80.0));
        assert!(!pair.matches_jointly(30.0, 50.0));
    }

    #[test]
    fn test_integrity_defects() {
        assert!(thrips().integrity_defect().is_none());

        let mut no_ranges = thrips();
        no_ranges.conditions.clear();
        assert!(no_ranges.integrity_defect().unwrap().contains("no temperature/humidity ranges"));

        let mut inverted = thrips();
        inverted.conditions[0].humidity = ClosedRange::new(90.0, 10.0);
        assert!(inverted.integrity_defect().unwrap().contains("malformed humidity range"));

        let mut saturated = thrips();
        saturated.conditions[0].humidity = ClosedRange::new(160.0, 180.0);
        assert!(saturated.integrity_defect().unwrap().contains("outside [0, 100]"));

        let mut negative = thrips();
        negative.conditions[0].humidity = ClosedRange::new(-5.0, 40.0);
        assert!(negative.integrity_defect().is_some());

        let mut scorching = thrips();
        scorching.conditions[0].temperature = ClosedRange::new(50.0, 75.0);
        assert!(scorching.integrity_defect().unwrap().contains("temperature range"));

        let mut full_span = thrips();
        full_span.conditions[0].humidity = ClosedRange::new(0.0, 100.0);
        assert!(full_span.integrity_defect().is_none());

        let mut unnamed = thrips();
        unnamed.name = "  ".to_string();
        assert!(unnamed.integrity_defect().is_some());
    }
}
