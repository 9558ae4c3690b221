//! Risk Classifier
//!
//! Decides the risk tier of one species profile under the current conditions.
//!
//! Precedence (first rule wins):
//! 1. month ∧ temperature ∧ humidity → High
//! 2. month ∧ (temperature ∨ humidity) → Moderate
//! 3. ¬month ∧ temperature ∧ humidity → Low
//! 4. otherwise → unclassified (None)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::{SpeciesKind, SpeciesProfile};
use crate::conditions::CurrentConditions;
use crate::error::{Result, RiskError};
use crate::utils::{any_contains, nearest_distance};

/// Severity tier, ordered most severe first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    High,
    Moderate,
    Low,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 3] = [RiskLevel::High, RiskLevel::Moderate, RiskLevel::Low];

    pub fn display_text(&self) -> &'static str {
        match self {
            RiskLevel::High => "High",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::Low => "Low",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_text())
    }
}

/// How temperature and humidity are combined across a profile's condition pairs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Temperature and humidity each match any declared range, possibly from
    /// different pairs
    #[default]
    Independent,

    /// Temperature and humidity must both fall inside the same declared pair
    Joint,
}

impl MatchMode {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "independent" => Ok(MatchMode::Independent),
            "joint" => Ok(MatchMode::Joint),
            other => Err(RiskError::invalid_input(
                "matchMode",
                format!("expected 'independent' or 'joint', got '{}'", other),
            )),
        }
    }
}

/// Predicate outcome for one species, kept for dashboard explanations
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRisk {
    pub kind: SpeciesKind,
    pub name: String,
    pub level: RiskLevel,
    pub month_match: bool,
    pub temperature_match: bool,
    pub humidity_match: bool,

    /// °C to the nearest declared temperature range (0 when inside)
    pub temperature_gap: f64,

    /// Percentage points to the nearest declared humidity range (0 when inside)
    pub humidity_gap: f64,
}

/// Stateless tier classifier
#[derive(Debug, Clone, Copy, Default)]
pub struct RiskClassifier {
    mode: MatchMode,
}

impl RiskClassifier {
    pub fn new(mode: MatchMode) -> Self {
        RiskClassifier { mode }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Risk tier for a profile, or None when unclassified
    pub fn classify(&self, profile: &SpeciesProfile, conditions: &CurrentConditions) -> Option<RiskLevel> {
        let month_match = profile.is_active_in(conditions.month());
        let temperature_match =
            any_contains(profile.temperature_ranges(), conditions.temperature_celsius());
        let humidity_match = any_contains(profile.humidity_ranges(), conditions.humidity_percent());
        let environment_match = match self.mode {
            MatchMode::Independent => temperature_match && humidity_match,
            MatchMode::Joint => profile.conditions.iter().any(|pair| {
                pair.matches_jointly(conditions.temperature_celsius(), conditions.humidity_percent())
            }),
        };

        if month_match && environment_match {
            Some(RiskLevel::High)
        } else if month_match && (temperature_match || humidity_match) {
            Some(RiskLevel::Moderate)
        } else if !month_match && environment_match {
            Some(RiskLevel::Low)
        } else {
            None
        }
    }

    /// Classification with predicate detail; None when unclassified
    pub fn explain(&self, profile: &SpeciesProfile, conditions: &CurrentConditions) -> Option<SpeciesRisk> {
        let level = self.classify(profile, conditions)?;
        let temperature = conditions.temperature_celsius();
        let humidity = conditions.humidity_percent();

        Some(SpeciesRisk {
            kind: profile.kind,
            name: profile.name.clone(),
            level,
            month_match: profile.is_active_in(conditions.month()),
            temperature_match: any_contains(profile.temperature_ranges(), temperature),
            humidity_match: any_contains(profile.humidity_ranges(), humidity),
            temperature_gap: nearest_distance(profile.temperature_ranges(), temperature).unwrap_or(0.0),
            humidity_gap: nearest_distance(profile.humidity_ranges(), humidity).unwrap_or(0.0),
        })
    }
}
