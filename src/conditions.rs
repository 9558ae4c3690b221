//! Current Conditions
//!
//! Snapshot of month, temperature and humidity supplied by the weather
//! collaborator. Validated once at the boundary; immutable afterwards.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RiskError};
use crate::utils::Month;

/// Physically sane air temperature bounds (°C)
pub const MIN_TEMPERATURE_C: f64 = -90.0;
pub const MAX_TEMPERATURE_C: f64 = 60.0;

/// Collaborator payload before validation
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawConditions {
    pub month: String,
    pub temperature_celsius: f64,
    pub humidity_percent: f64,
}

/// Validated current-conditions snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentConditions {
    month: Month,
    temperature_celsius: f64,
    humidity_percent: f64,
}

impl CurrentConditions {
    /// Validate a snapshot; out-of-range readings are rejected, never evaluated
    pub fn new(month: Month, temperature_celsius: f64, humidity_percent: f64) -> Result<Self> {
        if !temperature_celsius.is_finite()
            || !(MIN_TEMPERATURE_C..=MAX_TEMPERATURE_C).contains(&temperature_celsius)
        {
            return Err(RiskError::invalid_input(
                "temperatureCelsius",
                format!(
                    "must be within [{}, {}], got {}",
                    MIN_TEMPERATURE_C, MAX_TEMPERATURE_C, temperature_celsius
                ),
            ));
        }
        if !humidity_percent.is_finite() || !(0.0..=100.0).contains(&humidity_percent) {
            return Err(RiskError::invalid_input(
                "humidityPercent",
                format!("must be within [0, 100], got {}", humidity_percent),
            ));
        }

        Ok(CurrentConditions {
            month,
            temperature_celsius,
            humidity_percent,
        })
    }

    /// Validate the collaborator payload, including the month name
    pub fn from_raw(raw: &RawConditions) -> Result<Self> {
        let month = Month::parse(&raw.month)?;
        Self::new(month, raw.temperature_celsius, raw.humidity_percent)
    }

    /// Parse and validate a JSON payload `{month, temperatureCelsius, humidityPercent}`
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawConditions = serde_json::from_str(json)
            .map_err(|e| RiskError::invalid_input("currentConditions", e.to_string()))?;
        Self::from_raw(&raw)
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn temperature_celsius(&self) -> f64 {
        self.temperature_celsius
    }

    pub fn humidity_percent(&self) -> f64 {
        self.humidity_percent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_snapshot() {
        let c = CurrentConditions::new(Month::March, 30.0, 75.0).unwrap();
        assert_eq!(c.month(), Month::March);
        assert_eq!(c.temperature_celsius(), 30.0);
        assert_eq!(c.humidity_percent(), 75.0);
    }

    #[test]
    fn test_humidity_bounds() {
        assert!(CurrentConditions::new(Month::March, 30.0, 0.0).is_ok());
        assert!(CurrentConditions::new(Month::March, 30.0, 100.0).is_ok());
        assert!(CurrentConditions::new(Month::March, 30.0, 100.5).is_err());
        assert!(CurrentConditions::new(Month::March, 30.0, -1.0).is_err());
        assert!(CurrentConditions::new(Month::March, 30.0, f64::NAN).is_err());
    }

    #[test]
    fn test_temperature_bounds() {
        assert!(CurrentConditions::new(Month::March, -90.0, 50.0).is_ok());
        assert!(CurrentConditions::new(Month::March, 61.0, 50.0).is_err());
        assert!(CurrentConditions::new(Month::March, f64::INFINITY, 50.0).is_err());
    }

    #[test]
    fn test_from_json() {
        let c = CurrentConditions::from_json_str(
            r#"{"month": "june", "temperatureCelsius": 31.5, "humidityPercent": 82}"#,
        )
        .unwrap();
        assert_eq!(c.month(), Month::June);

        let err = CurrentConditions::from_json_str(
            r#"{"month": "Juneuary", "temperatureCelsius": 31.5, "humidityPercent": 82}"#,
        )
        .unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput { ref field, .. } if field == "month"));

        let err = CurrentConditions::from_json_str(r#"{"month": "June"}"#).unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput { .. }));
    }

    #[test]
    fn test_serializes_with_display_month() {
        let c = CurrentConditions::new(Month::March, 30.0, 75.0).unwrap();
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["month"], "March");
        assert_eq!(json["humidityPercent"], 75.0);
    }
}
