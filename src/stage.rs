//! Growth Stage Calculator
//!
//! Maps elapsed whole days since planting to a named crop growth stage.
//! Stage ranges are inclusive on both ends and must not overlap.

use chrono::{Local, NaiveDate};
use serde::Serialize;

use crate::error::{Result, RiskError};

/// Named phase of the crop lifecycle, keyed by elapsed days since planting
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrowthStage {
    pub name: String,
    pub min_days: i64,
    pub max_days: i64,
}

impl GrowthStage {
    pub fn new(name: impl Into<String>, min_days: i64, max_days: i64) -> Self {
        GrowthStage {
            name: name.into(),
            min_days,
            max_days,
        }
    }

    pub fn contains(&self, elapsed_days: i64) -> bool {
        self.min_days <= elapsed_days && elapsed_days <= self.max_days
    }
}

/// Default stage table (days after planting)
const DEFAULT_STAGES: &[(&str, i64, i64)] = &[
    ("Germination", 0, 10),
    ("Seedling", 11, 25),
    ("Vegetative", 26, 60),
    ("Flowering", 61, 90),
    ("Fruiting", 91, 120),
    ("Maturity", 121, 150),
];

/// Ordered, non-overlapping stage table
#[derive(Debug, Clone)]
pub struct StageCalculator {
    stages: Vec<GrowthStage>,
}

impl Default for StageCalculator {
    fn default() -> Self {
        StageCalculator {
            stages: DEFAULT_STAGES
                .iter()
                .map(|&(name, min, max)| GrowthStage::new(name, min, max))
                .collect(),
        }
    }
}

impl StageCalculator {
    /// Build from a custom table, rejecting empty, inverted or overlapping stages
    pub fn new(stages: Vec<GrowthStage>) -> Result<Self> {
        if stages.is_empty() {
            return Err(RiskError::data_integrity("growth stage table is empty"));
        }
        for stage in &stages {
            if stage.min_days > stage.max_days {
                return Err(RiskError::data_integrity(format!(
                    "growth stage '{}' has min_days {} > max_days {}",
                    stage.name, stage.min_days, stage.max_days
                )));
            }
        }
        for (i, a) in stages.iter().enumerate() {
            for b in &stages[i + 1..] {
                if a.min_days <= b.max_days && b.min_days <= a.max_days {
                    return Err(RiskError::data_integrity(format!(
                        "growth stages '{}' and '{}' overlap",
                        a.name, b.name
                    )));
                }
            }
        }
        Ok(StageCalculator { stages })
    }

    pub fn stages(&self) -> &[GrowthStage] {
        &self.stages
    }

    /// Stage for a count of elapsed days
    ///
    /// Days outside every declared range (beyond the last stage, or negative
    /// for a future plantation date) fall back to the last declared stage.
    pub fn stage_for_days(&self, elapsed_days: i64) -> &GrowthStage {
        let last = &self.stages[self.stages.len() - 1];
        match self.stages.iter().find(|s| s.contains(elapsed_days)) {
            Some(stage) => stage,
            None => {
                if elapsed_days < 0 {
                    tracing::warn!(
                        "Plantation date is {} days in the future; falling back to stage '{}'",
                        -elapsed_days,
                        last.name
                    );
                }
                last
            }
        }
    }

    /// Stage name for a plantation date, measured against `reference_date`
    /// (today in local time when None)
    pub fn compute_stage(&self, plantation_date: NaiveDate, reference_date: Option<NaiveDate>) -> &str {
        let reference = reference_date.unwrap_or_else(|| Local::now().date_naive());
        &self.stage_for_days(elapsed_days(plantation_date, reference)).name
    }
}

/// Whole days from planting to the reference date (negative if planting is later)
pub fn elapsed_days(plantation_date: NaiveDate, reference_date: NaiveDate) -> i64 {
    reference_date
        .signed_duration_since(plantation_date)
        .num_days()
}

/// Parse a plantation date in `YYYY-MM-DD` form
pub fn parse_plantation_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|e| {
        RiskError::invalid_input(
            "plantationDate",
            format!("'{}' is not a valid YYYY-MM-DD calendar date ({})", value, e),
        )
    })
}
