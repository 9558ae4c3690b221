//! Assessment Orchestrator
//!
//! Drives the stage calculator and classifier across the whole catalog and
//! assembles the immutable result consumed by the dashboard.

use chrono::{Local, NaiveDate};
use rayon::prelude::*;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::catalog::{SpeciesCatalog, SpeciesKind, SpeciesProfile};
use crate::classifier::{MatchMode, RiskClassifier, RiskLevel, SpeciesRisk};
use crate::conditions::{CurrentConditions, RawConditions};
use crate::error::Result;
use crate::stage::{parse_plantation_date, StageCalculator};

/// Risk tier → species names in catalog declaration order
///
/// Always holds all three tiers (possibly empty) so the dashboard can render
/// stable sections. Unclassified species are never present.
pub type RiskBuckets = BTreeMap<RiskLevel, Vec<String>>;

fn empty_buckets() -> RiskBuckets {
    RiskLevel::ALL.iter().map(|&level| (level, Vec::new())).collect()
}

/// Outcome of one assessment call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Growth stage name at the reference date
    pub stage: String,

    /// Elapsed whole days since planting (negative for a future date)
    pub elapsed_days: i64,

    pub conditions: CurrentConditions,

    pub pests_by_risk_level: RiskBuckets,

    pub diseases_by_risk_level: RiskBuckets,

    /// Predicate detail for every classified species, pests first
    pub details: Vec<SpeciesRisk>,
}

impl AssessmentResult {
    pub fn buckets(&self, kind: SpeciesKind) -> &RiskBuckets {
        match kind {
            SpeciesKind::Pest => &self.pests_by_risk_level,
            SpeciesKind::Disease => &self.diseases_by_risk_level,
        }
    }

    /// Names at one tier for one category
    pub fn names(&self, kind: SpeciesKind, level: RiskLevel) -> &[String] {
        self.buckets(kind)
            .get(&level)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Tier assigned to a species, if it was classified
    pub fn level_of(&self, kind: SpeciesKind, name: &str) -> Option<RiskLevel> {
        self.buckets(kind)
            .iter()
            .find(|(_, names)| names.iter().any(|n| n == name))
            .map(|(&level, _)| level)
    }

    /// Number of classified species across both categories
    pub fn classified_count(&self) -> usize {
        self.details.len()
    }
}

/// One plot in a batch request
#[derive(Debug, Clone)]
pub struct PlotRequest {
    pub plot_id: String,
    pub plantation_date: NaiveDate,
    pub conditions: CurrentConditions,
}

/// Batch result entry, same order as the requests
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotAssessment {
    pub plot_id: String,
    pub result: AssessmentResult,
}

/// Risk-assessment engine over an explicitly supplied catalog
///
/// Holds only read-only state, so one engine can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct RiskEngine {
    catalog: Arc<SpeciesCatalog>,
    stages: StageCalculator,
    classifier: RiskClassifier,

    /// Fixed "today"; None means the local date at call time
    reference_date: Option<NaiveDate>,
}

impl RiskEngine {
    /// Engine with the default stage table and independent matching
    ///
    /// The catalog is re-verified; a defective catalog fails here with
    /// `DataIntegrity` rather than producing partial results later.
    pub fn new(catalog: Arc<SpeciesCatalog>) -> Result<Self> {
        catalog.verify()?;
        Ok(RiskEngine {
            catalog,
            stages: StageCalculator::default(),
            classifier: RiskClassifier::default(),
            reference_date: None,
        })
    }

    pub fn with_stages(mut self, stages: StageCalculator) -> Self {
        self.stages = stages;
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.classifier = RiskClassifier::new(mode);
        self
    }

    pub fn with_reference_date(mut self, reference_date: Option<NaiveDate>) -> Self {
        self.reference_date = reference_date;
        self
    }

    pub fn catalog(&self) -> &SpeciesCatalog {
        &self.catalog
    }

    fn reference(&self) -> NaiveDate {
        self.reference_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// Growth stage name for a plantation date
    pub fn compute_stage(&self, plantation_date: NaiveDate, reference_date: Option<NaiveDate>) -> &str {
        self.stages
            .compute_stage(plantation_date, reference_date.or(self.reference_date))
    }

    /// Assess every catalog entry against the current conditions
    pub fn assess(&self, plantation_date: NaiveDate, conditions: &CurrentConditions) -> AssessmentResult {
        self.assess_at(plantation_date, conditions, self.reference())
    }

    /// Same as `assess` with an explicit reference date
    pub fn assess_at(
        &self,
        plantation_date: NaiveDate,
        conditions: &CurrentConditions,
        reference_date: NaiveDate,
    ) -> AssessmentResult {
        let elapsed_days = crate::stage::elapsed_days(plantation_date, reference_date);
        let stage = self.stages.stage_for_days(elapsed_days).name.clone();

        let mut details = Vec::new();
        let pests_by_risk_level = self.bucket(self.catalog.pests(), conditions, &mut details);
        let diseases_by_risk_level = self.bucket(self.catalog.diseases(), conditions, &mut details);

        tracing::debug!(
            "Assessed {} species at stage '{}' ({} days, {:?} matching): {} classified",
            self.catalog.len(),
            stage,
            elapsed_days,
            self.classifier.mode(),
            details.len()
        );

        AssessmentResult {
            stage,
            elapsed_days,
            conditions: *conditions,
            pests_by_risk_level,
            diseases_by_risk_level,
            details,
        }
    }

    fn bucket(
        &self,
        profiles: &[SpeciesProfile],
        conditions: &CurrentConditions,
        details: &mut Vec<SpeciesRisk>,
    ) -> RiskBuckets {
        let mut buckets = empty_buckets();
        for profile in profiles {
            if let Some(risk) = self.classifier.explain(profile, conditions) {
                buckets
                    .entry(risk.level)
                    .or_default()
                    .push(profile.name.clone());
                details.push(risk);
            }
        }
        buckets
    }

    /// Boundary entry point: validates the raw date string and collaborator payload
    pub fn assess_raw(&self, plantation_date: &str, raw: &RawConditions) -> Result<AssessmentResult> {
        let plantation_date = parse_plantation_date(plantation_date)?;
        let conditions = CurrentConditions::from_raw(raw)?;
        Ok(self.assess(plantation_date, &conditions))
    }

    /// Assess several plots in parallel; output order matches input order
    pub fn assess_plots(&self, plots: &[PlotRequest]) -> Vec<PlotAssessment> {
        let reference = self.reference();
        plots
            .par_iter()
            .map(|plot| PlotAssessment {
                plot_id: plot.plot_id.clone(),
                result: self.assess_at(plot.plantation_date, &plot.conditions, reference),
            })
            .collect()
    }
}
