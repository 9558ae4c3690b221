//! Crop Risk Engine
//!
//! Flags pests and diseases threatening a monitored plot by combining the
//! crop's growth stage, current temperature/humidity and calendar month.
//!
//! Module layout:
//! - `utils/`: Month ordinal and closed-range comparison
//! - `catalog/`: Species profiles and the immutable catalog
//! - `stage`: Growth stage from days since planting
//! - `conditions`: Validated current-conditions snapshot
//! - `classifier`: High/Moderate/Low tiering for one species
//! - `assessment`: Whole-catalog assessment and result assembly
//! - `config`: Environment-driven engine configuration
//!
//! The engine is pure computation: no I/O beyond optionally reading a
//! catalog file at start-up.

pub mod error;
pub mod utils;
pub mod catalog;
pub mod stage;
pub mod conditions;
pub mod classifier;
pub mod assessment;
pub mod config;

// Re-export commonly used types
pub use error::{Result, RiskError};
pub use utils::Month;
pub use catalog::{builtin_catalog, ConditionPair, SpeciesCatalog, SpeciesKind, SpeciesProfile};
pub use stage::{parse_plantation_date, GrowthStage, StageCalculator};
pub use conditions::{CurrentConditions, RawConditions};
pub use classifier::{MatchMode, RiskClassifier, RiskLevel, SpeciesRisk};
pub use assessment::{AssessmentResult, PlotAssessment, PlotRequest, RiskBuckets, RiskEngine};
pub use config::EngineConfig;
