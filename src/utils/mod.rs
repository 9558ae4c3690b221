//! Utility modules for risk assessment
//!
//! Contains shared functionality used by the catalog and classifier:
//! - Month: 12-valued calendar ordinal with boundary parsing
//! - Ranges: Closed-interval comparison for temperature/humidity envelopes

pub mod month;
pub mod ranges;

// Re-export commonly used types
pub use month::Month;
pub use ranges::{ClosedRange, RangeFit, any_contains, nearest_distance};
