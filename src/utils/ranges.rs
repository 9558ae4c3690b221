//! Closed Interval Comparator
//!
//! Compares a current reading against a declared favourable range [min, max].
//! Both bounds are inclusive: a reading exactly on min or max is inside.

use serde::{Deserialize, Serialize};

/// Result of comparing a reading to a closed range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFit {
    /// Reading is below the range (value < min)
    BelowRange,

    /// Reading is within the range (min <= value <= max)
    WithinRange,

    /// Reading exceeds the range (value > max)
    AboveRange,
}

/// Closed interval [min, max]
///
/// Serialised as a two-element array `[min, max]` to keep catalog JSON compact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ClosedRange {
    pub min: f64,
    pub max: f64,
}

impl From<[f64; 2]> for ClosedRange {
    fn from([min, max]: [f64; 2]) -> Self {
        ClosedRange { min, max }
    }
}

impl From<ClosedRange> for [f64; 2] {
    fn from(range: ClosedRange) -> Self {
        [range.min, range.max]
    }
}

impl ClosedRange {
    pub fn new(min: f64, max: f64) -> Self {
        ClosedRange { min, max }
    }

    /// Both bounds finite and ordered
    pub fn is_well_formed(&self) -> bool {
        self.min.is_finite() && self.max.is_finite() && self.min <= self.max
    }

    pub fn fit(&self, value: f64) -> RangeFit {
        if value < self.min {
            RangeFit::BelowRange
        } else if value > self.max {
            RangeFit::AboveRange
        } else {
            RangeFit::WithinRange
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        self.fit(value) == RangeFit::WithinRange
    }

    /// Distance from the nearest bound (0 if within range)
    pub fn distance_from(&self, value: f64) -> f64 {
        match self.fit(value) {
            RangeFit::BelowRange => self.min - value,
            RangeFit::WithinRange => 0.0,
            RangeFit::AboveRange => value - self.max,
        }
    }
}

/// True if `value` falls inside any of the ranges
pub fn any_contains<'a, I>(ranges: I, value: f64) -> bool
where
    I: IntoIterator<Item = &'a ClosedRange>,
{
    ranges.into_iter().any(|r| r.contains(value))
}

/// Smallest distance from `value` to any of the ranges
/// Returns None if there are no ranges
pub fn nearest_distance<'a, I>(ranges: I, value: f64) -> Option<f64>
where
    I: IntoIterator<Item = &'a ClosedRange>,
{
    ranges
        .into_iter()
        .map(|r| r.distance_from(value))
        .fold(None, |best, d| Some(best.map_or(d, |b: f64| b.min(d))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_within_range() {
        let range = ClosedRange::new(28.0, 32.0);
        assert_eq!(range.fit(30.0), RangeFit::WithinRange);
        assert_eq!(range.distance_from(30.0), 0.0);
        assert!(range.contains(30.0));
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let range = ClosedRange::new(70.0, 80.0);
        assert!(range.contains(70.0));
        assert!(range.contains(80.0));
        assert!(!range.contains(69.999));
        assert!(!range.contains(80.001));
    }

    #[test]
    fn test_below_and_above() {
        let range = ClosedRange::new(28.0, 32.0);
        assert_eq!(range.fit(20.0), RangeFit::BelowRange);
        assert_relative_eq!(range.distance_from(20.0), 8.0, epsilon = 1e-9);
        assert_eq!(range.fit(33.5), RangeFit::AboveRange);
        assert_relative_eq!(range.distance_from(33.5), 1.5, epsilon = 1e-9);
    }

    #[test]
    fn test_well_formed() {
        assert!(ClosedRange::new(1.0, 1.0).is_well_formed());
        assert!(!ClosedRange::new(5.0, 1.0).is_well_formed());
        assert!(!ClosedRange::new(f64::NAN, 1.0).is_well_formed());
        assert!(!ClosedRange::new(0.0, f64::INFINITY).is_well_formed());
    }

    #[test]
    fn test_any_and_nearest() {
        let ranges = [ClosedRange::new(10.0, 15.0), ClosedRange::new(25.0, 30.0)];
        assert!(any_contains(&ranges, 27.0));
        assert!(!any_contains(&ranges, 20.0));
        assert_relative_eq!(nearest_distance(&ranges, 20.0).unwrap(), 5.0, epsilon = 1e-9);
        assert_relative_eq!(nearest_distance(&ranges, 23.5).unwrap(), 1.5, epsilon = 1e-9);
        assert_eq!(nearest_distance(&ranges, 12.0), Some(0.0));
        assert_eq!(nearest_distance(std::iter::empty::<&ClosedRange>(), 12.0), None);
    }

    #[test]
    fn test_serde_as_pair() {
        let range: ClosedRange = serde_json::from_str("[28, 32.5]").unwrap();
        assert_eq!(range, ClosedRange::new(28.0, 32.5));
        assert_eq!(serde_json::to_string(&range).unwrap(), "[28.0,32.5]");
    }
}
