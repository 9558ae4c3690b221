//! Calendar month ordinal
//!
//! Months are carried as a 12-valued ordinal internally. English display names
//! only appear at the boundary (collaborator payloads, catalog JSON, dashboard
//! output), so casing and whitespace never reach the classifier.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{Result, RiskError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    /// Canonical English name
    pub fn display_name(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// 1-based month number (January = 1)
    pub fn number(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn from_number(number: u32) -> Option<Self> {
        Self::ALL.get(number.checked_sub(1)? as usize).copied()
    }

    /// Parse a full month name. Case-insensitive, surrounding whitespace
    /// ignored; abbreviations are rejected.
    pub fn parse(name: &str) -> Result<Self> {
        let trimmed = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|m| m.display_name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| {
                RiskError::invalid_input(
                    "month",
                    format!("'{}' is not one of the twelve calendar month names", name),
                )
            })
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Month {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Month {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Month::parse(&name).map_err(serde::de::Error::custom)
    }
}
