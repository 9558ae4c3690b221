//! Error types for the risk engine
//!
//! Two families only: bad caller input (rejected at the boundary) and broken
//! reference data (catalog or stage table). Neither is retried.

use thiserror::Error;

/// Main error type for risk engine operations
#[derive(Error, Debug)]
pub enum RiskError {
    /// Caller-supplied value failed boundary validation
    #[error("Invalid input: {field} - {reason}")]
    InvalidInput { field: String, reason: String },

    /// Reference data (catalog, stage table) violates an integrity rule
    #[error("Data integrity error: {message}")]
    DataIntegrity { message: String },

    /// Catalog JSON could not be parsed
    #[error("Failed to parse species catalog: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Failed to read species catalog: {0}")]
    Io(#[from] std::io::Error),
}

impl RiskError {
    pub fn invalid_input(field: impl Into<String>, reason: impl Into<String>) -> Self {
        RiskError::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub fn data_integrity(message: impl Into<String>) -> Self {
        RiskError::DataIntegrity {
            message: message.into(),
        }
    }

    /// True for any failure rooted in reference data rather than caller input
    pub fn is_data_integrity(&self) -> bool {
        !matches!(self, RiskError::InvalidInput { .. })
    }
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, RiskError>;
