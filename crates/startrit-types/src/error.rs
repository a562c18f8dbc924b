//! Error types for startrit.

use thiserror::Error;

/// Result type alias for startrit operations.
pub type Result<T> = std::result::Result<T, StartritError>;

/// Errors raised by strict parsing and by the outer surfaces.
///
/// The rate estimator itself never fails; these only surface when a caller
/// asks for a strict interpretation of a label or parses form JSON.
#[derive(Error, Debug)]
pub enum StartritError {
    /// Unrecognized technology domain label.
    #[error("invalid domain '{0}', expected one of: ai, blockchain, robotics, iot, cloud, other")]
    InvalidDomain(String),

    /// Unrecognized skill level label.
    #[error("invalid skill level '{0}', expected one of: beginner, intermediate, advanced")]
    InvalidSkillLevel(String),

    /// Unrecognized billing period label.
    #[error("invalid billing period '{0}', expected one of: hourly, weekly, monthly")]
    InvalidBillingPeriod(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
