//! Error types for validation, solving and record I/O

use thiserror::Error;

/// Errors raised by the projection engine and its collaborators
#[derive(Debug, Error)]
pub enum ProjectionError {
    /// A required input is absent or not a finite number
    #[error("missing or invalid input: {field}")]
    MissingInput { field: &'static str },

    /// Compounding period must be a positive whole number of days
    #[error("invalid period: {0} days (must be a positive whole number)")]
    InvalidPeriod(f64),

    #[error("invalid horizon: {0} days (must not be negative)")]
    NegativeHorizon(f64),

    #[error("invalid horizon: {0} days (exceeds {max} days)", max = u32::MAX)]
    HorizonTooLarge(f64),

    /// Reverse solve has no defined answer for the given inputs
    #[error("degenerate solve: {0}")]
    DegenerateSolve(&'static str),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ProjectionError>;

impl ProjectionError {
    /// True for failures caused by bad inputs rather than I/O
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProjectionError::MissingInput { .. }
                | ProjectionError::InvalidPeriod(_)
                | ProjectionError::NegativeHorizon(_)
                | ProjectionError::HorizonTooLarge(_)
        )
    }
}
