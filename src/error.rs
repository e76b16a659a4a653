//! Error taxonomy for the field kernel and its sweep layer.

use thiserror::Error;

/// Errors produced by field evaluation and sweep configuration.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The time coordinate was NaN or infinite.
    ///
    /// An infinite time produces an undefined oscillation phase, so it is
    /// rejected at the boundary instead of poisoning downstream aggregations
    /// with a non-finite intensity.
    #[error("non-finite time coordinate: {0}")]
    NonFiniteTime(f64),

    /// A non-finite value was passed where a finite scalar is required.
    #[error("non-finite scalar input: {0}")]
    NonFiniteInput(f64),

    /// A sweep configuration failed validation.
    #[error("invalid sweep configuration: {0}")]
    InvalidSweep(&'static str),
}

/// Result alias used across the crate.
pub type FieldResult<T> = Result<T, FieldError>;
