//! Error types for random value generation.

use thiserror::Error;

/// Why a random draw could not be made.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RandomError {
    /// Integer range whose minimum exceeds its maximum.
    #[error("invalid range: min {min} is greater than max {max}")]
    InvalidRange { min: i64, max: i64 },
    /// Float range whose minimum exceeds its maximum, or with a NaN bound.
    #[error("invalid range: min {min} is not less than or equal to max {max}")]
    InvalidFloatRange { min: f64, max: f64 },
    /// Float range with an infinite bound.
    #[error("range [{min}, {max}] is not finite")]
    NonFiniteRange { min: f64, max: f64 },
}
