//! Validation errors raised by the rate normalizer and the simulation engine
//!
//! All checks run before any series is produced, so a caller never receives
//! partial output alongside an error.

/// Errors from rate conversion and simulation input validation
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SimulationError {
    /// Rate at or below -100%, or not a finite number
    #[error("invalid rate {rate}: must be finite and greater than -100%")]
    InvalidRate { rate: f64 },

    /// Run parameter outside its domain (negative balance, duplicate scenario name, ...)
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: String, reason: String },
}

impl SimulationError {
    pub(crate) fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Convenience alias used across the engine
pub type Result<T> = std::result::Result<T, SimulationError>;
