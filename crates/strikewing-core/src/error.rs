//! Construction and configuration errors.
//!
//! The running simulation never fails: terminal states are reported through
//! transitions. These errors only come out of constructors, config
//! validation and geometry updates.

/// Error type for simulation setup.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A probability outside [0, 1].
    #[error("{field} must be a probability in [0, 1], got {value}")]
    InvalidProbability { field: &'static str, value: f64 },

    /// Non-positive or non-finite arena dimensions.
    #[error("arena must have positive finite size, got {width}x{height}")]
    InvalidBounds { width: f64, height: f64 },

    /// A health pool that would start destroyed.
    #[error("{field} must be positive, got {value}")]
    InvalidHealth { field: &'static str, value: i64 },

    /// An objective that cannot be met by the level as configured.
    #[error("unreachable objective: {field}")]
    InvalidTarget { field: &'static str },

    #[error("campaign has no levels")]
    EmptyCampaign,

    #[error("no level at index {index}")]
    UnknownLevel { index: usize },
}

/// Result type for simulation setup.
pub type Result<T> = std::result::Result<T, SimError>;

/// Fail with `InvalidProbability` unless `value` lies in [0, 1].
pub fn check_probability(field: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SimError::InvalidProbability { field, value })
    }
}

/// Fail with `InvalidHealth` unless `value` is positive.
pub fn check_health(field: &'static str, value: i64) -> Result<()> {
    if value > 0 {
        Ok(())
    } else {
        Err(SimError::InvalidHealth { field, value })
    }
}
