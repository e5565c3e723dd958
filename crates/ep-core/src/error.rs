//! Configuration error type.
//!
//! Only configuration problems are recoverable: the caller corrects the
//! offending value and retries.  Broken runtime invariants (non-finite
//! coordinates, out-of-range agent ids) panic instead.

use thiserror::Error;

/// A rejected parameter value.  Every variant names the field at fault.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} = {value} is outside the allowed range [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: f64,
        min:   f64,
        max:   f64,
    },

    #[error("{low_field} ({low}) must not exceed {high_field} ({high})")]
    InvertedRange {
        low_field:  &'static str,
        high_field: &'static str,
        low:        f64,
        high:       f64,
    },

    #[error("unknown parameter {0:?}")]
    UnknownParameter(String),

    #[error("parameter {field} expects a {expected} value")]
    WrongType {
        field:    &'static str,
        expected: &'static str,
    },

    #[error("cannot build {field} distribution: {reason}")]
    Distribution {
        field:  &'static str,
        reason: String,
    },
}

impl ConfigError {
    /// The parameter name this error refers to (the lower field for
    /// [`ConfigError::InvertedRange`]).
    pub fn field(&self) -> &str {
        match self {
            ConfigError::OutOfRange { field, .. }
            | ConfigError::WrongType { field, .. }
            | ConfigError::Distribution { field, .. } => field,
            ConfigError::InvertedRange { low_field, .. } => low_field,
            ConfigError::UnknownParameter(name) => name,
        }
    }
}

/// Shorthand result type for parameter handling.
pub type ConfigResult<T> = Result<T, ConfigError>;
