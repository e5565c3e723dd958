//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `ep-spatial`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SpatialError {
    #[error("cell size must be positive and finite, got {0}")]
    InvalidCellSize(f64),

    #[error("grid bounds must have positive finite width and height")]
    EmptyBounds,
}

pub type SpatialResult<T> = Result<T, SpatialError>;
