use thiserror::Error;

use ep_core::ConfigError;
use ep_spatial::SpatialError;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("invalid parameters: {0}")]
    Config(#[from] ConfigError),

    #[error("spatial index: {0}")]
    Spatial(#[from] SpatialError),

    #[error("snapshot does not match the engine: {0}")]
    SnapshotMismatch(String),
}

pub type SimResult<T> = Result<T, SimError>;
