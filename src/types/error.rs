use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridCastError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid metadata: {0}")]
    InvalidMetadata(String),
    #[error("out of bounds: {0}")]
    OutOfBounds(String),
    #[error("degenerate ray direction ({x}, {y})")]
    DegenerateDirection { x: f64, y: f64 },
    #[error("max distance must be a non-negative number, got {0}")]
    InvalidMaxDistance(f64),
    #[error("ray origin ({x}, {y}) is not finite")]
    InvalidOrigin { x: f64, y: f64 },
}
