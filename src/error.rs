use thiserror::Error;

/// Top-level error type for the wall segment engine.
#[derive(Debug, Error)]
pub enum WallgridError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Errors raised while constructing geometric values.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("segment endpoints coincide at ({x}, {y})")]
    CoincidentEndpoints { x: f64, y: f64 },

    #[error("non-finite coordinate in point ({x}, {y})")]
    NonFinite { x: f64, y: f64 },
}

/// Errors raised by the session controller and its collaborators.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("segment length {length} is shorter than the minimum {min_length}")]
    SegmentTooShort { length: f64, min_length: f64 },
}

/// Convenience type alias for results using [`WallgridError`].
pub type Result<T> = std::result::Result<T, WallgridError>;
