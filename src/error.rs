use thiserror::Error;

/// Top-level error type for the Geometria kernel.
///
/// Intersection queries never produce errors; they report a miss with `None`.
/// Errors only come out of the explicitly checked entry points.
#[derive(Debug, Error)]
pub enum GeometriaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience type alias for results using [`GeometriaError`].
pub type Result<T> = std::result::Result<T, GeometriaError>;
