use thiserror::Error;

/// Top-level error type for the geodec library.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeodecError {
    #[error(transparent)]
    Numeric(#[from] NumericError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors raised by scalar arithmetic and conversions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NumericError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("arithmetic overflow")]
    Overflow,

    #[error("{operation} is undefined for {value}")]
    Domain { operation: &'static str, value: String },

    #[error("non-finite value {0} cannot be represented")]
    NotFinite(String),

    #[error("invalid scalar literal: {0}")]
    Parse(String),
}

/// Errors related to the shape of geometric inputs.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GeometryError {
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
}

/// Convenience type alias for results using [`GeodecError`].
pub type Result<T> = std::result::Result<T, GeodecError>;
