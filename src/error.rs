use thiserror::Error;

/// Errors produced while building vectors or evaluating vector operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    /// The arguments cannot describe a vector at all, e.g. an empty coordinate list.
    #[error("{0}")]
    InvalidArgument(&'static str),

    /// A coordinate or scalar could not be turned into a decimal number.
    #[error("cannot convert {value:?} to a decimal number")]
    TypeConversion { value: String },

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("cross product only works for 2 or 3 dimensional vectors (got {dimension})")]
    UnsupportedDimension { dimension: usize },
}

/// The operation is undefined for the given operands.
///
/// Every variant other than [`DomainError::ZeroVector`] is a re-labeled normalization failure;
/// the underlying cause stays reachable through [`std::error::Error::source`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error(transparent)]
    ZeroVector(#[from] ZeroVector),

    #[error("cannot compute an angle with the zero vector")]
    ZeroAngle(#[source] ZeroVector),

    #[error("no unique parallel component")]
    NoUniqueParallelComponent(#[source] ZeroVector),

    #[error("no unique orthogonal component")]
    NoUniqueOrthogonalComponent(#[source] Box<DomainError>),
}

/// The zero vector has no direction and cannot be scaled to unit length.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("cannot normalize the zero vector")]
pub struct ZeroVector;
