use thiserror::Error;

/// Top-level error type for planar-ik.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum IkError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),

    #[error("Degenerate input: {0}")]
    DegenerateInput(#[from] DegenerateInput),
}

/// Input validation errors.
///
/// Raised before any joint is moved; the chain is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InvalidInput {
    #[error("chain must contain at least one segment")]
    EmptyChain,

    #[error("segment {index} has non-positive length {length}")]
    NonPositiveLength { index: usize, length: f32 },
}

/// Geometric degeneracies where a required division is undefined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DegenerateInput {
    #[error("target coincides with the base, direction is undefined")]
    ZeroDistance,
}
