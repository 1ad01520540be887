// ternary-math/src/errors/mod.rs
use core::fmt;

/// Domain failures raised while evaluating functions on the simplex.
///
/// Only parameter validation produces these. Evaluating a density at a
/// degenerate point is not an error and yields `0.0` instead.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum DomainError {
    /// No shape parameters were supplied.
    EmptyParameters,
    /// A shape parameter is zero, negative or NaN.
    NonPositiveParameter { index: usize, value: f64 },
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::EmptyParameters => {
                write!(f, "at least one shape parameter is required")
            }
            DomainError::NonPositiveParameter { index, value } => {
                write!(f, "shape parameter {} must be positive, got {}", index, value)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}
