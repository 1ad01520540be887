//! errors.rs - Custom error types for the ternary-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

use ternary_math::DomainError;

/// This enum represents all possible error types in the `ternary-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream matches.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum TernaryError {
    #[error("Cannot normalize a point whose coordinates sum to 0")]
    ZeroSum,

    #[error("Invalid permutation '{0}': expected a rearrangement of \"012\"")]
    InvalidPermutation(String),

    #[error("Heatmap style must be 'triangular' or 'hexagonal', got '{0}'")]
    InvalidStyle(String),

    #[error("Unknown colormap '{0}'; expected one of: jet, gray, hot")]
    UnknownColormap(String),

    #[error("Scale {scale} exceeds maximum allowed ({max})")]
    ScaleTooLarge { scale: usize, max: usize },

    #[error("Gridline multiple must be at least 1")]
    InvalidMultiple,

    #[error("Invalid heatmap configuration: {0}")]
    InvalidConfig(String),

    #[error("Line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("An unexpected I/O error occurred: {0}")]
    IoError(#[from] std::io::Error),

    #[error("A critical system error occurred: {0}")]
    AnyhowWrapper(#[from] anyhow::Error),
}
