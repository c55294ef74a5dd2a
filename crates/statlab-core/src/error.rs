//! Error types for the statlab engine
//!
//! Provides a unified error type for all statlab crates.

use thiserror::Error;

/// Core error type for statlab operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid configuration value (e.g. non-positive sigma, |rho| >= 1)
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Two inputs that must agree in size do not
    #[error("Dimension mismatch in {context}: expected {expected}, got {actual}")]
    Dimension {
        context: String,
        expected: usize,
        actual: usize,
    },

    /// Input is legal in shape but statistically degenerate
    #[error("Degenerate input: {0}")]
    DegenerateInput(String),

    /// Paired operations require equal sample sizes
    #[error("Mismatched sample sizes: {left} vs {right}")]
    MismatchedSampleSizes { left: usize, right: usize },

    /// A numeric operation left its valid domain (log/sqrt of bad operand)
    #[error("Numerical domain error: {0}")]
    NumericalDomain(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for too-small input
    pub fn insufficient(expected: usize, actual: usize) -> Self {
        Self::InsufficientData { expected, actual }
    }

    /// Create an error for size mismatch
    pub fn dimension_mismatch(context: &str, expected: usize, actual: usize) -> Self {
        Self::Dimension {
            context: context.to_string(),
            expected,
            actual,
        }
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NumericalDomain(format!("{context} produced NaN or infinite values"))
    }
}
