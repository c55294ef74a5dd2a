//! Pearson correlation over numeric series
//!
//! Pairwise correlation plus a symmetric correlation matrix over named
//! series. A zero-variance series correlates to 0 rather than erroring;
//! the matrix diagonal is exactly 1.0 regardless of roundoff.

pub mod matrix;
pub mod pearson;

pub use matrix::{correlation_matrix, CorrelationMatrix, NamedSeries};
pub use pearson::pearson;
