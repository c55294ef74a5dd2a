//! Analytic joint-density evaluation over a rectangular grid
//!
//! Evaluates the closed-form bivariate density of a parametric family at
//! every node of an `R x R` grid. The resulting `DensityGrid` is the input
//! to contour extraction and is recomputed on demand, never mutated in
//! place. All grid values are finite and non-negative by construction; a
//! non-finite evaluation surfaces as a typed error instead of a NaN cell.

pub mod field;
pub mod grid;

pub use field::evaluate_grid;
pub use grid::{DensityGrid, GridBounds};
