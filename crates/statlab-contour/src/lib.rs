//! Iso-contour extraction from a density grid
//!
//! Cell-wise marching squares: every 2x2 block of grid nodes is examined
//! independently per requested level, and edge crossings found by linear
//! interpolation are joined into short two-point segments. Segments are not
//! merged into closed rings; consumers that draw them as independent strokes
//! get the same picture, and per-cell output keeps the pass a single
//! `O(R^2 * levels)` sweep.

pub mod extract;
pub mod types;

pub use extract::extract;
pub use types::Contour;
