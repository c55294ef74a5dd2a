//! Sample container produced by the variate generator
//!
//! A `SampleSet` is immutable once generated; a change in parameters or
//! sample count regenerates a fresh set instead of mutating this one.

use std::fmt;

/// An ordered set of `(x, y)` sample pairs
#[derive(Debug, Clone, PartialEq)]
pub struct SampleSet {
    points: Vec<(f64, f64)>,
}

impl SampleSet {
    /// Wrap generated points; the generator guarantees finiteness
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// First coordinates as an owned vector
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|&(x, _)| x).collect()
    }

    /// Second coordinates as an owned vector
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, y)| y).collect()
    }
}

impl fmt::Display for SampleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SampleSet(n={})", self.points.len())
    }
}
