//! Correlation matrix over named series

use crate::pearson;
use nalgebra::DMatrix;
use statlab_core::{Error, Result};
use std::fmt;

/// One named numeric series
#[derive(Debug, Clone, PartialEq)]
pub struct NamedSeries {
    name: String,
    values: Vec<f64>,
}

impl NamedSeries {
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

/// Symmetric Pearson correlation matrix with unit diagonal
#[derive(Debug, Clone, PartialEq)]
pub struct CorrelationMatrix {
    names: Vec<String>,
    values: DMatrix<f64>,
}

impl CorrelationMatrix {
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Entry `(i, j)`
    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }
}

impl fmt::Display for CorrelationMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CorrelationMatrix({} series)", self.names.len())
    }
}

/// Pairwise-correlate every series against every other
///
/// The upper triangle is computed once and mirrored, so the result is
/// symmetric by construction; the diagonal is set to exactly 1.0. Any two
/// series of unequal length are a dimension error.
pub fn correlation_matrix(series: &[NamedSeries]) -> Result<CorrelationMatrix> {
    if series.is_empty() {
        return Err(Error::insufficient(1, 0));
    }
    let expected = series[0].values().len();
    for s in series {
        if s.values().len() != expected {
            return Err(Error::dimension_mismatch(
                &format!("series '{}'", s.name()),
                expected,
                s.values().len(),
            ));
        }
    }

    let k = series.len();
    let mut values = DMatrix::from_element(k, k, 0.0);
    for i in 0..k {
        values[(i, i)] = 1.0;
        for j in (i + 1)..k {
            let r = pearson(series[i].values(), series[j].values())?;
            values[(i, j)] = r;
            values[(j, i)] = r;
        }
    }

    Ok(CorrelationMatrix {
        names: series.iter().map(|s| s.name().to_string()).collect(),
        values,
    })
}
