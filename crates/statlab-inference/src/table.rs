//! Contingency tables for independence testing

use statlab_core::{Error, Result};
use std::fmt;

/// Rectangular table of non-negative counts, at least 2x2
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContingencyTable {
    counts: Vec<u64>,
    rows: usize,
    cols: usize,
}

impl ContingencyTable {
    /// Build from row-major nested counts
    pub fn from_counts(rows: Vec<Vec<u64>>) -> Result<Self> {
        let n_rows = rows.len();
        if n_rows < 2 {
            return Err(Error::dimension_mismatch("contingency rows", 2, n_rows));
        }
        let n_cols = rows[0].len();
        if n_cols < 2 {
            return Err(Error::dimension_mismatch("contingency columns", 2, n_cols));
        }
        for row in &rows {
            if row.len() != n_cols {
                return Err(Error::dimension_mismatch(
                    "contingency columns",
                    n_cols,
                    row.len(),
                ));
            }
        }

        Ok(Self {
            counts: rows.into_iter().flatten().collect(),
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Synthesize an independence-consistent table from marginal probabilities
    ///
    /// Cell `(i, j)` gets `round(total * row_probs[i] * col_probs[j])`.
    /// Useful for simulating the null hypothesis; each probability vector
    /// must have at least two entries and sum to 1.
    pub fn from_marginals(row_probs: &[f64], col_probs: &[f64], total: u64) -> Result<Self> {
        for (name, probs) in [("row", row_probs), ("column", col_probs)] {
            if probs.len() < 2 {
                return Err(Error::dimension_mismatch(
                    &format!("{name} marginals"),
                    2,
                    probs.len(),
                ));
            }
            if probs.iter().any(|&p| !p.is_finite() || p < 0.0) {
                return Err(Error::Configuration(format!(
                    "{name} marginals must be non-negative and finite"
                )));
            }
            let sum: f64 = probs.iter().sum();
            if (sum - 1.0).abs() > 1e-9 {
                return Err(Error::Configuration(format!(
                    "{name} marginals must sum to 1, got {sum}"
                )));
            }
        }
        if total == 0 {
            return Err(Error::DegenerateInput(
                "marginal synthesis needs a positive total".to_string(),
            ));
        }

        let counts = row_probs
            .iter()
            .flat_map(|&p| {
                col_probs
                    .iter()
                    .map(move |&q| (total as f64 * p * q).round() as u64)
            })
            .collect();
        Ok(Self {
            counts,
            rows: row_probs.len(),
            cols: col_probs.len(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn count(&self, row: usize, col: usize) -> u64 {
        self.counts[row * self.cols + col]
    }

    pub fn row_total(&self, row: usize) -> u64 {
        (0..self.cols).map(|col| self.count(row, col)).sum()
    }

    pub fn col_total(&self, col: usize) -> u64 {
        (0..self.rows).map(|row| self.count(row, col)).sum()
    }

    pub fn grand_total(&self) -> u64 {
        self.counts.iter().sum()
    }
}

impl fmt::Display for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ContingencyTable({}x{}, n={})",
            self.rows,
            self.cols,
            self.grand_total()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_counts_and_totals() {
        let table =
            ContingencyTable::from_counts(vec![vec![10, 20, 30], vec![15, 25, 20]]).unwrap();
        assert_eq!(table.rows(), 2);
        assert_eq!(table.cols(), 3);
        assert_eq!(table.count(0, 2), 30);
        assert_eq!(table.row_total(0), 60);
        assert_eq!(table.col_total(1), 45);
        assert_eq!(table.grand_total(), 120);
    }

    #[test]
    fn test_minimum_dimensions() {
        assert!(ContingencyTable::from_counts(vec![vec![1, 2]]).is_err());
        assert!(ContingencyTable::from_counts(vec![vec![1], vec![2]]).is_err());
        assert!(ContingencyTable::from_counts(vec![vec![1, 2], vec![3, 4]]).is_ok());
    }

    #[test]
    fn test_ragged_rows_rejected() {
        assert!(ContingencyTable::from_counts(vec![vec![1, 2, 3], vec![4, 5]]).is_err());
    }

    #[test]
    fn test_from_marginals() {
        let table = ContingencyTable::from_marginals(&[0.5, 0.5], &[0.25, 0.75], 400).unwrap();
        assert_eq!(table.count(0, 0), 50);
        assert_eq!(table.count(0, 1), 150);
        assert_eq!(table.grand_total(), 400);
    }

    #[test]
    fn test_from_marginals_validation() {
        assert!(ContingencyTable::from_marginals(&[0.5, 0.6], &[0.5, 0.5], 100).is_err());
        assert!(ContingencyTable::from_marginals(&[1.0], &[0.5, 0.5], 100).is_err());
        assert!(ContingencyTable::from_marginals(&[0.5, 0.5], &[0.5, 0.5], 0).is_err());
        assert!(ContingencyTable::from_marginals(&[-0.5, 1.5], &[0.5, 0.5], 100).is_err());
    }
}
