//! Coarse textbook-style critical-value lookup
//!
//! Buckets p-values through a 3-entry critical-value table instead of
//! evaluating the CDF, the way printed statistics tables do. The exact
//! statrs-based path is the default everywhere; this table exists for
//! callers that want classroom-table output.
//!
//! Precision caveat: p-values from this table are *bounds*, not values —
//! a statistic between the 0.05 and 0.01 critical values reports 0.05.
//! Degrees of freedom above 10 fall back to the asymptotic normal row for
//! t. Use [`crate::chi_square_independence`] and the t tests for anything
//! that needs real precision.

/// Upper-tail critical values at alpha = 0.10, 0.05, 0.01 for df = 1..=10
const CHI_SQUARE_ROWS: [[f64; 3]; 10] = [
    [2.706, 3.841, 6.635],
    [4.605, 5.991, 9.210],
    [6.251, 7.815, 11.345],
    [7.779, 9.488, 13.277],
    [9.236, 11.070, 15.086],
    [10.645, 12.592, 16.812],
    [12.017, 14.067, 18.475],
    [13.362, 15.507, 20.090],
    [14.684, 16.919, 21.666],
    [15.987, 18.307, 23.209],
];

/// Two-sided critical values at alpha = 0.10, 0.05, 0.01 for df = 1..=10
const T_TWO_SIDED_ROWS: [[f64; 3]; 10] = [
    [6.314, 12.706, 63.657],
    [2.920, 4.303, 9.925],
    [2.353, 3.182, 5.841],
    [2.132, 2.776, 4.604],
    [2.015, 2.571, 4.032],
    [1.943, 2.447, 3.707],
    [1.895, 2.365, 3.499],
    [1.860, 2.306, 3.355],
    [1.833, 2.262, 3.250],
    [1.812, 2.228, 3.169],
];

/// Asymptotic normal row used for t when df > 10
const T_ASYMPTOTIC_ROW: [f64; 3] = [1.645, 1.960, 2.576];

const ALPHAS: [f64; 3] = [0.10, 0.05, 0.01];

/// The original's bucketed critical-value table
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproximateCriticalValueTable;

impl ApproximateCriticalValueTable {
    pub fn new() -> Self {
        Self
    }

    /// Chi-square upper-tail critical value; `None` off the table
    pub fn chi_square_critical(&self, df: usize, alpha: f64) -> Option<f64> {
        let row = CHI_SQUARE_ROWS.get(df.checked_sub(1)?)?;
        Some(row[Self::alpha_bucket(alpha)?])
    }

    /// Two-sided t critical value; df > 10 uses the normal row
    pub fn t_critical(&self, df: usize, alpha: f64) -> Option<f64> {
        if df == 0 {
            return None;
        }
        let bucket = Self::alpha_bucket(alpha)?;
        Some(match T_TWO_SIDED_ROWS.get(df - 1) {
            Some(row) => row[bucket],
            None => T_ASYMPTOTIC_ROW[bucket],
        })
    }

    /// Bucketed upper bound on the chi-square p-value
    ///
    /// Returns 0.01, 0.05, 0.10, or 1.0 depending on which critical values
    /// the statistic clears.
    pub fn chi_square_p_value_bound(&self, statistic: f64, df: usize) -> Option<f64> {
        let row = CHI_SQUARE_ROWS.get(df.checked_sub(1)?)?;
        Some(if statistic >= row[2] {
            0.01
        } else if statistic >= row[1] {
            0.05
        } else if statistic >= row[0] {
            0.10
        } else {
            1.0
        })
    }

    fn alpha_bucket(alpha: f64) -> Option<usize> {
        ALPHAS.iter().position(|&a| (a - alpha).abs() < 1e-9)
    }
}
