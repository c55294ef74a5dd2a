//! Chi-square test of independence

use crate::table::ContingencyTable;
use crate::types::{check_alpha, TestResult};
use statlab_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Chi-square independence test over a contingency table
///
/// Expected counts come from the row/column marginals; cells whose
/// expected count is zero contribute nothing. The p-value is the exact
/// upper tail of the chi-square CDF with `(rows - 1)(cols - 1)` degrees
/// of freedom.
pub fn chi_square_independence(table: &ContingencyTable, alpha: f64) -> Result<TestResult> {
    check_alpha(alpha)?;

    let total = table.grand_total();
    if total == 0 {
        return Err(Error::DegenerateInput(
            "contingency table has no observations".to_string(),
        ));
    }

    let row_totals: Vec<f64> = (0..table.rows()).map(|i| table.row_total(i) as f64).collect();
    let col_totals: Vec<f64> = (0..table.cols()).map(|j| table.col_total(j) as f64).collect();
    let total = total as f64;

    let mut statistic = 0.0;
    for (i, &row_total) in row_totals.iter().enumerate() {
        for (j, &col_total) in col_totals.iter().enumerate() {
            let expected = row_total * col_total / total;
            if expected > 0.0 {
                let observed = table.count(i, j) as f64;
                let delta = observed - expected;
                statistic += delta * delta / expected;
            }
        }
    }

    // rows, cols >= 2 is enforced by the table type, so df >= 1
    let df = ((table.rows() - 1) * (table.cols() - 1)) as f64;
    let dist = ChiSquared::new(df)
        .map_err(|e| Error::NumericalDomain(format!("failed to build chi-square reference: {e}")))?;

    let p_value = (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0);
    Ok(TestResult {
        statistic,
        degrees_of_freedom: Some(df),
        critical_value: dist.inverse_cdf(1.0 - alpha),
        p_value,
        reject: p_value < alpha,
    })
}
