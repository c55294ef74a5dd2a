//! One-sample, Welch two-sample, and paired t tests

use crate::types::{check_alpha, resolve_symmetric, SampleSummary, Tail, TestOutcome};
use statlab_core::{Error, Result};
use statrs::distribution::StudentsT;

/// One-sample t test of `mean` against `mu0`, `df = n - 1`
pub fn one_sample_t(
    summary: &SampleSummary,
    mu0: f64,
    tail: Tail,
    alpha: f64,
) -> Result<TestOutcome> {
    check_alpha(alpha)?;
    if !mu0.is_finite() {
        return Err(Error::Configuration("mu0 must be finite".to_string()));
    }

    let se = summary.std() / (summary.n() as f64).sqrt();
    let diff = summary.mean() - mu0;
    let df = (summary.n() - 1) as f64;
    t_outcome(diff, se, df, tail, alpha)
}

/// One-sample t test over a raw sample; identical to the summary route
pub fn one_sample_t_from_sample(
    data: &[f64],
    mu0: f64,
    tail: Tail,
    alpha: f64,
) -> Result<TestOutcome> {
    one_sample_t(&SampleSummary::from_sample(data)?, mu0, tail, alpha)
}

/// Welch two-sample t test of the difference in means against zero
///
/// Degrees of freedom by Welch-Satterthwaite:
/// `(v1 + v2)^2 / (v1^2/(n1-1) + v2^2/(n2-1))` with `vi = si^2/ni`.
pub fn two_sample_t(
    first: &SampleSummary,
    second: &SampleSummary,
    tail: Tail,
    alpha: f64,
) -> Result<TestOutcome> {
    check_alpha(alpha)?;

    let v1 = first.std() * first.std() / first.n() as f64;
    let v2 = second.std() * second.std() / second.n() as f64;
    let se = (v1 + v2).sqrt();
    let diff = first.mean() - second.mean();

    if se == 0.0 {
        return if diff == 0.0 {
            // Flat samples with equal means: zero statistic, conventional df
            let df = (first.n() + second.n() - 2) as f64;
            t_outcome(0.0, 1.0, df, tail, alpha)
        } else {
            Ok(TestOutcome::undefined(
                "zero pooled variance with a non-zero hypothesized difference",
            ))
        };
    }

    let df = (v1 + v2) * (v1 + v2)
        / (v1 * v1 / (first.n() - 1) as f64 + v2 * v2 / (second.n() - 1) as f64);
    t_outcome(diff, se, df, tail, alpha)
}

/// Paired t test over per-subject differences
///
/// Requires equal sample sizes; the pairs are differenced and handed to
/// the one-sample machinery against a zero mean difference.
pub fn paired_t(xs: &[f64], ys: &[f64], tail: Tail, alpha: f64) -> Result<TestOutcome> {
    if xs.len() != ys.len() {
        return Err(Error::MismatchedSampleSizes {
            left: xs.len(),
            right: ys.len(),
        });
    }
    let diffs: Vec<f64> = xs.iter().zip(ys.iter()).map(|(&x, &y)| x - y).collect();
    one_sample_t_from_sample(&diffs, 0.0, tail, alpha)
}

fn t_outcome(diff: f64, se: f64, df: f64, tail: Tail, alpha: f64) -> Result<TestOutcome> {
    let statistic = if se == 0.0 {
        if diff == 0.0 {
            0.0
        } else {
            return Ok(TestOutcome::undefined(
                "zero variance with a non-zero hypothesized difference",
            ));
        }
    } else {
        diff / se
    };

    let dist = StudentsT::new(0.0, 1.0, df)
        .map_err(|e| Error::NumericalDomain(format!("failed to build t reference: {e}")))?;
    Ok(TestOutcome::Conclusive(resolve_symmetric(
        &dist,
        statistic,
        Some(df),
        tail,
        alpha,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_one_sample_t_textbook_case() {
        // t = 0.2 / (1.1 / sqrt(30)) = 0.9959, df = 29: comfortably inside
        // the acceptance region at alpha = 0.05
        let summary = SampleSummary::new(5.2, 1.1, 30).unwrap();
        let outcome = one_sample_t(&summary, 5.0, Tail::TwoSided, 0.05).unwrap();
        let result = outcome.result().unwrap();

        assert_relative_eq!(result.statistic, 0.9959, epsilon = 1e-3);
        assert_eq!(result.degrees_of_freedom, Some(29.0));
        assert_relative_eq!(result.critical_value, 2.0452, epsilon = 1e-3);
        assert!(result.p_value > 0.3 && result.p_value < 0.34);
        assert!(!result.reject);
    }

    #[test]
    fn test_raw_and_summary_agree() {
        let data = [5.3, 4.9, 5.8, 5.1, 4.6, 5.5, 5.0, 5.2, 4.8, 5.4];
        let from_raw = one_sample_t_from_sample(&data, 5.0, Tail::TwoSided, 0.05).unwrap();
        let summary = SampleSummary::from_sample(&data).unwrap();
        let from_summary = one_sample_t(&summary, 5.0, Tail::TwoSided, 0.05).unwrap();
        assert_eq!(from_raw, from_summary);
    }

    #[test]
    fn test_welch_df_bounds() {
        let a = SampleSummary::new(10.0, 1.0, 10).unwrap();
        let b = SampleSummary::new(12.0, 4.0, 20).unwrap();
        let outcome = two_sample_t(&a, &b, Tail::TwoSided, 0.05).unwrap();
        let df = outcome.result().unwrap().degrees_of_freedom.unwrap();

        // Welch df lies between min(n) - 1 and n1 + n2 - 2
        assert!(df >= 9.0 && df <= 28.0);
    }

    #[test]
    fn test_welch_reduces_to_pooled_for_equal_groups() {
        // Equal variances and sizes: df collapses to n1 + n2 - 2
        let a = SampleSummary::new(10.0, 2.0, 15).unwrap();
        let b = SampleSummary::new(11.0, 2.0, 15).unwrap();
        let outcome = two_sample_t(&a, &b, Tail::TwoSided, 0.05).unwrap();
        let df = outcome.result().unwrap().degrees_of_freedom.unwrap();
        assert_relative_eq!(df, 28.0, epsilon = 1e-9);
    }

    #[test]
    fn test_welch_detects_difference() {
        let a = SampleSummary::new(10.0, 1.0, 30).unwrap();
        let b = SampleSummary::new(12.0, 1.5, 30).unwrap();
        let outcome = two_sample_t(&a, &b, Tail::TwoSided, 0.05).unwrap();
        let result = outcome.result().unwrap();
        assert!(result.statistic < 0.0);
        assert!(result.reject);
    }

    #[test]
    fn test_paired_t_requires_equal_sizes() {
        let xs = [1.0, 2.0, 3.0];
        let ys = [1.0, 2.0];
        assert!(matches!(
            paired_t(&xs, &ys, Tail::TwoSided, 0.05),
            Err(Error::MismatchedSampleSizes { left: 3, right: 2 })
        ));
    }

    #[test]
    fn test_paired_t_consistent_shift() {
        let xs = [5.1, 6.2, 5.8, 6.0, 5.5, 6.1, 5.9, 6.3];
        let ys: Vec<f64> = xs.iter().map(|&x| x - 1.0).collect();

        // Constant shift means zero-variance differences against a zero
        // hypothesis with non-zero mean difference: undefined statistic
        let outcome = paired_t(&xs, &ys, Tail::TwoSided, 0.05).unwrap();
        assert!(outcome.result().is_none());
    }

    #[test]
    fn test_paired_t_noisy_shift() {
        let xs = [5.1, 6.2, 5.8, 6.0, 5.5, 6.1, 5.9, 6.3];
        let ys = [4.2, 5.0, 5.1, 4.9, 4.6, 5.3, 4.8, 5.5];
        let outcome = paired_t(&xs, &ys, Tail::Right, 0.05).unwrap();
        let result = outcome.result().unwrap();
        assert!(result.statistic > 0.0);
        assert!(result.reject);
        assert_eq!(result.degrees_of_freedom, Some(7.0));
    }

    #[test]
    fn test_zero_variance_one_sample() {
        let flat = SampleSummary::new(3.0, 0.0, 5).unwrap();
        let equal = one_sample_t(&flat, 3.0, Tail::TwoSided, 0.05).unwrap();
        assert_eq!(equal.result().unwrap().statistic, 0.0);

        let different = one_sample_t(&flat, 4.0, Tail::TwoSided, 0.05).unwrap();
        assert!(different.result().is_none());
    }
}
