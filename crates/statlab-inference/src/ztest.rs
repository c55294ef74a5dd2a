//! One- and two-sample z tests against the standard normal reference

use crate::types::{check_alpha, resolve_symmetric, SampleSummary, Tail, TestOutcome};
use statlab_core::{Error, Result};
use statrs::distribution::Normal;

/// One-sample z test of `mean` against `mu0`
///
/// The summary's std plays the role of the known population sigma. A
/// zero-spread sample against an equal hypothesis concludes with a zero
/// statistic; against a different hypothesis the statistic is undefined.
pub fn one_sample_z(
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
    z_outcome(diff, se, tail, alpha)
}

/// One-sample z test over a raw sample; identical to the summary route
pub fn one_sample_z_from_sample(
    data: &[f64],
    mu0: f64,
    tail: Tail,
    alpha: f64,
) -> Result<TestOutcome> {
    one_sample_z(&SampleSummary::from_sample(data)?, mu0, tail, alpha)
}

/// Two-sample z test of the difference in means against zero
pub fn two_sample_z(
    first: &SampleSummary,
    second: &SampleSummary,
    tail: Tail,
    alpha: f64,
) -> Result<TestOutcome> {
    check_alpha(alpha)?;

    let var1 = first.std() * first.std() / first.n() as f64;
    let var2 = second.std() * second.std() / second.n() as f64;
    let se = (var1 + var2).sqrt();
    let diff = first.mean() - second.mean();
    z_outcome(diff, se, tail, alpha)
}

fn z_outcome(diff: f64, se: f64, tail: Tail, alpha: f64) -> Result<TestOutcome> {
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

    // Unit normal construction cannot fail, but the error path stays typed
    let normal = Normal::new(0.0, 1.0)
        .map_err(|e| Error::NumericalDomain(format!("failed to build normal reference: {e}")))?;
    Ok(TestOutcome::Conclusive(resolve_symmetric(
        &normal, statistic, None, tail, alpha,
    )))
}
