//! Shared test inputs and outputs

use statlab_core::{mean, sample_std, Error, Result};
use statrs::distribution::ContinuousCDF;
use std::fmt;

/// Which tail(s) of the reference distribution the p-value integrates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tail {
    /// Both tails; critical value at `1 - alpha/2`
    TwoSided,
    /// Lower tail; critical value at `alpha`
    Left,
    /// Upper tail; critical value at `1 - alpha`
    Right,
}

impl fmt::Display for Tail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoSided => write!(f, "two-tailed"),
            Self::Left => write!(f, "left-tailed"),
            Self::Right => write!(f, "right-tailed"),
        }
    }
}

/// Pre-summarized sample statistics
///
/// Tests accept either a raw sample or this summary; both routes yield
/// identical results when the underlying statistics agree.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleSummary {
    mean: f64,
    std: f64,
    n: usize,
}

impl SampleSummary {
    pub fn new(mean: f64, std: f64, n: usize) -> Result<Self> {
        if n < 2 {
            return Err(Error::insufficient(2, n));
        }
        if !mean.is_finite() || !std.is_finite() || std < 0.0 {
            return Err(Error::Configuration(format!(
                "summary statistics must be finite with std >= 0, got mean={mean}, std={std}"
            )));
        }
        Ok(Self { mean, std, n })
    }

    /// Summarize a raw sample (unbiased standard deviation)
    pub fn from_sample(data: &[f64]) -> Result<Self> {
        if data.len() < 2 {
            return Err(Error::insufficient(2, data.len()));
        }
        Self::new(mean(data)?, sample_std(data)?, data.len())
    }

    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn std(&self) -> f64 {
        self.std
    }

    pub fn n(&self) -> usize {
        self.n
    }
}

/// Outcome of one hypothesis test
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestResult {
    pub statistic: f64,
    pub degrees_of_freedom: Option<f64>,
    pub critical_value: f64,
    pub p_value: f64,
    pub reject: bool,
}

/// A test either concludes, or reports that its statistic is undefined
///
/// The undefined channel covers zero-spread inputs facing a non-zero
/// hypothesized difference; the statistic has no finite value there and
/// must never leak out as NaN.
#[derive(Debug, Clone, PartialEq)]
pub enum TestOutcome {
    Conclusive(TestResult),
    Undefined { reason: String },
}

impl TestOutcome {
    pub fn undefined(reason: impl Into<String>) -> Self {
        Self::Undefined {
            reason: reason.into(),
        }
    }

    /// The result, if the test concluded
    pub fn result(&self) -> Option<&TestResult> {
        match self {
            Self::Conclusive(result) => Some(result),
            Self::Undefined { .. } => None,
        }
    }
}

/// Validate a significance level
pub(crate) fn check_alpha(alpha: f64) -> Result<()> {
    if !alpha.is_finite() || alpha <= 0.0 || alpha >= 1.0 {
        return Err(Error::Configuration(format!(
            "alpha must lie strictly inside (0, 1), got {alpha}"
        )));
    }
    Ok(())
}

/// Resolve a statistic against a symmetric reference distribution
///
/// Shared by the z and t tests; the chi-square test has its own one-sided
/// resolution. `reject` holds iff `p_value < alpha`.
pub(crate) fn resolve_symmetric<D: ContinuousCDF<f64, f64>>(
    dist: &D,
    statistic: f64,
    degrees_of_freedom: Option<f64>,
    tail: Tail,
    alpha: f64,
) -> TestResult {
    let p_value = match tail {
        Tail::TwoSided => 2.0 * (1.0 - dist.cdf(statistic.abs())),
        Tail::Left => dist.cdf(statistic),
        Tail::Right => 1.0 - dist.cdf(statistic),
    }
    .clamp(0.0, 1.0);

    let critical_value = match tail {
        Tail::TwoSided => dist.inverse_cdf(1.0 - alpha / 2.0),
        Tail::Left => dist.inverse_cdf(alpha),
        Tail::Right => dist.inverse_cdf(1.0 - alpha),
    };

    TestResult {
        statistic,
        degrees_of_freedom,
        critical_value,
        p_value,
        reject: p_value < alpha,
    }
}
