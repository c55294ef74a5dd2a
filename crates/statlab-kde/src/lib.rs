//! Univariate Gaussian kernel density estimation
//!
//! Smooths a sample into a continuous density curve by summing Gaussian
//! kernels centered at each observation. Bandwidth defaults to Silverman's
//! rule of thumb; callers with better knowledge of the data can pass an
//! explicit bandwidth.

use statlab_core::{sample_std, Error, Result};
use std::f64::consts::PI;

/// Silverman's rule-of-thumb bandwidth: `1.06 * s * n^(-1/5)`
///
/// Degenerate samples (fewer than two points, or zero spread) have no
/// usable bandwidth and are rejected.
pub fn silverman_bandwidth(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::DegenerateInput(format!(
            "bandwidth selection needs at least 2 points, got {}",
            data.len()
        )));
    }
    let s = sample_std(data)?;
    if s == 0.0 {
        return Err(Error::DegenerateInput(
            "bandwidth selection needs non-zero spread".to_string(),
        ));
    }
    Ok(1.06 * s * (data.len() as f64).powf(-0.2))
}

/// Density curve at `eval_points`, bandwidth from Silverman's rule
pub fn density(data: &[f64], eval_points: &[f64]) -> Result<Vec<f64>> {
    let h = silverman_bandwidth(data)?;
    density_with_bandwidth(data, h, eval_points)
}

/// Density curve at `eval_points` with an explicit bandwidth `h > 0`
pub fn density_with_bandwidth(data: &[f64], h: f64, eval_points: &[f64]) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(Error::insufficient(1, 0));
    }
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::Configuration(format!(
            "bandwidth must be positive and finite, got {h}"
        )));
    }
    if data.iter().any(|&x| !x.is_finite()) {
        return Err(Error::non_finite("kde input"));
    }

    let norm = 1.0 / (data.len() as f64 * h);
    Ok(eval_points
        .iter()
        .map(|&x| {
            let sum: f64 = data.iter().map(|&xi| gaussian_kernel((x - xi) / h)).sum();
            norm * sum
        })
        .collect())
}

/// Standard Gaussian kernel `K(u) = exp(-u^2 / 2) / sqrt(2 pi)`
fn gaussian_kernel(u: f64) -> f64 {
    (-0.5 * u * u).exp() / (2.0 * PI).sqrt()
}
