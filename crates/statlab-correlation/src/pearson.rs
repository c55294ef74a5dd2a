//! Pairwise Pearson correlation

use statlab_core::{Error, Result};

/// Pearson correlation coefficient in `[-1, 1]`
///
/// A series with zero variance yields `Ok(0.0)` — the documented fallback
/// for degenerate-but-legal input — rather than an error. Length mismatch
/// and undersized input remain errors.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Result<f64> {
    if xs.len() != ys.len() {
        return Err(Error::dimension_mismatch(
            "correlation series",
            xs.len(),
            ys.len(),
        ));
    }
    if xs.len() < 2 {
        return Err(Error::insufficient(2, xs.len()));
    }
    if xs.iter().chain(ys.iter()).any(|&v| !v.is_finite()) {
        return Err(Error::non_finite("correlation input"));
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let mut numerator = 0.0;
    let mut sum_sq_x = 0.0;
    let mut sum_sq_y = 0.0;

    for (&x, &y) in xs.iter().zip(ys.iter()) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        numerator += dx * dy;
        sum_sq_x += dx * dx;
        sum_sq_y += dy * dy;
    }

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == 0.0 {
        return Ok(0.0);
    }

    // Clamp against rounding drift just past the closed interval
    Ok((numerator / denominator).clamp(-1.0, 1.0))
}
