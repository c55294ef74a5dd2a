//! Classical moment helpers shared across the engine
//!
//! These are the plain textbook estimators (sample variance with the n-1
//! denominator). KDE bandwidth selection and the z/t tests both consume
//! them, so they live here rather than in either crate.

use crate::{Error, Result};

/// Arithmetic mean
pub fn mean(data: &[f64]) -> Result<f64> {
    if data.is_empty() {
        return Err(Error::insufficient(1, 0));
    }
    check_finite(data)?;
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Unbiased sample variance (n-1 denominator)
pub fn sample_variance(data: &[f64]) -> Result<f64> {
    if data.len() < 2 {
        return Err(Error::insufficient(2, data.len()));
    }
    let m = mean(data)?;
    let ss = data.iter().map(|&x| (x - m) * (x - m)).sum::<f64>();
    Ok(ss / (data.len() - 1) as f64)
}

/// Unbiased sample standard deviation
pub fn sample_std(data: &[f64]) -> Result<f64> {
    Ok(sample_variance(data)?.sqrt())
}

fn check_finite(data: &[f64]) -> Result<()> {
    if data.iter().any(|&x| !x.is_finite()) {
        return Err(Error::non_finite("input data"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean() {
        assert_relative_eq!(mean(&[1.0, 2.0, 3.0, 4.0]).unwrap(), 2.5);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_sample_variance() {
        // Known value: var([2, 4, 4, 4, 5, 5, 7, 9]) with n-1 = 32/7
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(sample_variance(&data).unwrap(), 32.0 / 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_std_constant_series() {
        let data = [3.0, 3.0, 3.0];
        assert_relative_eq!(sample_std(&data).unwrap(), 0.0);
    }

    #[test]
    fn test_variance_needs_two_points() {
        assert!(sample_variance(&[1.0]).is_err());
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(mean(&[1.0, f64::NAN]).is_err());
        assert!(sample_variance(&[1.0, f64::INFINITY, 2.0]).is_err());
    }
}
