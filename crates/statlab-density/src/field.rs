//! Closed-form joint densities per family

use crate::{DensityGrid, GridBounds};
use nalgebra::DMatrix;
use statlab_core::{DistributionFamily, DistributionParameters, Result};
use std::f64::consts::PI;

/// Evaluate the family's joint density on an `R x R` grid
///
/// Grid validation (resolution, finiteness, non-negativity) happens in
/// `DensityGrid::new`, so a formula that leaves its domain is surfaced as
/// a typed error rather than a NaN cell.
pub fn evaluate_grid(
    params: &DistributionParameters,
    bounds: GridBounds,
    resolution: usize,
) -> Result<DensityGrid> {
    if resolution < 2 {
        return Err(statlab_core::Error::Configuration(format!(
            "grid resolution must be at least 2, got {resolution}"
        )));
    }

    let density: fn(&DistributionParameters, f64, f64) -> f64 = match params.family() {
        DistributionFamily::Normal => bivariate_normal,
        DistributionFamily::Uniform => uniform_box,
        DistributionFamily::Exponential => exponential_product,
    };

    let step_x = (bounds.x_max() - bounds.x_min()) / (resolution - 1) as f64;
    let step_y = (bounds.y_max() - bounds.y_min()) / (resolution - 1) as f64;
    let values = DMatrix::from_fn(resolution, resolution, |ix, iy| {
        let x = bounds.x_min() + step_x * ix as f64;
        let y = bounds.y_min() + step_y * iy as f64;
        density(params, x, y)
    });

    DensityGrid::new(bounds, resolution, values)
}

/// Standard bivariate normal density with correlation rho
fn bivariate_normal(params: &DistributionParameters, x: f64, y: f64) -> f64 {
    let rho = params.rho();
    let one_minus_rho2 = 1.0 - rho * rho;
    let z1 = (x - params.mu1()) / params.sigma1();
    let z2 = (y - params.mu2()) / params.sigma2();

    let norm = 1.0 / (2.0 * PI * params.sigma1() * params.sigma2() * one_minus_rho2.sqrt());
    let exponent = -(z1 * z1 + z2 * z2 - 2.0 * rho * z1 * z2) / (2.0 * one_minus_rho2);
    norm * exponent.exp()
}

/// Constant density inside the axis-aligned box, zero outside
fn uniform_box(params: &DistributionParameters, x: f64, y: f64) -> f64 {
    let inside = (x - params.mu1()).abs() <= params.sigma1()
        && (y - params.mu2()).abs() <= params.sigma2();
    if inside {
        1.0 / (4.0 * params.sigma1() * params.sigma2())
    } else {
        0.0
    }
}

/// Product of shifted exponentials with rates 1/sigma, one-sided support
fn exponential_product(params: &DistributionParameters, x: f64, y: f64) -> f64 {
    if x < params.mu1() || y < params.mu2() {
        return 0.0;
    }
    let lambda1 = 1.0 / params.sigma1();
    let lambda2 = 1.0 / params.sigma2();
    lambda1 * lambda2 * (-lambda1 * (x - params.mu1()) - lambda2 * (y - params.mu2())).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use statlab_core::DistributionParameters;

    fn standard_bounds() -> GridBounds {
        GridBounds::new(-3.0, 3.0, -3.0, 3.0).unwrap()
    }

    #[test]
    fn test_normal_peak_at_mean() {
        let params = DistributionParameters::normal(0.0, 0.0, 1.0, 1.0, 0.0).unwrap();
        let grid = evaluate_grid(&params, standard_bounds(), 61).unwrap();

        // Node 30 sits exactly at the origin for these bounds
        let peak = grid.value(30, 30);
        assert_relative_eq!(peak, 1.0 / (2.0 * PI), epsilon = 1e-12);
        assert_relative_eq!(grid.max_value(), peak);
    }

    #[test]
    fn test_normal_with_correlation_matches_formula() {
        let params = DistributionParameters::normal(0.0, 0.0, 1.0, 1.0, 0.6).unwrap();
        let grid = evaluate_grid(&params, standard_bounds(), 61).unwrap();

        // f(1, 1) for rho = 0.6: exp(-(1 + 1 - 1.2)/(2 * 0.64)) / (2 pi sqrt(0.64))
        let expected = (-0.8 / 1.28_f64).exp() / (2.0 * PI * 0.8);
        let v = grid.value(40, 40); // x = y = 1.0
        assert_relative_eq!(v, expected, epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_box_height_and_support() {
        let params = DistributionParameters::uniform(0.0, 0.0, 1.0, 2.0).unwrap();
        let bounds = GridBounds::new(-3.0, 3.0, -3.0, 3.0).unwrap();
        let grid = evaluate_grid(&params, bounds, 61).unwrap();

        // Inside the box
        assert_relative_eq!(grid.value(30, 30), 1.0 / 8.0);
        // Outside along x
        assert_relative_eq!(grid.value(0, 30), 0.0);
        assert_relative_eq!(grid.max_value(), 1.0 / 8.0);
    }

    #[test]
    fn test_exponential_support_and_peak() {
        let params = DistributionParameters::exponential(0.0, 0.0, 1.0, 1.0).unwrap();
        let bounds = GridBounds::new(-1.0, 5.0, -1.0, 5.0).unwrap();
        let grid = evaluate_grid(&params, bounds, 61).unwrap();

        // Below the support on either axis the density is zero
        assert_relative_eq!(grid.value(0, 30), 0.0);
        assert_relative_eq!(grid.value(30, 0), 0.0);
        // Peak at the support corner: lambda1 * lambda2 = 1
        assert_relative_eq!(grid.value(10, 10), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_all_values_finite_non_negative() {
        let params = DistributionParameters::normal(0.0, 0.0, 0.2, 0.2, 0.95).unwrap();
        let grid = evaluate_grid(&params, standard_bounds(), 41).unwrap();
        for ix in 0..41 {
            for iy in 0..41 {
                let v = grid.value(ix, iy);
                assert!(v.is_finite() && v >= 0.0);
            }
        }
    }

    #[test]
    fn test_tiny_resolution_rejected() {
        let params = DistributionParameters::normal(0.0, 0.0, 1.0, 1.0, 0.0).unwrap();
        assert!(evaluate_grid(&params, standard_bounds(), 1).is_err());
    }
}
