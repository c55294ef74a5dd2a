//! End-to-end runs through the engine, seeded for stability
//!
//! Exercises the flow the rendering layer drives: parameters in, samples,
//! density grids, contours, correlations, KDE curves, and test results out.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use statlab::prelude::*;

#[test]
fn normal_family_full_pipeline() {
    let params = DistributionParameters::normal(0.0, 0.0, 1.0, 1.0, 0.6).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(21);

    let samples = statlab::sampling::generate(&params, 5000, &mut rng).unwrap();
    assert_eq!(samples.len(), 5000);

    // Correlation close to the target rho
    let r = statlab::correlation::pearson(&samples.xs(), &samples.ys()).unwrap();
    assert!((r - 0.6).abs() < 0.05);

    // Density grid with contours at fractions of the peak
    let bounds = GridBounds::new(-3.5, 3.5, -3.5, 3.5).unwrap();
    let grid = statlab::density::evaluate_grid(&params, bounds, 121).unwrap();
    let peak = grid.max_value();
    let levels = [peak * 0.75, peak * 0.5, peak * 0.25, peak * 2.0];
    let contours = statlab::contour::extract(&grid, &levels).unwrap();

    assert!(!contours[0].is_empty());
    assert!(!contours[1].is_empty());
    assert!(!contours[2].is_empty());
    // Above the grid maximum: empty set, not an error
    assert!(contours[3].is_empty());

    // A KDE over the x marginal peaks near zero
    let eval: Vec<f64> = (0..71).map(|i| -3.5 + i as f64 * 0.1).collect();
    let curve = statlab::kde::density(&samples.xs(), &eval).unwrap();
    let peak_index = curve
        .iter()
        .enumerate()
        .max_by(|a, b| a.1.total_cmp(b.1))
        .map(|(i, _)| i)
        .unwrap();
    assert!(eval[peak_index].abs() < 0.5);
}

#[test]
fn sampled_means_pass_their_own_t_test() {
    let params = DistributionParameters::normal(5.0, 0.0, 1.0, 1.0, 0.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(33);
    let samples = statlab::sampling::generate(&params, 2000, &mut rng).unwrap();

    // The x marginal really has mean 5, so the statistic stays small
    let outcome = statlab::inference::one_sample_t_from_sample(
        &samples.xs(),
        5.0,
        Tail::TwoSided,
        0.05,
    )
    .unwrap();
    let result = outcome.result().unwrap();
    assert!(result.statistic.abs() < 4.0, "unexpected drift: {result:?}");

    // Against a wrong hypothesis it should reject decisively
    let outcome = statlab::inference::one_sample_t_from_sample(
        &samples.xs(),
        5.5,
        Tail::TwoSided,
        0.05,
    )
    .unwrap();
    assert!(outcome.result().unwrap().reject);
}

#[test]
fn correlation_matrix_over_generated_series() {
    let params = DistributionParameters::normal(0.0, 0.0, 1.0, 1.0, 0.9).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(55);
    let samples = statlab::sampling::generate(&params, 3000, &mut rng).unwrap();

    let series = [
        NamedSeries::new("x", samples.xs()),
        NamedSeries::new("y", samples.ys()),
    ];
    let matrix = statlab::correlation::correlation_matrix(&series).unwrap();

    assert_eq!(matrix.value(0, 0), 1.0);
    assert_eq!(matrix.value(1, 1), 1.0);
    assert_eq!(matrix.value(0, 1), matrix.value(1, 0));
    assert!((matrix.value(0, 1) - 0.9).abs() < 0.05);
}

#[test]
fn exponential_family_density_and_support_agree() {
    let params = DistributionParameters::exponential(0.0, 0.0, 1.0, 1.0).unwrap();
    let mut rng = ChaCha8Rng::seed_from_u64(77);
    let samples = statlab::sampling::generate(&params, 1000, &mut rng).unwrap();
    assert!(samples.points().iter().all(|&(x, y)| x >= 0.0 && y >= 0.0));

    let bounds = GridBounds::new(-1.0, 6.0, -1.0, 6.0).unwrap();
    let grid = statlab::density::evaluate_grid(&params, bounds, 71).unwrap();
    assert!(grid.min_value() == 0.0);
    assert!(grid.max_value() <= 1.0 + 1e-12);
}

#[test]
fn contingency_synthesis_feeds_independence_test() {
    let table = ContingencyTable::from_marginals(&[0.4, 0.6], &[0.5, 0.5], 500).unwrap();
    let result = statlab::inference::chi_square_independence(&table, 0.05).unwrap();
    assert!(!result.reject);
    assert_eq!(result.degrees_of_freedom, Some(1.0));
}
