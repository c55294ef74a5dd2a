//! Sample-pair generation per distribution family

use rand::Rng;
use statlab_core::{DistributionFamily, DistributionParameters, Error, Result, SampleSet};
use std::f64::consts::PI;
use tracing::debug;

/// Retries allowed for a single point before the batch is abandoned.
/// A retry only fires on a non-finite draw, which the u1 guard already
/// makes vanishingly rare.
const MAX_RETRIES_PER_POINT: usize = 32;

/// Generate exactly `n` sample pairs from the given family
///
/// A draw that comes out non-finite is retried in place rather than
/// aborting the batch, so the output always holds exactly `n` points.
pub fn generate<R: Rng + ?Sized>(
    params: &DistributionParameters,
    n: usize,
    rng: &mut R,
) -> Result<SampleSet> {
    if n == 0 {
        return Err(Error::Configuration(
            "sample count must be positive".to_string(),
        ));
    }

    let draw: fn(&DistributionParameters, &mut R) -> (f64, f64) = match params.family() {
        DistributionFamily::Normal => draw_normal,
        DistributionFamily::Uniform => draw_uniform,
        DistributionFamily::Exponential => draw_exponential,
    };

    let mut points = Vec::with_capacity(n);
    for _ in 0..n {
        points.push(draw_finite(params, rng, draw)?);
    }
    Ok(SampleSet::new(points))
}

fn draw_finite<R: Rng + ?Sized>(
    params: &DistributionParameters,
    rng: &mut R,
    draw: fn(&DistributionParameters, &mut R) -> (f64, f64),
) -> Result<(f64, f64)> {
    for attempt in 0..MAX_RETRIES_PER_POINT {
        let (x, y) = draw(params, rng);
        if x.is_finite() && y.is_finite() {
            return Ok((x, y));
        }
        debug!(attempt, family = %params.family(), "retrying non-finite draw");
    }
    Err(Error::non_finite("variate generation"))
}

/// Correlated bivariate normal via Box-Muller
///
/// Two independent uniforms become two independent standard normals; the
/// second is then mixed with the first through `rho` and `sqrt(1 - rho^2)`.
fn draw_normal<R: Rng + ?Sized>(params: &DistributionParameters, rng: &mut R) -> (f64, f64) {
    // gen() is [0, 1); keep u1 away from 0 so ln stays in-domain
    let u1 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2 = rng.gen::<f64>();

    let radius = (-2.0 * u1.ln()).sqrt();
    let z1 = radius * (2.0 * PI * u2).cos();
    let z2 = radius * (2.0 * PI * u2).sin();

    let rho = params.rho();
    let x = params.mu1() + params.sigma1() * z1;
    let y = params.mu2() + params.sigma2() * (rho * z1 + (1.0 - rho * rho).sqrt() * z2);
    (x, y)
}

/// Independent uniform on `[mu - sigma, mu + sigma]` per axis; rho ignored
fn draw_uniform<R: Rng + ?Sized>(params: &DistributionParameters, rng: &mut R) -> (f64, f64) {
    let x = params.mu1() + params.sigma1() * (2.0 * rng.gen::<f64>() - 1.0);
    let y = params.mu2() + params.sigma2() * (2.0 * rng.gen::<f64>() - 1.0);
    (x, y)
}

/// Independent shifted exponential per axis via inverse transform; rho ignored
fn draw_exponential<R: Rng + ?Sized>(params: &DistributionParameters, rng: &mut R) -> (f64, f64) {
    let u1 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let u2 = rng.gen::<f64>().max(f64::MIN_POSITIVE);
    let x = params.mu1() - params.sigma1() * u1.ln();
    let y = params.mu2() - params.sigma2() * u2.ln();
    (x, y)
}
