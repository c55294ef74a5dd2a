//! Distribution families and their parameters
//!
//! `DistributionParameters` is an immutable value: UI-driven changes build a
//! new instance rather than mutating a shared one, so the sampling, density,
//! and contour stages always agree on what they were given.

use crate::{Error, Result};
use std::fmt;

/// Supported bivariate distribution families
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DistributionFamily {
    /// Bivariate normal with correlation `rho`
    Normal,
    /// Independent uniform on `[mu - sigma, mu + sigma]` per axis
    Uniform,
    /// Independent shifted exponential with rate `1/sigma` per axis
    Exponential,
}

impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Uniform => write!(f, "uniform"),
            Self::Exponential => write!(f, "exponential"),
        }
    }
}

/// Validated parameters for one bivariate distribution
///
/// `rho` only affects the normal family; the uniform and exponential
/// families sample and evaluate each axis independently. That asymmetry is
/// deliberate and documented rather than extended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DistributionParameters {
    family: DistributionFamily,
    mu1: f64,
    mu2: f64,
    sigma1: f64,
    sigma2: f64,
    rho: f64,
}

impl DistributionParameters {
    /// Create validated parameters for any family
    pub fn new(
        family: DistributionFamily,
        mu1: f64,
        mu2: f64,
        sigma1: f64,
        sigma2: f64,
        rho: f64,
    ) -> Result<Self> {
        for (name, value) in [("mu1", mu1), ("mu2", mu2), ("rho", rho)] {
            if !value.is_finite() {
                return Err(Error::Configuration(format!("{name} must be finite")));
            }
        }
        for (name, sigma) in [("sigma1", sigma1), ("sigma2", sigma2)] {
            if !sigma.is_finite() || sigma <= 0.0 {
                return Err(Error::Configuration(format!(
                    "{name} must be positive and finite, got {sigma}"
                )));
            }
        }
        if family == DistributionFamily::Normal && rho.abs() >= 1.0 {
            return Err(Error::Configuration(format!(
                "rho must lie strictly inside (-1, 1) for the normal family, got {rho}"
            )));
        }

        Ok(Self {
            family,
            mu1,
            mu2,
            sigma1,
            sigma2,
            rho,
        })
    }

    /// Correlated bivariate normal
    pub fn normal(mu1: f64, mu2: f64, sigma1: f64, sigma2: f64, rho: f64) -> Result<Self> {
        Self::new(DistributionFamily::Normal, mu1, mu2, sigma1, sigma2, rho)
    }

    /// Independent uniform boxes; `rho` is ignored by this family
    pub fn uniform(mu1: f64, mu2: f64, sigma1: f64, sigma2: f64) -> Result<Self> {
        Self::new(DistributionFamily::Uniform, mu1, mu2, sigma1, sigma2, 0.0)
    }

    /// Independent shifted exponentials; `rho` is ignored by this family
    pub fn exponential(mu1: f64, mu2: f64, sigma1: f64, sigma2: f64) -> Result<Self> {
        Self::new(
            DistributionFamily::Exponential,
            mu1,
            mu2,
            sigma1,
            sigma2,
            0.0,
        )
    }

    pub fn family(&self) -> DistributionFamily {
        self.family
    }

    pub fn mu1(&self) -> f64 {
        self.mu1
    }

    pub fn mu2(&self) -> f64 {
        self.mu2
    }

    pub fn sigma1(&self) -> f64 {
        self.sigma1
    }

    pub fn sigma2(&self) -> f64 {
        self.sigma2
    }

    pub fn rho(&self) -> f64 {
        self.rho
    }
}

impl fmt::Display for DistributionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}(mu=({:.3}, {:.3}), sigma=({:.3}, {:.3}), rho={:.3})",
            self.family, self.mu1, self.mu2, self.sigma1, self.sigma2, self.rho
        )
    }
}
