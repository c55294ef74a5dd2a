//! Grid domain and evaluated-density containers

use nalgebra::DMatrix;
use statlab_core::{Error, Result};
use std::fmt;

/// Rectangular evaluation domain `[x_min, x_max] x [y_min, y_max]`
///
/// The caller sizes the bounds relative to the family's effective support
/// (wider on the right for the exponential's one-sided tail).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridBounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl GridBounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Result<Self> {
        for (name, v) in [
            ("x_min", x_min),
            ("x_max", x_max),
            ("y_min", y_min),
            ("y_max", y_max),
        ] {
            if !v.is_finite() {
                return Err(Error::Configuration(format!("{name} must be finite")));
            }
        }
        if x_min >= x_max || y_min >= y_max {
            return Err(Error::Configuration(format!(
                "bounds must be ordered, got x=[{x_min}, {x_max}], y=[{y_min}, {y_max}]"
            )));
        }
        Ok(Self {
            x_min,
            x_max,
            y_min,
            y_max,
        })
    }

    pub fn x_min(&self) -> f64 {
        self.x_min
    }

    pub fn x_max(&self) -> f64 {
        self.x_max
    }

    pub fn y_min(&self) -> f64 {
        self.y_min
    }

    pub fn y_max(&self) -> f64 {
        self.y_max
    }
}

/// Densities evaluated on an `R x R` grid over some bounds
///
/// `value(ix, iy)` is the density at `(x_coordinate(ix), y_coordinate(iy))`.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityGrid {
    bounds: GridBounds,
    resolution: usize,
    values: DMatrix<f64>,
}

impl DensityGrid {
    /// Wrap evaluated values; rejects non-finite or negative cells
    pub fn new(bounds: GridBounds, resolution: usize, values: DMatrix<f64>) -> Result<Self> {
        if resolution < 2 {
            return Err(Error::Configuration(format!(
                "grid resolution must be at least 2, got {resolution}"
            )));
        }
        if values.nrows() != resolution || values.ncols() != resolution {
            return Err(Error::dimension_mismatch(
                "density grid",
                resolution * resolution,
                values.nrows() * values.ncols(),
            ));
        }
        if values.iter().any(|&v| !v.is_finite() || v < 0.0) {
            return Err(Error::non_finite("density grid"));
        }
        Ok(Self {
            bounds,
            resolution,
            values,
        })
    }

    pub fn bounds(&self) -> GridBounds {
        self.bounds
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    /// Density at grid node `(ix, iy)`
    pub fn value(&self, ix: usize, iy: usize) -> f64 {
        self.values[(ix, iy)]
    }

    /// Data-space x coordinate of column `ix`
    pub fn x_coordinate(&self, ix: usize) -> f64 {
        let step = (self.bounds.x_max - self.bounds.x_min) / (self.resolution - 1) as f64;
        self.bounds.x_min + step * ix as f64
    }

    /// Data-space y coordinate of row `iy`
    pub fn y_coordinate(&self, iy: usize) -> f64 {
        let step = (self.bounds.y_max - self.bounds.y_min) / (self.resolution - 1) as f64;
        self.bounds.y_min + step * iy as f64
    }

    pub fn min_value(&self) -> f64 {
        self.values
            .iter()
            .fold(f64::INFINITY, |acc, &v| acc.min(v))
    }

    pub fn max_value(&self) -> f64 {
        self.values
            .iter()
            .fold(f64::NEG_INFINITY, |acc, &v| acc.max(v))
    }
}

impl fmt::Display for DensityGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "DensityGrid({r}x{r}, x=[{:.3}, {:.3}], y=[{:.3}, {:.3}])",
            self.bounds.x_min,
            self.bounds.x_max,
            self.bounds.y_min,
            self.bounds.y_max,
            r = self.resolution
        )
    }
}
