//! statlab — statistical sampling, density/contour, correlation, KDE, and
//! hypothesis-testing engine
//!
//! A facade over the workspace crates. Everything here is a pure function
//! of its explicit inputs; the only injected effect is the RNG handed to
//! the sample generator. Outputs are abstract numeric values for a
//! rendering layer to consume — no pixels, no screen coordinates.
//!
//! # Example
//!
//! ```rust
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//! use statlab::prelude::*;
//!
//! let params = DistributionParameters::normal(0.0, 0.0, 1.0, 1.0, 0.8).unwrap();
//! let mut rng = ChaCha8Rng::seed_from_u64(1);
//!
//! // Sample pairs and measure their correlation
//! let samples = statlab::sampling::generate(&params, 2000, &mut rng).unwrap();
//! let r = statlab::correlation::pearson(&samples.xs(), &samples.ys()).unwrap();
//! assert!(r > 0.7);
//!
//! // Evaluate the joint density and pull iso-contours from it
//! let bounds = GridBounds::new(-3.0, 3.0, -3.0, 3.0).unwrap();
//! let grid = statlab::density::evaluate_grid(&params, bounds, 101).unwrap();
//! let contours = statlab::contour::extract(&grid, &[grid.max_value() * 0.5]).unwrap();
//! assert!(!contours[0].is_empty());
//! ```

pub use statlab_contour as contour;
pub use statlab_correlation as correlation;
pub use statlab_density as density;
pub use statlab_inference as inference;
pub use statlab_kde as kde;
pub use statlab_sampling as sampling;

pub use statlab_core::{DistributionFamily, DistributionParameters, Error, Result, SampleSet};

/// Commonly used types and functions
pub mod prelude {
    pub use statlab_contour::Contour;
    pub use statlab_core::{
        DistributionFamily, DistributionParameters, Error, Result, SampleSet,
    };
    pub use statlab_correlation::{CorrelationMatrix, NamedSeries};
    pub use statlab_density::{DensityGrid, GridBounds};
    pub use statlab_inference::{
        ContingencyTable, SampleSummary, Tail, TestOutcome, TestResult,
    };
}
