//! Correlated random variate generation
//!
//! Produces `SampleSet`s of `(x, y)` pairs for a chosen distribution
//! family. The RNG is injected by the caller, so generation is reentrant
//! and seedable; the generator itself holds no state. Callers must not
//! share one RNG instance across concurrent calls without external
//! synchronization.
//!
//! The normal family is the only one that honors `rho` (via a Box-Muller
//! pair and a linear correlation step); uniform and exponential draws are
//! independent per axis, a documented simplification.

pub mod generator;

pub use generator::generate;
