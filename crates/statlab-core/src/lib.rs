//! Core types for the statlab engine
//!
//! This crate provides the shared vocabulary of the engine: the unified
//! error type, validated distribution parameters, the immutable sample
//! container, and classical moment helpers. Everything here is a pure
//! value type; no component holds mutable shared state.

pub mod error;
pub mod moments;
pub mod params;
pub mod sample;

pub use error::{Error, Result};
pub use moments::{mean, sample_std, sample_variance};
pub use params::{DistributionFamily, DistributionParameters};
pub use sample::SampleSet;
