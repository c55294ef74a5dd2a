//! Classical hypothesis tests
//!
//! Stateless z, t, and chi-square tests over raw samples, pre-summarized
//! statistics, or contingency tables. Every test is a pure function from
//! inputs to a `TestOutcome`; raw-sample and summary entry points agree
//! exactly for equal underlying statistics.
//!
//! P-values and critical values come from the exact statrs CDFs
//! (regularized incomplete gamma/beta under the hood). A coarse bucketed
//! lookup also exists as [`ApproximateCriticalValueTable`], clearly fenced
//! off from the exact path, for callers that want textbook-table output.

pub mod approx_table;
pub mod chi_square;
pub mod table;
pub mod ttest;
pub mod types;
pub mod ztest;

pub use approx_table::ApproximateCriticalValueTable;
pub use chi_square::chi_square_independence;
pub use table::ContingencyTable;
pub use ttest::{one_sample_t, one_sample_t_from_sample, paired_t, two_sample_t};
pub use types::{SampleSummary, Tail, TestOutcome, TestResult};
pub use ztest::{one_sample_z, one_sample_z_from_sample, two_sample_z};
