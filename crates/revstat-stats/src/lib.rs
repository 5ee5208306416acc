//! Statistical kernels for the revstat analysis engine.
//!
//! This crate provides the two-sample comparison statistics used by the
//! reviewer-level analysis, with no knowledge of datasets, metrics, or I/O:
//!
//! - **Descriptive statistics**: count, mean, sample SD, median, IQR, min, max
//! - **Effect sizes**: Hedges' g (bias-corrected standardized mean difference)
//! - **Percentile bootstrap**: resampling confidence intervals for the mean
//!   difference, driven by a caller-owned random number generator
//! - **Rank test**: two-sided Mann–Whitney U as a distribution-free
//!   sensitivity check
//! - **Logistic model**: single-predictor logistic fit on two-group binary
//!   counts, with Wald odds-ratio intervals
//!
//! # Conventions
//!
//! All kernels operate on slices of **finite** `f64` values; filtering missing
//! and non-finite observations is the caller's responsibility. Statistics that
//! are undefined for the given input (too few observations, zero variance)
//! are reported as `None` rather than `NaN` so degeneracy is explicit.
//!
//! Group order matters: every difference is reported as treatment − baseline.
//!
//! # Modules
//!
//! - [`descriptive`]: per-group summary statistics
//! - [`effect_size`]: Hedges' g and raw mean differences
//! - [`bootstrap`]: percentile-bootstrap intervals
//! - [`rank_test`]: Mann–Whitney U test
//! - [`logistic`]: two-group logistic regression
//!
//! # Examples
//!
//! ```
//! use rand::SeedableRng as _;
//! use revstat_stats::{bootstrap, effect_size};
//!
//! let baseline = [2.0, 4.0, 6.0, 8.0, 10.0];
//! let treatment = [12.0, 14.0, 16.0, 18.0, 20.0];
//!
//! let g = effect_size::hedges_g(&baseline, &treatment).unwrap();
//! assert!(g > 0.0);
//!
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(20260209);
//! let ci = bootstrap::bootstrap_mean_diff(&baseline, &treatment, 1000, &mut rng);
//! assert_eq!(ci.diff, Some(10.0));
//! ```

pub mod bootstrap;
pub mod descriptive;
pub mod effect_size;
pub mod logistic;
