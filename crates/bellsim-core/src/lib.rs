//! # bellsim-core
//!
//! **A hidden-variable Bell-test experiment you can run on your laptop.**
//!
//! `bellsim-core` simulates a paired-particle experiment: an anti-correlated
//! pair is emitted, each arm is measured at a detector angle, and every trial
//! yields a signed tag per arm. Many trials are tabulated into an 8-way
//! frequency table, from which a correlation coefficient is reconstructed —
//! from the measured frequencies alone — and converges to the quantum-style
//! prediction `-cos(2(φ1-φ2))`.
//!
//! ## Quick Start
//!
//! ```
//! use bellsim_core::{Lcg64, estimate_correlation, nominal_correlation, run_series};
//! use std::f64::consts::FRAC_PI_8;
//!
//! let mut rng = Lcg64::new(0);
//! let table = run_series(&mut rng, 0.0, FRAC_PI_8, 100_000);
//! assert_eq!(table.total(), 100_000);
//!
//! let measured = estimate_correlation(&table, 0.0, FRAC_PI_8);
//! let nominal = nominal_correlation(0.0, FRAC_PI_8);
//! assert!((measured - nominal).abs() < 0.05);
//! ```
//!
//! ## Architecture
//!
//! Random source → event generator → series aggregator → correlation estimator
//!
//! Each stage only feeds forward. The random source is a replaceable strategy
//! behind the [`RandomSource`] trait; two generators ship ([`Lcg64`],
//! [`Lehmer16`]) and their streams must never be mixed within one run. All
//! state is explicitly owned and `&mut`-threaded — no globals — so seeded
//! streams are reproducible and can coexist.

pub mod estimator;
pub mod event;
pub mod series;
pub mod source;

pub use estimator::{estimate_correlation, nominal_correlation};
pub use event::{Observation, Orientation, Tag, assign_tag, generate_observation, sample_orientation};
pub use series::{FrequencyTable, run_series};
pub use source::{GeneratorInfo, GeneratorKind, Lcg64, Lehmer16, RandomSource, new_random_source};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
