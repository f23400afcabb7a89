//! Binary-encoded genetic algorithm engine.
//!
//! A single parameterized GA over fixed-length bit strings:
//!
//! - **Encoding**: bit string ⇄ unit-interval value, big-endian
//! - **Objectives**: decode-then-score or score-the-bits, chosen per run
//! - **Operators**: five selection schemes plus random selection, four
//!   crossovers and six mutations, composed freely through [`ga::GaConfig`]
//! - **Loop**: elitism, generational replacement over a double-buffered
//!   population, and per-generation snapshots for presentation layers
//!
//! Runs are reproducible: every random draw comes from one explicit
//! source, seeded through [`ga::GaConfig::with_seed`] or supplied to
//! [`ga::GaEngine::with_rng`].
//!
//! # Architecture
//!
//! The core is single-threaded and synchronous. Presentation layers
//! (console tables, plots) sit outside the crate and only ever see owned
//! [`ga::GenerationSnapshot`]s, never the live population buffers.
//!
//! ```
//! use u_bitga::ga::{GaConfig, GaRunner, Objective};
//!
//! let config = GaConfig::one_max().with_seed(42);
//! let result = GaRunner::run(&config, &Objective::one_max()).unwrap();
//! assert!(result.best_fitness >= result.best_history[0]);
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::GaError;
