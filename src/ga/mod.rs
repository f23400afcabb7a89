//! Binary-encoded Genetic Algorithm.
//!
//! Candidate solutions are fixed-length bit strings. An [`Objective`]
//! either decodes them to a real value before scoring or scores the bits
//! directly. Higher fitness is better.
//!
//! # Key Types
//!
//! - [`GaConfig`]: Run parameters, strategy choices, and profiles
//! - [`GaEngine`]: Step-by-step engine owning the double-buffered population
//! - [`GaRunner`]: Executes a complete run in one call
//! - [`GaResult`]: Final best individual, population, and fitness history
//! - [`GenerationSnapshot`]: Owned per-generation summary for presentation
//!
//! # Operators
//!
//! - [`Selection`]: roulette, tournament, rank, random, canonical, steady
//! - [`Crossover`]: single-point, two-point, uniform, arithmetic
//! - [`Mutation`]: bit-flip, random-reset, swap, scramble, inversion, Gaussian
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod crossover;
pub mod encoding;
pub mod mutation;
mod objective;
mod population;
mod runner;
mod selection;

pub use config::GaConfig;
pub use crossover::{single_point_at, two_point_at, Crossover};
pub use encoding::{decode, encode, encode_into, max_value, Chromosome, EXACT_BITS};
pub use mutation::Mutation;
pub use objective::{Interval, Objective};
pub use population::Population;
pub use runner::{GaEngine, GaResult, GaRunner, GenerationSnapshot, Phase, RankedIndividual};
pub use selection::Selection;
