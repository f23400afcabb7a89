//! Error type for the GA engine.
//!
//! Every variant is a configuration error: the engine rejects bad input
//! at construction time and never fails once a run has started.

use thiserror::Error;

/// Errors raised while building a GA run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GaError {
    /// Population must hold at least two individuals.
    #[error("population_size must be at least 2, got {0}")]
    PopulationTooSmall(usize),

    /// Chromosomes must carry at least one bit.
    #[error("chromosome_length must be at least 1")]
    EmptyChromosome,

    /// A run needs at least one generation.
    #[error("max_generations must be at least 1")]
    NoGenerations,

    /// A probability parameter fell outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// More elites requested than individuals available.
    #[error("elite_count {elite} exceeds population_size {population}")]
    TooManyElites { elite: usize, population: usize },

    /// Tournament selection with an empty tournament.
    #[error("tournament size must be at least 1")]
    EmptyTournament,

    /// Gaussian sigma must be finite and non-negative.
    #[error("mutation_sigma must be finite and non-negative, got {0}")]
    InvalidSigma(f64),

    /// A strategy name did not match any known operator.
    #[error("unknown {kind} strategy: {name:?}")]
    UnknownStrategy { kind: &'static str, name: String },

    /// A real-valued operator was paired with an objective that scores bits directly.
    #[error("{operator} requires a decode-then-score objective")]
    RequiresDecodedObjective { operator: &'static str },

    /// A seeded initial population does not match the configured shape.
    #[error("initial population must be {expected_size} chromosomes of {expected_length} bits")]
    PopulationShape {
        expected_size: usize,
        expected_length: usize,
    },

    /// A chromosome string contained something other than `0` or `1`.
    #[error("invalid bit {0:?} in chromosome string")]
    InvalidBit(char),

    /// An interval domain with `lo > hi` or non-finite bounds.
    #[error("invalid interval [{lo}, {hi}]")]
    InvalidInterval { lo: f64, hi: f64 },
}
