//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.
//! It is immutable once a run starts.

use super::crossover::Crossover;
use super::mutation::Mutation;
use super::objective::Objective;
use super::selection::Selection;
use crate::error::GaError;

/// Configuration for the binary Genetic Algorithm.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 50);
/// assert_eq!(config.chromosome_length, 20);
/// assert_eq!(config.max_generations, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::{Crossover, GaConfig, Mutation, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(100)
///     .with_selection(Selection::Rank)
///     .with_crossover(Crossover::Uniform)
///     .with_mutation(Mutation::Scramble)
///     .with_elite_count(2)
///     .with_mutation_rate(0.05);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of individuals `N` (at least 2).
    pub population_size: usize,

    /// Bits per chromosome `L` (at least 1).
    pub chromosome_length: usize,

    /// Number of generations `G` (at least 1).
    pub max_generations: usize,

    /// Individuals carried unchanged into the next generation (`0..=N`).
    pub elite_count: usize,

    /// Probability that a selected pair is recombined (0.0–1.0).
    ///
    /// When crossover is skipped the children are copies of the parents.
    pub crossover_rate: f64,

    /// Mutation probability (0.0–1.0).
    ///
    /// Per bit for bit-flip and random-reset, per chromosome otherwise.
    pub mutation_rate: f64,

    /// Standard deviation of the Gaussian mutation on the decoded value.
    pub mutation_sigma: f64,

    /// Parent selection strategy.
    pub selection: Selection,

    /// Recombination strategy.
    pub crossover: Crossover,

    /// Mutation strategy.
    pub mutation: Mutation,

    /// Number of top individuals reported in each generation snapshot.
    pub top_k: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            chromosome_length: 20,
            max_generations: 50,
            elite_count: 1,
            crossover_rate: 0.8,
            mutation_rate: 0.01,
            mutation_sigma: 0.05,
            selection: Selection::default(),
            crossover: Crossover::default(),
            mutation: Mutation::default(),
            top_k: 3,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the chromosome length in bits.
    pub fn with_chromosome_length(mut self, bits: usize) -> Self {
        self.chromosome_length = bits;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the number of elites.
    pub fn with_elite_count(mut self, n: usize) -> Self {
        self.elite_count = n;
        self
    }

    /// Sets the crossover rate. Out-of-range values fail [`validate`](Self::validate).
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate;
        self
    }

    /// Sets the mutation rate. Out-of-range values fail [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the Gaussian mutation sigma.
    pub fn with_mutation_sigma(mut self, sigma: f64) -> Self {
        self.mutation_sigma = sigma;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, crossover: Crossover) -> Self {
        self.crossover = crossover;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets how many top individuals each snapshot reports.
    pub fn with_top_k(mut self, k: usize) -> Self {
        self.top_k = k;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Convenience builder for setting tournament size.
    ///
    /// Equivalent to `.with_selection(Selection::Tournament(k))`.
    pub fn with_tournament_size(self, k: usize) -> Self {
        self.with_selection(Selection::Tournament(k))
    }

    /// Sets all three strategies from their names.
    ///
    /// ```
    /// use u_bitga::ga::{GaConfig, Selection};
    ///
    /// let config = GaConfig::default()
    ///     .with_strategy_names("rank", "uniform", "swap")
    ///     .unwrap();
    /// assert_eq!(config.selection, Selection::Rank);
    /// assert!(GaConfig::default().with_strategy_names("rank", "nope", "swap").is_err());
    /// ```
    pub fn with_strategy_names(
        self,
        selection: &str,
        crossover: &str,
        mutation: &str,
    ) -> Result<Self, GaError> {
        Ok(self
            .with_selection(selection.parse()?)
            .with_crossover(crossover.parse()?)
            .with_mutation(mutation.parse()?))
    }

    /// Profile for objectives that score bits directly (OneMax style).
    ///
    /// - Selection: canonical, Crossover: two-point, Mutation: bit-flip
    /// - Mutation rate 0.01 per bit, crossover rate 0.8, one elite
    pub fn one_max() -> Self {
        Self {
            selection: Selection::Canonical,
            crossover: Crossover::TwoPoint,
            mutation: Mutation::BitFlip,
            ..Self::default()
        }
    }

    /// Profile for decode-then-score objectives over `[0, 1]`.
    ///
    /// - Selection: roulette, Crossover: single-point, Mutation: Gaussian
    /// - Sigma 0.05, mutation rate 0.01, crossover rate 0.8, one elite
    pub fn real_valued() -> Self {
        Self {
            selection: Selection::Roulette,
            crossover: Crossover::SinglePoint,
            mutation: Mutation::Gaussian,
            mutation_sigma: 0.05,
            ..Self::default()
        }
    }

    /// Validates the configuration on its own.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.population_size < 2 {
            return Err(GaError::PopulationTooSmall(self.population_size));
        }
        if self.chromosome_length == 0 {
            return Err(GaError::EmptyChromosome);
        }
        if self.max_generations == 0 {
            return Err(GaError::NoGenerations);
        }
        if self.elite_count > self.population_size {
            return Err(GaError::TooManyElites {
                elite: self.elite_count,
                population: self.population_size,
            });
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        if !self.mutation_sigma.is_finite() || self.mutation_sigma < 0.0 {
            return Err(GaError::InvalidSigma(self.mutation_sigma));
        }
        if self.selection == Selection::Tournament(0) {
            return Err(GaError::EmptyTournament);
        }
        Ok(())
    }

    /// Validates the configuration against the objective it will run with.
    ///
    /// Arithmetic crossover and Gaussian mutation need decoded values, so
    /// they are rejected when the objective scores bits directly.
    pub fn validate_for(&self, objective: &Objective) -> Result<(), GaError> {
        self.validate()?;
        if !objective.is_decoded() {
            if self.crossover.requires_decoding() {
                return Err(GaError::RequiresDecodedObjective {
                    operator: "arithmetic crossover",
                });
            }
            if self.mutation.requires_decoding() {
                return Err(GaError::RequiresDecodedObjective {
                    operator: "gaussian mutation",
                });
            }
        }
        Ok(())
    }
}

fn check_rate(name: &'static str, value: f64) -> Result<(), GaError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GaError::RateOutOfRange { name, value })
    }
}
