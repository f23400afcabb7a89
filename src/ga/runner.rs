//! GA evolutionary loop execution.
//!
//! [`GaEngine`] owns the population buffers and drives the loop
//! step by step: initialization → evaluation → elitism → selection →
//! crossover → mutation → buffer swap → repeat. [`GaRunner`] wraps a
//! full run in one call.
//!
//! # Random draw order
//!
//! Within [`GaEngine::advance`], each offspring cycle consumes the random
//! source in this order:
//!
//! 1. selection of parent 1, then parent 2
//! 2. one crossover coin
//! 3. crossover draws, only when the coin succeeds
//! 4. mutation of child 1, then child 2
//!
//! Child 2 is always mutated, even when only one slot remains and it is
//! discarded, so the stream position never depends on the fill level.

use super::config::GaConfig;
use super::encoding::{Chromosome, EXACT_BITS};
use super::objective::Objective;
use super::population::Population;
use super::selection::descending_order;
use crate::error::GaError;
use crate::random::{create_rng, entropy_rng, GaRng};
use rand::Rng;
use tracing::{debug, info, trace, warn};

/// Lifecycle of a [`GaEngine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Population built, not yet scored.
    Initialized,
    /// Fitness vector is current for the current population.
    Evaluated,
    /// A new generation has been swapped in and awaits evaluation.
    Advancing,
    /// Final evaluation done; the run no longer advances.
    Terminated,
}

/// One individual in a snapshot's ranking.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedIndividual {
    /// Position in the population.
    pub index: usize,
    /// Fitness score.
    pub fitness: f64,
    /// Decoded value, for decode-then-score objectives.
    pub decoded: Option<f64>,
    /// Copy of the chromosome.
    pub chromosome: Chromosome,
}

/// Read-only summary of one evaluated generation.
///
/// Snapshots are owned copies; holding one never borrows the engine.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationSnapshot {
    /// Generation index (0 = initial population).
    pub generation: usize,
    /// Highest fitness in the generation.
    pub best_fitness: f64,
    /// Mean fitness of the generation.
    pub average_fitness: f64,
    /// The best `top_k` individuals, best first.
    pub top: Vec<RankedIndividual>,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// Best chromosome of the final population.
    pub best: Chromosome,

    /// Decoded value of `best`, for decode-then-score objectives.
    pub best_decoded: Option<f64>,

    /// Fitness of `best`.
    pub best_fitness: f64,

    /// Number of generations advanced.
    pub generations: usize,

    /// The final population.
    pub population: Vec<Chromosome>,

    /// Fitness of each individual in `population`.
    pub fitness: Vec<f64>,

    /// Best fitness of each evaluated generation, including the final pass.
    pub best_history: Vec<f64>,

    /// Mean fitness of each evaluated generation, including the final pass.
    pub average_history: Vec<f64>,
}

/// Stateful GA engine over a binary population.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaEngine, Objective};
///
/// let config = GaConfig::one_max()
///     .with_population_size(20)
///     .with_chromosome_length(16)
///     .with_max_generations(10)
///     .with_seed(7);
/// let mut engine = GaEngine::new(config, Objective::one_max()).unwrap();
///
/// let first = engine.evaluate();
/// assert_eq!(first.generation, 0);
/// engine.advance();
/// assert_eq!(engine.generation(), 1);
///
/// let result = engine.terminate();
/// assert_eq!(result.population.len(), 20);
/// ```
pub struct GaEngine<R: Rng = GaRng> {
    config: GaConfig,
    objective: Objective,
    rng: R,
    population: Population,
    fitness: Vec<f64>,
    order: Vec<usize>,
    generation: usize,
    phase: Phase,
    best_history: Vec<f64>,
    average_history: Vec<f64>,
}

impl GaEngine<GaRng> {
    /// Builds an engine with a random initial population.
    ///
    /// The random source is seeded from `config.seed`, or from entropy
    /// when no seed is set.
    pub fn new(config: GaConfig, objective: Objective) -> Result<Self, GaError> {
        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        Self::with_rng(config, objective, rng)
    }
}

impl<R: Rng> GaEngine<R> {
    /// Builds an engine that draws from a caller-supplied random source.
    ///
    /// `config.seed` is ignored.
    pub fn with_rng(config: GaConfig, objective: Objective, mut rng: R) -> Result<Self, GaError> {
        config.validate_for(&objective)?;
        let population =
            Population::random(config.population_size, config.chromosome_length, &mut rng);
        Ok(Self::assemble(config, objective, rng, population))
    }

    /// Builds an engine that starts from a given population.
    ///
    /// The population must hold exactly `population_size` chromosomes of
    /// `chromosome_length` bits.
    pub fn from_population(
        config: GaConfig,
        objective: Objective,
        chromosomes: Vec<Chromosome>,
        rng: R,
    ) -> Result<Self, GaError> {
        config.validate_for(&objective)?;
        let shape_ok = chromosomes.len() == config.population_size
            && chromosomes
                .iter()
                .all(|c| c.len() == config.chromosome_length);
        if !shape_ok {
            return Err(GaError::PopulationShape {
                expected_size: config.population_size,
                expected_length: config.chromosome_length,
            });
        }
        let population = Population::from_chromosomes(chromosomes);
        Ok(Self::assemble(config, objective, rng, population))
    }

    fn assemble(config: GaConfig, objective: Objective, rng: R, population: Population) -> Self {
        if objective.is_decoded() && config.chromosome_length > EXACT_BITS {
            warn!(
                chromosome_length = config.chromosome_length,
                exact_bits = EXACT_BITS,
                "decoded values lose precision beyond this chromosome length"
            );
        }
        info!(
            population_size = config.population_size,
            chromosome_length = config.chromosome_length,
            max_generations = config.max_generations,
            elite_count = config.elite_count,
            selection = %config.selection,
            crossover = %config.crossover,
            mutation = %config.mutation,
            "GA run initialized"
        );

        let n = config.population_size;
        Self {
            fitness: vec![f64::NEG_INFINITY; n],
            order: (0..n).collect(),
            best_history: Vec::with_capacity(config.max_generations + 1),
            average_history: Vec::with_capacity(config.max_generations + 1),
            config,
            objective,
            rng,
            population,
            generation: 0,
            phase: Phase::Initialized,
        }
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of generations advanced so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The run configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// The current population.
    pub fn population(&self) -> &[Chromosome] {
        self.population.current()
    }

    /// Fitness of the current population.
    ///
    /// Only meaningful in the [`Phase::Evaluated`] and
    /// [`Phase::Terminated`] phases.
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Scores every individual of the current population.
    ///
    /// Re-evaluating an already evaluated generation recomputes the same
    /// snapshot without extending the history.
    pub fn evaluate(&mut self) -> GenerationSnapshot {
        for (f, c) in self.fitness.iter_mut().zip(self.population.current()) {
            *f = self.objective.score(c);
        }
        self.order = descending_order(&self.fitness);

        let snapshot = self.snapshot();
        if matches!(self.phase, Phase::Initialized | Phase::Advancing) {
            self.best_history.push(snapshot.best_fitness);
            self.average_history.push(snapshot.average_fitness);
            self.phase = Phase::Evaluated;
            debug!(
                generation = snapshot.generation,
                best = snapshot.best_fitness,
                average = snapshot.average_fitness,
                "generation evaluated"
            );
        }
        snapshot
    }

    /// Builds the next generation and swaps it in.
    ///
    /// Evaluates the current generation first if needed. Returns `false`
    /// without touching the population once the run is terminated or the
    /// generation budget is spent.
    pub fn advance(&mut self) -> bool {
        if self.phase == Phase::Terminated {
            warn!("advance called on a terminated run");
            return false;
        }
        if self.generation >= self.config.max_generations {
            warn!(
                generation = self.generation,
                "advance called after the generation budget was spent"
            );
            return false;
        }
        if self.phase != Phase::Evaluated {
            self.evaluate();
        }

        let n = self.config.population_size;
        let elite_count = self.config.elite_count;

        // Elite preservation
        for (slot, &idx) in self.order.iter().take(elite_count).enumerate() {
            trace!(index = idx, fitness = self.fitness[idx], "carrying elite");
            self.population.carry(idx, slot);
        }

        // Generate offspring
        let mut filled = elite_count;
        while filled < n {
            let p1 = self.config.selection.select(&self.fitness, &mut self.rng);
            let p2 = self.config.selection.select(&self.fitness, &mut self.rng);

            let current = self.population.current();
            let (mut child1, mut child2) =
                if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                    self.config
                        .crossover
                        .cross(&current[p1], &current[p2], &mut self.rng)
                } else {
                    (current[p1].clone(), current[p2].clone())
                };

            let (rate, sigma) = (self.config.mutation_rate, self.config.mutation_sigma);
            self.config
                .mutation
                .mutate(&mut child1, rate, sigma, &mut self.rng);
            self.config
                .mutation
                .mutate(&mut child2, rate, sigma, &mut self.rng);

            self.population.place(filled, child1);
            filled += 1;
            if filled < n {
                self.population.place(filled, child2);
                filled += 1;
            }
        }

        self.population.swap();
        self.generation += 1;
        self.phase = Phase::Advancing;
        true
    }

    /// Runs the remaining generations and terminates.
    pub fn run(&mut self) -> GaResult {
        self.run_with_observer(|_| {})
    }

    /// Runs the remaining generations, handing each snapshot to `observer`.
    ///
    /// The observer sees one snapshot per evaluated generation, including
    /// the final pass.
    pub fn run_with_observer<F>(&mut self, mut observer: F) -> GaResult
    where
        F: FnMut(&GenerationSnapshot),
    {
        while self.phase != Phase::Terminated && self.generation < self.config.max_generations {
            let snapshot = self.evaluate();
            observer(&snapshot);
            self.advance();
        }
        if self.phase != Phase::Terminated {
            let last = self.evaluate();
            observer(&last);
        }
        self.terminate()
    }

    /// Performs the final evaluation and reports the best individual.
    ///
    /// Calling it again returns the same result.
    pub fn terminate(&mut self) -> GaResult {
        if self.phase != Phase::Evaluated && self.phase != Phase::Terminated {
            self.evaluate();
        }
        let best_idx = self.order[0];
        let best = self.population.current()[best_idx].clone();
        let best_fitness = self.fitness[best_idx];

        if self.phase != Phase::Terminated {
            self.phase = Phase::Terminated;
            info!(
                generations = self.generation,
                best_fitness,
                best = %best,
                "GA run terminated"
            );
        }

        GaResult {
            best_decoded: self.objective.decode(&best),
            best,
            best_fitness,
            generations: self.generation,
            population: self.population.to_vec(),
            fitness: self.fitness.clone(),
            best_history: self.best_history.clone(),
            average_history: self.average_history.clone(),
        }
    }

    fn snapshot(&self) -> GenerationSnapshot {
        let n = self.fitness.len() as f64;
        let average_fitness = self.fitness.iter().sum::<f64>() / n;
        let top = self
            .order
            .iter()
            .take(self.config.top_k)
            .map(|&index| {
                let chromosome = self.population.current()[index].clone();
                RankedIndividual {
                    index,
                    fitness: self.fitness[index],
                    decoded: self.objective.decode(&chromosome),
                    chromosome,
                }
            })
            .collect();

        GenerationSnapshot {
            generation: self.generation,
            best_fitness: self.fitness[self.order[0]],
            average_fitness,
            top,
        }
    }
}

/// Executes a full GA run in one call.
///
/// # Usage
///
/// ```
/// use u_bitga::ga::{GaConfig, GaRunner, Objective};
///
/// let config = GaConfig::real_valued().with_seed(42);
/// let result = GaRunner::run(&config, &Objective::sine_wave()).unwrap();
/// println!("best x = {:?}, f = {}", result.best_decoded, result.best_fitness);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// Fails only if the configuration is invalid for `objective`.
    pub fn run(config: &GaConfig, objective: &Objective) -> Result<GaResult, GaError> {
        Self::run_with_observer(config, objective, |_| {})
    }

    /// Runs the GA, handing each generation snapshot to `observer`.
    pub fn run_with_observer<F>(
        config: &GaConfig,
        objective: &Objective,
        observer: F,
    ) -> Result<GaResult, GaError>
    where
        F: FnMut(&GenerationSnapshot),
    {
        let mut engine = GaEngine::new(config.clone(), objective.clone())?;
        Ok(engine.run_with_observer(observer))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Crossover, Mutation, Selection};

    fn chrom(s: &str) -> Chromosome {
        s.parse().expect("valid bit string")
    }

    fn small_config() -> GaConfig {
        GaConfig::default()
            .with_population_size(20)
            .with_chromosome_length(12)
            .with_max_generations(30)
            .with_seed(42)
    }

    #[test]
    fn test_initial_evaluation_scenario() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_chromosome_length(4);
        let initial = vec![chrom("1010"), chrom("1100"), chrom("0011"), chrom("1111")];
        let mut engine =
            GaEngine::from_population(config, Objective::one_max(), initial, create_rng(42))
                .unwrap();

        assert_eq!(engine.phase(), Phase::Initialized);
        let snap = engine.evaluate();
        assert_eq!(engine.phase(), Phase::Evaluated);
        assert_eq!(snap.generation, 0);
        assert_eq!(snap.best_fitness, 4.0);
        assert!((snap.average_fitness - 2.5).abs() < 1e-12);
        assert_eq!(snap.top[0].chromosome, chrom("1111"));
        assert_eq!(snap.top[0].index, 3);
        assert_eq!(snap.top[0].decoded, None);
        assert_eq!(engine.fitness(), &[2.0, 2.0, 2.0, 4.0]);
    }

    #[test]
    fn test_top_k_is_ranked_with_index_ties() {
        let config = GaConfig::default()
            .with_population_size(4)
            .with_chromosome_length(4)
            .with_top_k(3);
        let initial = vec![chrom("1010"), chrom("1100"), chrom("0011"), chrom("1111")];
        let mut engine =
            GaEngine::from_population(config, Objective::one_max(), initial, create_rng(1))
                .unwrap();
        let snap = engine.evaluate();
        let indices: Vec<usize> = snap.top.iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![3, 0, 1]);
    }

    #[test]
    fn test_snapshot_reports_decoded_values() {
        let config = GaConfig::real_valued()
            .with_population_size(2)
            .with_chromosome_length(4);
        let initial = vec![chrom("0000"), chrom("1111")];
        let objective = Objective::decoded(|x| x);
        let mut engine =
            GaEngine::from_population(config, objective, initial, create_rng(1)).unwrap();
        let snap = engine.evaluate();
        assert_eq!(snap.top[0].decoded, Some(1.0));
        assert_eq!(snap.top[1].decoded, Some(0.0));
    }

    #[test]
    fn test_onemax_convergence() {
        let config = GaConfig::default()
            .with_population_size(50)
            .with_chromosome_length(20)
            .with_max_generations(100)
            .with_tournament_size(3)
            .with_seed(42);

        let result = GaRunner::run(&config, &Objective::one_max()).unwrap();

        assert!(
            result.best_fitness >= 16.0,
            "expected fitness >= 16 for 20-bit OneMax, got {}",
            result.best_fitness
        );
        assert_eq!(result.best_fitness, result.best.count_ones() as f64);
    }

    #[test]
    fn test_sine_wave_finds_global_peak() {
        let config = GaConfig::default()
            .with_population_size(60)
            .with_chromosome_length(20)
            .with_max_generations(150)
            .with_mutation_rate(0.02)
            .with_seed(42);

        let result = GaRunner::run(&config, &Objective::sine_wave()).unwrap();

        // the second-highest peak near x = 0.65 tops out around 1.65
        assert!(
            result.best_fitness > 1.7,
            "expected the peak near x = 0.85, got f = {} at x = {:?}",
            result.best_fitness,
            result.best_decoded
        );
        let x = result.best_decoded.expect("decoded objective");
        assert!((x - 0.85).abs() < 0.05, "x = {x}");
    }

    #[test]
    fn test_history_lengths() {
        let config = small_config();
        let result = GaRunner::run(&config, &Objective::one_max()).unwrap();

        // initial + each generation
        assert_eq!(result.generations, 30);
        assert_eq!(result.best_history.len(), 31);
        assert_eq!(result.average_history.len(), 31);
        assert_eq!(result.fitness.len(), 20);
    }

    #[test]
    fn test_elitism_keeps_best_fitness_monotonic() {
        let config = small_config().with_elite_count(1).with_mutation_rate(0.2);
        let result = GaRunner::run(&config, &Objective::one_max()).unwrap();

        for window in result.best_history.windows(2) {
            assert!(
                window[1] >= window[0],
                "best fitness should never drop with elitism: {} < {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_elite_survives_unchanged() {
        let config = small_config()
            .with_elite_count(2)
            .with_mutation_rate(0.5)
            .with_mutation(Mutation::RandomReset);
        let mut engine = GaEngine::new(config, Objective::one_max()).unwrap();

        for _ in 0..10 {
            let snap = engine.evaluate();
            let champion = snap.top[0].chromosome.clone();
            engine.advance();
            assert!(
                engine.population().contains(&champion),
                "champion {champion} missing from generation {}",
                engine.generation()
            );
            assert_eq!(engine.population()[0], champion);
        }
    }

    #[test]
    fn test_population_size_constant() {
        let config = small_config().with_population_size(7).with_elite_count(2);
        let mut sizes = Vec::new();
        let mut engine = GaEngine::new(config, Objective::one_max()).unwrap();
        while engine.advance() {
            sizes.push(engine.population().len());
            assert!(engine.population().iter().all(|c| c.len() == 12));
        }
        assert_eq!(sizes.len(), 30);
        assert!(sizes.iter().all(|&n| n == 7));
    }

    #[test]
    fn test_full_elitism_freezes_population() {
        let config = small_config().with_population_size(5).with_elite_count(5);
        let mut engine = GaEngine::new(config, Objective::one_max()).unwrap();
        engine.evaluate();
        let before = engine.population().to_vec();
        // elites are written best first
        let expected: Vec<Chromosome> = descending_order(engine.fitness())
            .into_iter()
            .map(|i| before[i].clone())
            .collect();
        engine.advance();
        assert_eq!(engine.population(), expected.as_slice());
    }

    #[test]
    fn test_same_seed_same_run() {
        let config = small_config().with_selection(Selection::Rank);
        let a = GaRunner::run(&config, &Objective::one_max()).unwrap();
        let b = GaRunner::run(&config, &Objective::one_max()).unwrap();
        assert_eq!(a.population, b.population);
        assert_eq!(a.best_history, b.best_history);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let config = small_config().with_max_generations(5);
        let mut generations = Vec::new();
        let result = GaRunner::run_with_observer(&config, &Objective::one_max(), |snap| {
            generations.push(snap.generation);
            assert_eq!(snap.top.len(), 3);
        })
        .unwrap();
        assert_eq!(generations, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(result.best_history.len(), 6);
    }

    #[test]
    fn test_advance_stops_at_budget() {
        let config = small_config().with_max_generations(2);
        let mut engine = GaEngine::new(config, Objective::one_max()).unwrap();
        assert!(engine.advance());
        assert!(engine.advance());
        assert!(!engine.advance());
        assert_eq!(engine.generation(), 2);

        let result = engine.terminate();
        assert_eq!(engine.phase(), Phase::Terminated);
        assert!(!engine.advance());
        // two advances evaluated generations 0 and 1, terminate evaluated 2
        assert_eq!(result.best_history.len(), 3);

        let again = engine.terminate();
        assert_eq!(again.best_history, result.best_history);
        assert_eq!(again.best, result.best);
    }

    #[test]
    fn test_evaluate_twice_does_not_extend_history() {
        let mut engine = GaEngine::new(small_config(), Objective::one_max()).unwrap();
        let a = engine.evaluate();
        let b = engine.evaluate();
        assert_eq!(a, b);
        let result = engine.terminate();
        assert_eq!(result.best_history.len(), 1);
        assert_eq!(result.generations, 0);
    }

    #[test]
    fn test_result_matches_final_population() {
        let config = small_config();
        let result = GaRunner::run(&config, &Objective::one_max()).unwrap();
        let max = result
            .fitness
            .iter()
            .cloned()
            .fold(f64::NEG_INFINITY, f64::max);
        assert_eq!(result.best_fitness, max);
        assert!(result.population.contains(&result.best));
        assert_eq!(result.best_history.last(), Some(&max));
    }

    #[test]
    fn test_all_operator_combinations() {
        let selections = [
            Selection::Roulette,
            Selection::Tournament(2),
            Selection::Rank,
            Selection::Random,
            Selection::Canonical,
            Selection::Steady,
        ];
        let crossovers = [
            Crossover::SinglePoint,
            Crossover::TwoPoint,
            Crossover::Uniform,
            Crossover::Arithmetic,
        ];
        let mutations = [
            Mutation::BitFlip,
            Mutation::RandomReset,
            Mutation::Swap,
            Mutation::Scramble,
            Mutation::Inversion,
            Mutation::Gaussian,
        ];

        for selection in selections {
            for crossover in crossovers {
                for mutation in mutations {
                    let config = GaConfig::default()
                        .with_population_size(9)
                        .with_chromosome_length(10)
                        .with_max_generations(5)
                        .with_mutation_rate(0.3)
                        .with_selection(selection)
                        .with_crossover(crossover)
                        .with_mutation(mutation)
                        .with_seed(42);

                    let result = GaRunner::run(&config, &Objective::sine_wave()).unwrap();
                    assert_eq!(result.population.len(), 9);
                    for w in result.best_history.windows(2) {
                        assert!(
                            w[1] >= w[0],
                            "{selection}/{crossover}/{mutation}: best dropped"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn test_single_bit_chromosomes() {
        let config = GaConfig::default()
            .with_population_size(6)
            .with_chromosome_length(1)
            .with_max_generations(10)
            .with_crossover(Crossover::TwoPoint)
            .with_mutation(Mutation::Inversion)
            .with_seed(3);
        let result = GaRunner::run(&config, &Objective::one_max()).unwrap();
        assert!(result.population.iter().all(|c| c.len() == 1));
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let config = small_config().with_population_size(1);
        assert_eq!(
            GaEngine::new(config, Objective::one_max()).err(),
            Some(GaError::PopulationTooSmall(1))
        );

        let config = small_config().with_mutation(Mutation::Gaussian);
        assert!(GaRunner::run(&config, &Objective::one_max()).is_err());
    }

    #[test]
    fn test_zero_generations_rejected() {
        let config = small_config().with_max_generations(0);
        assert_eq!(
            GaRunner::run(&config, &Objective::one_max()).err(),
            Some(GaError::NoGenerations)
        );
    }

    #[test]
    fn test_from_population_checks_shape() {
        let config = GaConfig::default()
            .with_population_size(2)
            .with_chromosome_length(3);
        let wrong_length = vec![chrom("010"), chrom("01")];
        let err = GaEngine::from_population(
            config.clone(),
            Objective::one_max(),
            wrong_length,
            create_rng(1),
        )
        .err();
        assert_eq!(
            err,
            Some(GaError::PopulationShape {
                expected_size: 2,
                expected_length: 3
            })
        );

        let wrong_size = vec![chrom("010")];
        assert!(GaEngine::from_population(config, Objective::one_max(), wrong_size, create_rng(1))
            .is_err());
    }

    #[test]
    fn test_negative_infinity_marks_invalid_candidates() {
        // candidates with the first bit set are invalid
        let objective = Objective::bits(|bits| {
            if bits[0] {
                f64::NEG_INFINITY
            } else {
                bits.iter().filter(|&&b| b).count() as f64
            }
        });
        let config = small_config().with_selection(Selection::Roulette);
        let result = GaRunner::run(&config, &objective).unwrap();
        assert!(result.best_fitness.is_finite());
        assert!(!result.best[0]);
    }

    proptest::proptest! {
        #[test]
        fn prop_loop_invariants(
            size in 2usize..12,
            length in 1usize..24,
            elites in 0usize..3,
            generations in 1usize..6,
            seed in proptest::prelude::any::<u64>(),
        ) {
            let config = GaConfig::default()
                .with_population_size(size)
                .with_chromosome_length(length)
                .with_elite_count(elites.min(size))
                .with_max_generations(generations)
                .with_mutation_rate(0.1)
                .with_seed(seed);
            let result = GaRunner::run(&config, &Objective::one_max()).unwrap();

            proptest::prop_assert_eq!(result.population.len(), size);
            proptest::prop_assert!(result.population.iter().all(|c| c.len() == length));
            proptest::prop_assert_eq!(result.best_history.len(), generations + 1);
            if elites > 0 {
                for w in result.best_history.windows(2) {
                    proptest::prop_assert!(w[1] >= w[0]);
                }
            }
        }
    }

    #[test]
    fn test_runs_with_tracing_subscriber() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
        let config = small_config().with_max_generations(3);
        let result = GaRunner::run(&config, &Objective::one_max()).unwrap();
        assert_eq!(result.generations, 3);
    }
}
