//! Selection strategies for the GA.
//!
//! Selection picks a parent index from the fitness vector of the current
//! generation. Higher fitness is better. Every strategy consumes the
//! random source in a fixed order, so a seeded source and a fixed
//! fitness vector always produce the same index.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use crate::error::GaError;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::Selection;
///
/// let sel: Selection = "tournament:5".parse().unwrap();
/// assert_eq!(sel, Selection::Tournament(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Falls back to a uniform draw when the fitness total is not positive.
    Roulette,

    /// Pick `k` indices uniformly with replacement, keep the fittest.
    ///
    /// Ties go to the index drawn first. `k = 1` is a uniform draw.
    Tournament(usize),

    /// Linear ranking: worst gets weight 1, best gets weight `n`.
    Rank,

    /// Uniform draw, ignoring fitness.
    Random,

    /// Weight `fitness / mean`; uniform when the mean is not positive.
    Canonical,

    /// Uniform draw from the better half of the population.
    Steady,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Select a parent index from `fitness`.
    ///
    /// # Panics
    /// Panics if `fitness` is empty.
    pub fn select<R: Rng>(&self, fitness: &[f64], rng: &mut R) -> usize {
        assert!(!fitness.is_empty(), "cannot select from empty population");

        match self {
            Selection::Roulette => roulette(fitness, rng),
            Selection::Tournament(k) => tournament(fitness, *k, rng),
            Selection::Rank => rank(fitness, rng),
            Selection::Random => rng.random_range(0..fitness.len()),
            Selection::Canonical => canonical(fitness, rng),
            Selection::Steady => steady(fitness, rng),
        }
    }

    /// Short strategy name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Selection::Roulette => "roulette",
            Selection::Tournament(_) => "tournament",
            Selection::Rank => "rank",
            Selection::Random => "random",
            Selection::Canonical => "canonical",
            Selection::Steady => "steady",
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Tournament(k) => write!(f, "tournament:{k}"),
            other => f.write_str(other.name()),
        }
    }
}

impl FromStr for Selection {
    type Err = GaError;

    /// Parses `roulette`, `tournament`, `tournament:<k>`, `rank`, `random`,
    /// `canonical` or `steady` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || GaError::UnknownStrategy {
            kind: "selection",
            name: s.to_string(),
        };
        let lower = s.trim().to_ascii_lowercase();
        let (head, arg) = match lower.split_once(':') {
            Some((head, arg)) => (head, Some(arg)),
            None => (lower.as_str(), None),
        };
        let sel = match (head, arg) {
            ("tournament", None) => Selection::default(),
            ("tournament", Some(k)) => {
                Selection::Tournament(k.trim().parse().map_err(|_| unknown())?)
            }
            ("roulette", None) => Selection::Roulette,
            ("rank", None) => Selection::Rank,
            ("random", None) => Selection::Random,
            ("canonical", None) => Selection::Canonical,
            ("steady", None) | ("steady-state", None) => Selection::Steady,
            _ => return Err(unknown()),
        };
        Ok(sel)
    }
}

/// NaN ranks below every number.
fn rank_key(f: f64) -> f64 {
    if f.is_nan() {
        f64::NEG_INFINITY
    } else {
        f
    }
}

fn compare(a: f64, b: f64) -> Ordering {
    rank_key(a)
        .partial_cmp(&rank_key(b))
        .unwrap_or(Ordering::Equal)
}

/// Indices ordered best first; ties keep the lower index first.
pub(crate) fn descending_order(fitness: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| compare(fitness[b], fitness[a]));
    order
}

/// Indices ordered worst first; ties keep the lower index first.
fn ascending_order(fitness: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..fitness.len()).collect();
    order.sort_by(|&a, &b| compare(fitness[a], fitness[b]));
    order
}

/// Walk cumulative weights until they pass `threshold`.
fn cumulative_pick(weights: impl Iterator<Item = f64>, threshold: f64) -> Option<usize> {
    let mut cumulative = 0.0;
    for (i, w) in weights.enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return Some(i);
        }
    }
    None
}

fn roulette<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    let total: f64 = fitness.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    cumulative_pick(fitness.iter().copied(), threshold).unwrap_or(n - 1) // floating-point fallback
}

fn tournament<R: Rng>(fitness: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = fitness.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if compare(fitness[idx], fitness[best_idx]) == Ordering::Greater {
            best_idx = idx;
        }
    }
    best_idx
}

/// Rank `i` (1-based, worst = 1) carries weight `i` out of `n(n+1)/2`.
fn rank<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let order = ascending_order(fitness);
    let n = order.len() as u64;
    let total = n * (n + 1) / 2;
    let r = rng.random_range(1..=total);

    let mut cumulative = 0u64;
    for (i, &idx) in order.iter().enumerate() {
        cumulative += i as u64 + 1;
        if cumulative >= r {
            return idx;
        }
    }
    order[order.len() - 1]
}

fn canonical<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let n = fitness.len();
    let mean = fitness.iter().sum::<f64>() / n as f64;
    if !(mean > 0.0 && mean.is_finite()) {
        return rng.random_range(0..n);
    }

    let weights: Vec<f64> = fitness.iter().map(|&f| f / mean).collect();
    let total: f64 = weights.iter().sum();
    if !(total > 0.0 && total.is_finite()) {
        return rng.random_range(0..n);
    }
    let threshold = rng.random_range(0.0..total);
    match cumulative_pick(weights.into_iter(), threshold) {
        Some(i) => i,
        None => rng.random_range(0..n),
    }
}

fn steady<R: Rng>(fitness: &[f64], rng: &mut R) -> usize {
    let order = descending_order(fitness);
    let half = order.len().div_ceil(2).max(1);
    order[rng.random_range(0..half)]
}
