//! Crossover operators for bit-string chromosomes.
//!
//! Every operator turns two parents into two children of the same
//! length. Chromosomes too short for an operator's cut points (`L < 2`
//! for single- and two-point) come back as copies of the parents.
//!
//! # Operators
//!
//! - [`Crossover::SinglePoint`]: one cut in `[1, L-1]`, tails exchanged
//! - [`Crossover::TwoPoint`]: segment `[i, j)` exchanged
//! - [`Crossover::Uniform`]: one fair coin per bit position
//! - [`Crossover::Arithmetic`]: average of the decoded values, re-encoded
//!
//! # References
//!
//! - Syswerda (1989), "Uniform Crossover in Genetic Algorithms"
//! - Michalewicz (1996), *Genetic Algorithms + Data Structures = Evolution Programs*

use super::encoding::{decode, Chromosome};
use crate::error::GaError;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Crossover strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Crossover {
    /// Single cut point; children swap tails.
    #[default]
    SinglePoint,

    /// Two cut points `i <= j`; children swap the segment `[i, j)`.
    TwoPoint,

    /// Each position independently inherits from either parent.
    Uniform,

    /// Both children encode `0.5·x1 + 0.5·x2`.
    ///
    /// The two children are always identical. Only valid with a
    /// decode-then-score objective.
    Arithmetic,
}

impl Crossover {
    /// Recombine two parents into two children.
    ///
    /// # Panics
    /// Panics if parents have different lengths.
    pub fn cross<R: Rng>(
        &self,
        parent1: &Chromosome,
        parent2: &Chromosome,
        rng: &mut R,
    ) -> (Chromosome, Chromosome) {
        let n = parent1.len();
        assert_eq!(n, parent2.len(), "parents must have equal length");

        match self {
            Crossover::SinglePoint => {
                if n < 2 {
                    return (parent1.clone(), parent2.clone());
                }
                let cut = rng.random_range(1..n);
                single_point_at(parent1, parent2, cut)
            }
            Crossover::TwoPoint => {
                if n < 2 {
                    return (parent1.clone(), parent2.clone());
                }
                let a = rng.random_range(0..n);
                let b = rng.random_range(0..n);
                two_point_at(parent1, parent2, a.min(b), a.max(b))
            }
            Crossover::Uniform => uniform(parent1, parent2, rng),
            Crossover::Arithmetic => arithmetic(parent1, parent2),
        }
    }

    /// Whether the operator works on decoded values.
    pub fn requires_decoding(&self) -> bool {
        matches!(self, Crossover::Arithmetic)
    }

    /// Short strategy name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Crossover::SinglePoint => "single",
            Crossover::TwoPoint => "two",
            Crossover::Uniform => "uniform",
            Crossover::Arithmetic => "arithmetic",
        }
    }
}

impl fmt::Display for Crossover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crossover {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" | "single-point" => Ok(Crossover::SinglePoint),
            "two" | "two-point" => Ok(Crossover::TwoPoint),
            "uniform" => Ok(Crossover::Uniform),
            "arithmetic" => Ok(Crossover::Arithmetic),
            _ => Err(GaError::UnknownStrategy {
                kind: "crossover",
                name: s.to_string(),
            }),
        }
    }
}

/// Single-point crossover at a fixed cut.
///
/// `child1 = p1[..cut] + p2[cut..]`, `child2 = p2[..cut] + p1[cut..]`.
///
/// # Panics
/// Panics if `cut > parent1.len()` or the parents differ in length.
pub fn single_point_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    cut: usize,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    child1[cut..].copy_from_slice(&parent2[cut..]);
    child2[cut..].copy_from_slice(&parent1[cut..]);
    (child1, child2)
}

/// Two-point crossover over the fixed segment `[start, end)`.
///
/// Outside the segment each child keeps its own parent's bits.
///
/// # Panics
/// Panics if `start > end`, `end > parent1.len()` or the parents differ
/// in length.
pub fn two_point_at(
    parent1: &Chromosome,
    parent2: &Chromosome,
    start: usize,
    end: usize,
) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    assert_eq!(n, parent2.len(), "parents must have equal length");

    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    child1[start..end].copy_from_slice(&parent2[start..end]);
    child2[start..end].copy_from_slice(&parent1[start..end]);
    (child1, child2)
}

fn uniform<R: Rng>(
    parent1: &Chromosome,
    parent2: &Chromosome,
    rng: &mut R,
) -> (Chromosome, Chromosome) {
    let mut child1 = parent1.clone();
    let mut child2 = parent2.clone();
    for i in 0..parent1.len() {
        if !rng.random_bool(0.5) {
            child1[i] = parent2[i];
            child2[i] = parent1[i];
        }
    }
    (child1, child2)
}

fn arithmetic(parent1: &Chromosome, parent2: &Chromosome) -> (Chromosome, Chromosome) {
    let n = parent1.len();
    let (x1, x2) = (decode(parent1), decode(parent2));
    let y1 = 0.5 * x1 + 0.5 * x2;
    let y2 = 0.5 * x2 + 0.5 * x1;
    (Chromosome::from_unit(y1, n), Chromosome::from_unit(y2, n))
}
