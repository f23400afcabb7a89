//! Objective functions plugged into the engine.
//!
//! An [`Objective`] comes in one of two shapes, fixed when the run is
//! configured:
//!
//! - **Decoded**: the chromosome is decoded to a real value and the
//!   function scores that value (e.g. `x·sin(10πx) + 1`).
//! - **Bits**: the function scores the raw bit string (e.g. OneMax).
//!
//! Higher scores are better. For minimization, negate the score. An
//! objective may return `f64::NEG_INFINITY` to mark a candidate as
//! invalid; selection treats it like any other low score.

use super::encoding::decode;
use crate::error::GaError;
use std::fmt;
use std::sync::Arc;

type DecodedFn = dyn Fn(f64) -> f64 + Send + Sync;
type BitsFn = dyn Fn(&[bool]) -> f64 + Send + Sync;

/// A closed real interval onto which unit values are mapped.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Lower bound, mapped from a decoded value of 0.
    pub lo: f64,
    /// Upper bound, mapped from a decoded value of 1.
    pub hi: f64,
}

impl Interval {
    /// The unit interval `[0, 1]`.
    pub const UNIT: Interval = Interval { lo: 0.0, hi: 1.0 };

    /// Creates an interval, rejecting reversed or non-finite bounds.
    pub fn new(lo: f64, hi: f64) -> Result<Self, GaError> {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(GaError::InvalidInterval { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Maps `u ∈ [0, 1]` linearly onto this interval.
    pub fn map(&self, u: f64) -> f64 {
        self.lo + u * (self.hi - self.lo)
    }
}

/// Scoring capability consumed by the engine.
#[derive(Clone)]
pub enum Objective {
    /// Decode-then-score: the function receives the decoded value.
    Decoded { domain: Interval, f: Arc<DecodedFn> },
    /// Score the bit string directly, without decoding.
    Bits(Arc<BitsFn>),
}

impl Objective {
    /// Decode-then-score objective over `[0, 1]`.
    pub fn decoded<F>(f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Objective::Decoded {
            domain: Interval::UNIT,
            f: Arc::new(f),
        }
    }

    /// Decode-then-score objective whose argument ranges over `domain`.
    pub fn decoded_in<F>(domain: Interval, f: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Objective::Decoded {
            domain,
            f: Arc::new(f),
        }
    }

    /// Objective that scores the raw bits.
    pub fn bits<F>(f: F) -> Self
    where
        F: Fn(&[bool]) -> f64 + Send + Sync + 'static,
    {
        Objective::Bits(Arc::new(f))
    }

    /// OneMax: the number of set bits.
    pub fn one_max() -> Self {
        Self::bits(|bits| bits.iter().filter(|&&b| b).count() as f64)
    }

    /// `f(x) = x·sin(10πx) + 1` over `[0, 1]`.
    pub fn sine_wave() -> Self {
        Self::decoded(|x| x * (10.0 * std::f64::consts::PI * x).sin() + 1.0)
    }

    /// Whether chromosomes are decoded before scoring.
    pub fn is_decoded(&self) -> bool {
        matches!(self, Objective::Decoded { .. })
    }

    /// The decoded value of `bits`, mapped onto the objective's domain.
    ///
    /// `None` for objectives that score bits directly.
    pub fn decode(&self, bits: &[bool]) -> Option<f64> {
        match self {
            Objective::Decoded { domain, .. } => Some(domain.map(decode(bits))),
            Objective::Bits(_) => None,
        }
    }

    /// Scores one chromosome.
    pub fn score(&self, bits: &[bool]) -> f64 {
        match self {
            Objective::Decoded { domain, f } => f(domain.map(decode(bits))),
            Objective::Bits(f) => f(bits),
        }
    }
}

impl fmt::Debug for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Objective::Decoded { domain, .. } => f
                .debug_struct("Decoded")
                .field("domain", domain)
                .finish_non_exhaustive(),
            Objective::Bits(_) => f.write_str("Bits(..)"),
        }
    }
}
