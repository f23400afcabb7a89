//! Bit-string ⇄ unit-interval encoding.
//!
//! A chromosome of `L` bits is read as an unsigned big-endian integer
//! `val` (most significant bit first) and mapped to `val / (2^L - 1)`.
//! The inverse rounds `x * (2^L - 1)` to the nearest integer and writes
//! it back as `L` bits.
//!
//! # Precision
//!
//! `encode(decode(c)) == c` holds exactly while `L <= EXACT_BITS`. Past
//! that, the intermediate `f64` cannot carry every integer and the
//! round trip may land on a neighbouring bit pattern. For `L >= 64` the
//! maximum saturates at `u64::MAX` and only the trailing 64 bits
//! contribute to the decoded value.

use crate::error::GaError;
use rand::Rng;
use std::fmt;
use std::ops::{Deref, DerefMut};
use std::str::FromStr;

/// Longest chromosome for which decode/encode round-trips exactly.
pub const EXACT_BITS: usize = 48;

/// A fixed-length bit string representing one candidate solution.
///
/// Dereferences to `[bool]`, so operators can read and rewrite bits in
/// place but never change the length.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chromosome {
    bits: Vec<bool>,
}

impl Chromosome {
    /// Wraps an existing bit vector.
    pub fn new(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// All-zero chromosome of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Chromosome whose bits are drawn independently and uniformly.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Encodes `x ∈ [0, 1]` into a chromosome of `len` bits.
    pub fn from_unit(x: f64, len: usize) -> Self {
        Self { bits: encode(x, len) }
    }

    /// Decodes this chromosome to a value in `[0, 1]`.
    pub fn to_unit(&self) -> f64 {
        decode(&self.bits)
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Borrows the underlying bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Consumes the chromosome, returning its bits.
    pub fn into_bits(self) -> Vec<bool> {
        self.bits
    }
}

impl Deref for Chromosome {
    type Target = [bool];

    fn deref(&self) -> &[bool] {
        &self.bits
    }
}

impl DerefMut for Chromosome {
    fn deref_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }
}

impl From<Vec<bool>> for Chromosome {
    fn from(bits: Vec<bool>) -> Self {
        Self::new(bits)
    }
}

impl fmt::Display for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl FromStr for Chromosome {
    type Err = GaError;

    /// Parses a string of `0`/`1` characters, most significant bit first.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .map(|c| match c {
                '0' => Ok(false),
                '1' => Ok(true),
                other => Err(GaError::InvalidBit(other)),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self::new)
    }
}

/// Largest integer representable in `len` bits, saturating at `u64::MAX`.
pub fn max_value(len: usize) -> u64 {
    if len >= 64 {
        u64::MAX
    } else {
        (1u64 << len) - 1
    }
}

/// Decodes a big-endian bit string to a value in `[0, 1]`.
///
/// An empty slice decodes to `0.0`.
pub fn decode(bits: &[bool]) -> f64 {
    let max = max_value(bits.len());
    if max == 0 {
        return 0.0;
    }
    let val = bits
        .iter()
        .fold(0u64, |acc, &bit| (acc << 1) | u64::from(bit));
    (val as f64 / max as f64).clamp(0.0, 1.0)
}

/// Encodes `x` into a new bit vector of length `len`.
///
/// `x` is clamped to `[0, 1]`; NaN encodes as zero.
pub fn encode(x: f64, len: usize) -> Vec<bool> {
    let mut bits = vec![false; len];
    encode_into(x, &mut bits);
    bits
}

/// Encodes `x` into `out`, overwriting every bit.
///
/// The least significant bit is written last (at the end of the slice).
pub fn encode_into(x: f64, out: &mut [bool]) {
    let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
    let max = max_value(out.len());
    // float-to-int casts saturate, so x = 1.0 with max = u64::MAX is safe
    let mut val = (x * max as f64).round() as u64;
    for bit in out.iter_mut().rev() {
        *bit = val & 1 == 1;
        val >>= 1;
    }
}
