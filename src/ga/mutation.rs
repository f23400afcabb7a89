//! Mutation operators for bit-string chromosomes.
//!
//! The mutation rate means different things per operator:
//!
//! | Operator      | Rate granularity        | Length guard |
//! |---------------|-------------------------|--------------|
//! | `BitFlip`     | per bit                 | none         |
//! | `RandomReset` | per bit                 | none         |
//! | `Swap`        | once per chromosome     | `L > 1`      |
//! | `Scramble`    | once per chromosome     | `L > 2`      |
//! | `Inversion`   | once per chromosome     | `L > 2`      |
//! | `Gaussian`    | once per chromosome     | none         |
//!
//! Chromosome-level operators always draw their rate coin first and only
//! then check the length guard, so a too-short chromosome consumes the
//! same coin as a long one.

use super::encoding::{decode, encode_into, Chromosome};
use crate::error::GaError;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_distr::StandardNormal;
use std::fmt;
use std::str::FromStr;

/// Mutation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// Flip each bit with probability `rate`.
    #[default]
    BitFlip,

    /// Reset each bit, with probability `rate`, to a fresh uniform bit.
    RandomReset,

    /// With probability `rate`, swap two uniformly chosen positions.
    Swap,

    /// With probability `rate`, shuffle the bits of a random range `[i, j]`.
    Scramble,

    /// With probability `rate`, reverse a random range `[i, j]`.
    Inversion,

    /// With probability `rate`, add `N(0, sigma²)` noise to the decoded
    /// value, clamp to `[0, 1]`, and re-encode.
    ///
    /// Only valid with a decode-then-score objective.
    Gaussian,
}

impl Mutation {
    /// Mutate `chromosome` in place.
    ///
    /// `sigma` is only read by [`Mutation::Gaussian`].
    pub fn mutate<R: Rng>(&self, chromosome: &mut Chromosome, rate: f64, sigma: f64, rng: &mut R) {
        match self {
            Mutation::BitFlip => {
                for bit in chromosome.iter_mut() {
                    if rng.random_range(0.0..1.0) < rate {
                        *bit = !*bit;
                    }
                }
            }
            Mutation::RandomReset => {
                for bit in chromosome.iter_mut() {
                    if rng.random_range(0.0..1.0) < rate {
                        *bit = rng.random_bool(0.5);
                    }
                }
            }
            Mutation::Swap => {
                let n = chromosome.len();
                if rng.random_range(0.0..1.0) < rate && n > 1 {
                    let i = rng.random_range(0..n);
                    let j = rng.random_range(0..n);
                    chromosome.swap(i, j);
                }
            }
            Mutation::Scramble => {
                let n = chromosome.len();
                if rng.random_range(0.0..1.0) < rate && n > 2 {
                    let (start, end) = random_segment(n, rng);
                    chromosome[start..=end].shuffle(rng);
                }
            }
            Mutation::Inversion => {
                let n = chromosome.len();
                if rng.random_range(0.0..1.0) < rate && n > 2 {
                    let (start, end) = random_segment(n, rng);
                    chromosome[start..=end].reverse();
                }
            }
            Mutation::Gaussian => {
                if rng.random_range(0.0..1.0) < rate {
                    let noise: f64 = rng.sample(StandardNormal);
                    let y = decode(chromosome.bits()) + noise * sigma;
                    encode_into(y, &mut chromosome[..]);
                }
            }
        }
    }

    /// Whether the operator works on decoded values.
    pub fn requires_decoding(&self) -> bool {
        matches!(self, Mutation::Gaussian)
    }

    /// Short strategy name, as accepted by [`FromStr`].
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::BitFlip => "bitflip",
            Mutation::RandomReset => "random",
            Mutation::Swap => "swap",
            Mutation::Scramble => "scramble",
            Mutation::Inversion => "inversion",
            Mutation::Gaussian => "gaussian",
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Mutation {
    type Err = GaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitflip" | "bit-flip" => Ok(Mutation::BitFlip),
            "random" | "random-reset" => Ok(Mutation::RandomReset),
            "swap" => Ok(Mutation::Swap),
            "scramble" => Ok(Mutation::Scramble),
            "inversion" => Ok(Mutation::Inversion),
            "gaussian" => Ok(Mutation::Gaussian),
            _ => Err(GaError::UnknownStrategy {
                kind: "mutation",
                name: s.to_string(),
            }),
        }
    }
}

/// Pick a random segment `[start, end]` within `0..n` where `start <= end`.
fn random_segment<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;

    fn chrom(s: &str) -> Chromosome {
        s.parse().expect("valid bit string")
    }

    const ALL: [Mutation; 6] = [
        Mutation::BitFlip,
        Mutation::RandomReset,
        Mutation::Swap,
        Mutation::Scramble,
        Mutation::Inversion,
        Mutation::Gaussian,
    ];

    #[test]
    fn test_zero_rate_is_identity() {
        let mut rng = create_rng(42);
        let original = chrom("1011001110001011");
        for op in ALL {
            let mut c = original.clone();
            op.mutate(&mut c, 0.0, 0.5, &mut rng);
            assert_eq!(c, original, "{op} changed the chromosome at rate 0");
        }
    }

    #[test]
    fn test_bitflip_rate_one_flips_everything() {
        let mut rng = create_rng(42);
        let mut c = chrom("101100");
        Mutation::BitFlip.mutate(&mut c, 1.0, 0.0, &mut rng);
        assert_eq!(c, chrom("010011"));
    }

    #[test]
    fn test_bitflip_is_per_bit() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::zeros(10_000);
        Mutation::BitFlip.mutate(&mut c, 0.1, 0.0, &mut rng);
        let flipped = c.count_ones();
        assert!((800..1200).contains(&flipped), "flipped {flipped} of 10000");
    }

    #[test]
    fn test_random_reset_rate_one_randomizes() {
        let mut rng = create_rng(42);
        let mut c = Chromosome::zeros(1000);
        Mutation::RandomReset.mutate(&mut c, 1.0, 0.0, &mut rng);
        let ones = c.count_ones();
        assert!((400..600).contains(&ones), "got {ones} ones");
    }

    #[test]
    fn test_swap_preserves_bit_count() {
        let mut rng = create_rng(42);
        for _ in 0..100 {
            let mut c = chrom("1100101");
            Mutation::Swap.mutate(&mut c, 1.0, 0.0, &mut rng);
            assert_eq!(c.count_ones(), 4);
        }
    }

    #[test]
    fn test_scramble_stays_inside_range_and_preserves_count() {
        let mut rng = create_rng(42);
        let original = chrom("1110001110001110");
        let mut changed = false;
        for _ in 0..100 {
            let mut c = original.clone();
            Mutation::Scramble.mutate(&mut c, 1.0, 0.0, &mut rng);
            assert_eq!(c.count_ones(), original.count_ones());
            changed |= c != original;
        }
        assert!(changed, "scramble should eventually change the chromosome");
    }

    #[test]
    fn test_inversion_reverses_a_segment() {
        let mut rng = create_rng(42);
        let original = chrom("0000011111");
        for _ in 0..100 {
            let mut c = original.clone();
            Mutation::Inversion.mutate(&mut c, 1.0, 0.0, &mut rng);
            assert_eq!(c.count_ones(), 5);
            // one reversal of a sorted string adds at most two boundaries
            let boundaries = c.windows(2).filter(|w| w[0] != w[1]).count();
            assert!(boundaries <= 3, "{c}");
        }
    }

    #[test]
    fn test_block_mutations_skip_short_chromosomes() {
        let mut rng = create_rng(42);
        let mut one = chrom("1");
        Mutation::Swap.mutate(&mut one, 1.0, 0.0, &mut rng);
        assert_eq!(one, chrom("1"));

        for op in [Mutation::Scramble, Mutation::Inversion] {
            let mut two = chrom("10");
            op.mutate(&mut two, 1.0, 0.0, &mut rng);
            assert_eq!(two, chrom("10"), "{op} ran on a 2-bit chromosome");
        }
    }

    #[test]
    fn test_coin_drawn_before_length_guard() {
        // a skipped short chromosome still advances the stream by one coin
        let mut a = create_rng(5);
        let mut b = create_rng(5);
        let mut c = chrom("1");
        Mutation::Swap.mutate(&mut c, 1.0, 0.0, &mut a);
        let _: f64 = b.random_range(0.0..1.0);
        assert_eq!(a.random::<u64>(), b.random::<u64>());
    }

    #[test]
    fn test_gaussian_zero_sigma_is_identity() {
        let mut rng = create_rng(42);
        let original = chrom("01101001");
        let mut c = original.clone();
        Mutation::Gaussian.mutate(&mut c, 1.0, 0.0, &mut rng);
        assert_eq!(c, original);
    }

    #[test]
    fn test_gaussian_moves_value_and_clamps() {
        let mut rng = create_rng(42);
        let mut moved = 0;
        for _ in 0..100 {
            let mut c = Chromosome::from_unit(0.5, 16);
            Mutation::Gaussian.mutate(&mut c, 1.0, 5.0, &mut rng);
            let x = c.to_unit();
            assert!((0.0..=1.0).contains(&x));
            if (x - 0.5).abs() > 1e-3 {
                moved += 1;
            }
        }
        assert!(moved > 90, "only {moved} of 100 moved");
    }

    #[test]
    fn test_parse_names() {
        for op in ALL {
            assert_eq!(op.name().parse::<Mutation>().unwrap(), op);
        }
        assert_eq!("bit-flip".parse::<Mutation>().unwrap(), Mutation::BitFlip);
        assert_eq!("random-reset".parse::<Mutation>().unwrap(), Mutation::RandomReset);
        assert!("creep".parse::<Mutation>().is_err());
        assert!(Mutation::Gaussian.requires_decoding());
        assert!(!Mutation::Swap.requires_decoding());
    }

    #[test]
    fn test_random_segment_bounds() {
        let mut rng = create_rng(42);
        for _ in 0..1000 {
            let (start, end) = random_segment(10, &mut rng);
            assert!(start <= end);
            assert!(end < 10);
        }
    }
}
