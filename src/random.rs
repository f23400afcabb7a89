//! Random source construction.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random source used by the engine when none is supplied.
pub type GaRng = StdRng;

/// Creates a seeded random source.
///
/// Two generators built from the same seed produce the same stream, so a
/// run configured with a fixed seed is reproducible.
pub fn create_rng(seed: u64) -> GaRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a random source from a fresh entropy-derived seed.
pub fn entropy_rng() -> GaRng {
    create_rng(rand::random())
}
