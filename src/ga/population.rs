//! Double-buffered population storage.
//!
//! Two fixed-size chromosome buffers plus a flag naming the current one.
//! Offspring are written into the other buffer slot by slot, then the
//! flag flips. Neither buffer is ever resized; elites are copied with
//! `clone_from`, which reuses the slot's allocation.

use super::encoding::Chromosome;
use rand::Rng;

/// The current generation and the buffer that receives the next one.
#[derive(Debug, Clone)]
pub struct Population {
    buffers: [Vec<Chromosome>; 2],
    current: usize,
}

impl Population {
    /// `size` chromosomes of `length` uniformly random bits.
    pub fn random<R: Rng>(size: usize, length: usize, rng: &mut R) -> Self {
        let initial = (0..size)
            .map(|_| Chromosome::random(length, rng))
            .collect();
        Self::from_chromosomes(initial)
    }

    /// Wraps an existing set of chromosomes as the current generation.
    pub fn from_chromosomes(chromosomes: Vec<Chromosome>) -> Self {
        let next = chromosomes.clone();
        Self {
            buffers: [chromosomes, next],
            current: 0,
        }
    }

    /// The current generation.
    pub fn current(&self) -> &[Chromosome] {
        &self.buffers[self.current]
    }

    /// Copies current individual `src` into slot `dst` of the next buffer.
    pub(crate) fn carry(&mut self, src: usize, dst: usize) {
        let (current, next) = self.split();
        next[dst].clone_from(&current[src]);
    }

    /// Writes `chromosome` into slot `dst` of the next buffer.
    pub(crate) fn place(&mut self, dst: usize, chromosome: Chromosome) {
        let next = 1 - self.current;
        self.buffers[next][dst] = chromosome;
    }

    /// Makes the next buffer current.
    pub(crate) fn swap(&mut self) {
        self.current = 1 - self.current;
    }

    /// Clones the current generation out of the buffer.
    pub fn to_vec(&self) -> Vec<Chromosome> {
        self.current().to_vec()
    }

    fn split(&mut self) -> (&[Chromosome], &mut [Chromosome]) {
        let [a, b] = &mut self.buffers;
        if self.current == 0 {
            (a.as_slice(), b.as_mut_slice())
        } else {
            (b.as_slice(), a.as_mut_slice())
        }
    }
}
