#[cfg(test)]
#[path = "../tests/unit/solution_test.rs"]
mod solution_test;

use crate::utils::Float;
use std::cell::OnceCell;

/// Represents a single solution: a point in the search space together with the
/// mutation step-size(-s) it carries. Chromosome and sigmas are immutable after
/// construction; the fitness value is computed at most once and cached.
pub struct Candidate {
    chromosome: Vec<Float>,
    sigmas: Vec<Float>,
    fitness: OnceCell<Float>,
}

impl Candidate {
    /// Creates a new instance of `Candidate` from given chromosome and step-sizes.
    pub fn new(chromosome: Vec<Float>, sigmas: Vec<Float>) -> Self {
        Self { chromosome, sigmas, fitness: OnceCell::new() }
    }

    /// Creates a candidate for the initial population: all genes set to 1.0,
    /// the initial step-size broadcast across `sigma_slots` slots.
    pub fn initial(dimension: usize, initial_sigma: Float, sigma_slots: usize) -> Self {
        Self::new(vec![1.; dimension], vec![initial_sigma; sigma_slots])
    }

    /// Returns a point in the search space.
    pub fn chromosome(&self) -> &[Float] {
        self.chromosome.as_slice()
    }

    /// Returns step-sizes associated with this candidate.
    pub fn sigmas(&self) -> &[Float] {
        self.sigmas.as_slice()
    }

    /// Returns the cached fitness value, if it was already computed.
    pub fn fitness(&self) -> Option<Float> {
        self.fitness.get().copied()
    }

    /// Returns the cached fitness or computes it with given function, caching
    /// the result. The compute function runs at most once per candidate.
    pub(crate) fn fitness_or_init<F: FnOnce(&[Float]) -> Float>(&self, compute: F) -> Float {
        *self.fitness.get_or_init(|| compute(self.chromosome.as_slice()))
    }
}

impl std::fmt::Debug for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Candidate")
            .field("chromosome", &self.chromosome)
            .field("sigmas", &self.sigmas)
            .field("fitness", &self.fitness.get())
            .finish()
    }
}
