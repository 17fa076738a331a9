#[cfg(test)]
#[path = "../../tests/unit/strategies/fixed_step_test.rs"]
mod fixed_step_test;

use super::*;

/// A fixed step-size (FSS) strategy: a uniformly selected parent is perturbed
/// by i.i.d. gaussian noise with a step-size that stays constant for the whole
/// run. No adaptation state.
pub struct FixedStepSize {
    dimension: usize,
    mu: usize,
    sigma: Float,
}

impl FixedStepSize {
    /// Creates a new instance of `FixedStepSize`.
    pub fn new(dimension: usize, mu: usize, sigma: Float) -> Self {
        Self { dimension, mu, sigma }
    }
}

impl Strategy for FixedStepSize {
    fn title(&self) -> String {
        format!("fixed step-size, sigma={:.2}", self.sigma)
    }

    fn initial_population(&self) -> Vec<Candidate> {
        (0..self.mu).map(|_| Candidate::initial(self.dimension, self.sigma, 1)).collect()
    }

    fn mutate(
        &mut self,
        parents: &[Candidate],
        _slot: usize,
        _objective: &SphereObjective,
        random: &dyn Random,
    ) -> Candidate {
        let parent = &parents[random.uniform_int(self.mu as i32) as usize];
        let chromosome = parent.chromosome().iter().map(|gene| gene + random.gaussian(self.sigma)).collect();

        Candidate::new(chromosome, parent.sigmas().to_vec())
    }
}
