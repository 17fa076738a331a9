#[cfg(test)]
#[path = "../../tests/unit/strategies/uncorrelated_test.rs"]
mod uncorrelated_test;

use super::*;

/// The uncorrelated n-step-size (UNSS) strategy: every candidate carries one
/// step-size per dimension, each log-normally perturbed on mutation and
/// inherited by the offspring in its perturbed form. No algorithm level
/// adaptation state beyond what lives in the candidates themselves.
pub struct UncorrelatedNStepSize {
    dimension: usize,
    mu: usize,
    initial_sigma: Float,
    tau: Float,
    tau_prime: Float,
    epsilon0: Float,
}

impl UncorrelatedNStepSize {
    /// Creates a new instance of `UncorrelatedNStepSize`.
    pub fn new(
        dimension: usize,
        mu: usize,
        initial_sigma: Float,
        tau: Float,
        tau_prime: Float,
        epsilon0: Float,
    ) -> Self {
        Self { dimension, mu, initial_sigma, tau, tau_prime, epsilon0 }
    }

    /// Creates a new instance of `UncorrelatedNStepSize` with the learning
    /// rates derived from the dimensionality.
    pub fn new_with_defaults(dimension: usize, mu: usize, initial_sigma: Float, epsilon0: Float) -> Self {
        Self::new(
            dimension,
            mu,
            initial_sigma,
            derive_tau(dimension),
            derive_tau_prime(dimension),
            epsilon0,
        )
    }
}

/// Derives the per-dimension learning rate from the dimensionality.
pub fn derive_tau(dimension: usize) -> Float {
    1e-7 / (2. * (dimension as Float).sqrt()).sqrt()
}

/// Derives the global learning rate from the dimensionality.
pub fn derive_tau_prime(dimension: usize) -> Float {
    1. / (2. * dimension as Float).sqrt()
}

impl Strategy for UncorrelatedNStepSize {
    fn title(&self) -> String {
        format!("uncorrelated n-step-size, initial sigma={:.2}", self.initial_sigma)
    }

    fn initial_population(&self) -> Vec<Candidate> {
        (0..self.mu).map(|_| Candidate::initial(self.dimension, self.initial_sigma, self.dimension)).collect()
    }

    fn mutate(
        &mut self,
        parents: &[Candidate],
        _slot: usize,
        _objective: &SphereObjective,
        random: &dyn Random,
    ) -> Candidate {
        let parent = &parents[random.uniform_int(self.mu as i32) as usize];
        let gaussian_prime = random.gaussian(1.);

        let sigmas = parent
            .sigmas()
            .iter()
            .map(|sigma| {
                let factor = (self.tau_prime * gaussian_prime + self.tau * random.gaussian(1.)).exp();
                (sigma * factor).max(self.epsilon0)
            })
            .collect::<Vec<_>>();

        let chromosome = parent
            .chromosome()
            .iter()
            .zip(sigmas.iter())
            .map(|(gene, sigma)| gene + sigma * random.gaussian(1.))
            .collect();

        Candidate::new(chromosome, sigmas)
    }
}
