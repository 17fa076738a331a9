//! The strategies module contains the mutation and step-size self-adaptation
//! variants studied by the experiments.

use crate::objective::SphereObjective;
use crate::solution::Candidate;
use crate::utils::{Float, Random};

mod fixed_step;
pub use self::fixed_step::FixedStepSize;

mod one_fifth;
pub use self::one_fifth::{OneFifthRule, StepSizeScope, DEFAULT_ADAPTATION_FACTOR};

mod uncorrelated;
pub use self::uncorrelated::{derive_tau, derive_tau_prime, UncorrelatedNStepSize};

/// A parent fitness at or below this value terminates the run as converged.
pub const CONVERGENCE_THRESHOLD: Float = 0.0005;

/// A capability interface of a mutation/self-adaptation variant. A strategy
/// produces one offspring per call and owns whatever adaptation state the
/// variant needs between calls.
pub trait Strategy {
    /// Returns a short human readable description of the variant.
    fn title(&self) -> String;

    /// Builds the initial parent population: all genes set to 1.0, step-sizes
    /// broadcast from the configured initial value.
    fn initial_population(&self) -> Vec<Candidate>;

    /// Produces exactly one offspring for given slot index. Called once per
    /// slot `0..lambda` each generation, in slot order.
    fn mutate(
        &mut self,
        parents: &[Candidate],
        slot: usize,
        objective: &SphereObjective,
        random: &dyn Random,
    ) -> Candidate;

    /// Returns true if any parent with an already computed fitness is at or
    /// below the convergence threshold. Unevaluated parents are ignored.
    fn goal_reached(&self, parents: &[Candidate]) -> bool {
        parents.iter().filter_map(|candidate| candidate.fitness()).any(|fitness| fitness <= CONVERGENCE_THRESHOLD)
    }
}
