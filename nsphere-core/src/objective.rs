#[cfg(test)]
#[path = "../tests/unit/objective_test.rs"]
mod objective_test;

use crate::solution::Candidate;
use crate::utils::Float;
use std::cell::RefCell;

/// A sphere model objective: the sum of squared coordinates, minimized at the
/// origin. Keeps an append-only log of every fitness value ever computed, in
/// evaluation order; the log is used by post-hoc analysis only, never by the
/// algorithm itself.
#[derive(Default)]
pub struct SphereObjective {
    evaluations: RefCell<Vec<Float>>,
}

impl SphereObjective {
    /// Creates a new instance of `SphereObjective` with an empty evaluation log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluates a point in the search space. A pure function of the chromosome.
    pub fn evaluate(&self, chromosome: &[Float]) -> Float {
        chromosome.iter().map(|gene| gene * gene).sum()
    }

    /// Returns the fitness of given candidate, computing and caching it on
    /// first access. Exactly one evaluation log entry is appended per
    /// candidate, no matter how many times this accessor is called.
    pub fn fitness(&self, candidate: &Candidate) -> Float {
        candidate.fitness_or_init(|chromosome| {
            let value = self.evaluate(chromosome);
            self.evaluations.borrow_mut().push(value);
            value
        })
    }

    /// Returns the total amount of evaluations performed so far.
    pub fn evaluations(&self) -> usize {
        self.evaluations.borrow().len()
    }

    /// Returns a copy of the evaluation log in computation order.
    pub fn evaluation_log(&self) -> Vec<Float> {
        self.evaluations.borrow().clone()
    }
}
