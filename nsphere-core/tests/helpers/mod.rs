//! Contains helper functionality for tests.

use crate::prelude::*;
use std::sync::Arc;

/// Creates a silent environment with a fixed seed.
pub fn create_test_environment(seed: u64) -> Arc<Environment> {
    Arc::new(Environment::new(Arc::new(SeedableRandom::new(RngKind::Xoshiro, seed)), Arc::new(|_: &str| {})))
}

/// Creates a candidate from given genes without step-sizes.
pub fn create_candidate(genes: &[Float]) -> Candidate {
    Candidate::new(genes.to_vec(), vec![])
}

/// Creates a candidate from given genes and forces its fitness through given objective.
pub fn create_evaluated_candidate(genes: &[Float], objective: &SphereObjective) -> Candidate {
    let candidate = create_candidate(genes);
    objective.fitness(&candidate);

    candidate
}
