use crate::utils::{Random, RngKind, SeedableRandom};
use std::sync::Arc;

/// Specifies a logger type which takes a string message.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences a run:
/// the randomization source and the logger. Constructed once per run and
/// never mutated afterwards.
pub struct Environment {
    /// A random generator used by every stochastic operator of the run.
    pub random: Arc<dyn Random>,
    /// A logger type to be used.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, logger: InfoLogger) -> Self {
        Self { random, logger }
    }

    /// Creates a new instance of `Environment` with the given algorithm and seed.
    pub fn new_with_seed(kind: RngKind, seed: u64) -> Self {
        Self::new(Arc::new(SeedableRandom::new(kind, seed)), Arc::new(|msg: &str| println!("{msg}")))
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new(Arc::new(SeedableRandom::default()), Arc::new(|msg: &str| println!("{msg}")))
    }
}
