#[cfg(test)]
#[path = "../../tests/unit/strategies/one_fifth_test.rs"]
mod one_fifth_test;

use super::*;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The canonical adaptation factor, derived from the theory of the 1/5 rule.
pub const DEFAULT_ADAPTATION_FACTOR: Float = 0.817;

/// Specifies how many working step-size states the 1/5 rule maintains.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum StepSizeScope {
    /// A single working step-size shared by all offspring slots.
    Shared,
    /// An independent working step-size per offspring slot.
    #[default]
    PerSlot,
}

impl Display for StepSizeScope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StepSizeScope::Shared => write!(f, "shared"),
            StepSizeScope::PerSlot => write!(f, "per-slot"),
        }
    }
}

impl FromStr for StepSizeScope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "shared" => Ok(StepSizeScope::Shared),
            "per-slot" => Ok(StepSizeScope::PerSlot),
            _ => Err(format!("unknown step-size scope: '{s}'")),
        }
    }
}

/// A working step-size with the success bookkeeping of its current window.
/// Advanced by value: every observed mutation outcome yields the next state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct WindowState {
    pub sigma: Float,
    pub successes: usize,
    pub trials: usize,
}

impl WindowState {
    pub fn new(sigma: Float) -> Self {
        Self { sigma, successes: 0, trials: 0 }
    }

    /// Records one mutation outcome. When the observation closes a window of
    /// `window_size` mutations, the step-size is re-derived from the success
    /// fraction and both counters reset: above 1/5 the step-size is divided
    /// by the adaptation factor, below 1/5 multiplied, at exactly 1/5 kept.
    pub fn observe(self, success: bool, window_size: usize, adaptation_factor: Float) -> Self {
        let mut next = self;
        next.trials += 1;
        if success {
            next.successes += 1;
        }

        if next.trials == window_size {
            let p_s = next.successes as Float / window_size as Float;
            if p_s > 0.2 {
                next.sigma /= adaptation_factor;
            } else if p_s < 0.2 {
                next.sigma *= adaptation_factor;
            }
            next.successes = 0;
            next.trials = 0;
        }

        next
    }
}

/// The 1/5 success rule strategy: gaussian mutation with a working step-size
/// re-derived after every window of mutations from the fraction of successful
/// ones. A mutation is successful if the offspring is strictly fitter than
/// the parent it was produced from. Window boundaries are counted in
/// mutations and are independent of generation boundaries.
pub struct OneFifthRule {
    dimension: usize,
    mu: usize,
    initial_sigma: Float,
    window_size: usize,
    adaptation_factor: Float,
    scope: StepSizeScope,
    states: Vec<WindowState>,
}

impl OneFifthRule {
    /// Creates a new instance of `OneFifthRule`.
    pub fn new(
        dimension: usize,
        mu: usize,
        lambda: usize,
        initial_sigma: Float,
        window_size: usize,
        adaptation_factor: Float,
        scope: StepSizeScope,
    ) -> Self {
        let states = match scope {
            StepSizeScope::Shared => vec![WindowState::new(initial_sigma)],
            StepSizeScope::PerSlot => vec![WindowState::new(initial_sigma); lambda],
        };

        Self { dimension, mu, initial_sigma, window_size, adaptation_factor, scope, states }
    }

    /// Returns the current working step-size for given offspring slot.
    pub fn current_sigma(&self, slot: usize) -> Float {
        self.states[self.state_index(slot)].sigma
    }

    fn state_index(&self, slot: usize) -> usize {
        match self.scope {
            StepSizeScope::Shared => 0,
            StepSizeScope::PerSlot => slot,
        }
    }
}

impl Strategy for OneFifthRule {
    fn title(&self) -> String {
        format!("1/5 success rule, initial sigma={:.2}", self.initial_sigma)
    }

    fn initial_population(&self) -> Vec<Candidate> {
        (0..self.mu).map(|_| Candidate::initial(self.dimension, self.initial_sigma, 1)).collect()
    }

    fn mutate(
        &mut self,
        parents: &[Candidate],
        slot: usize,
        objective: &SphereObjective,
        random: &dyn Random,
    ) -> Candidate {
        let idx = self.state_index(slot);
        let sigma = self.states[idx].sigma;

        let parent = &parents[random.uniform_int(self.mu as i32) as usize];
        let chromosome = parent.chromosome().iter().map(|gene| gene + random.gaussian(sigma)).collect();
        let offspring = Candidate::new(chromosome, vec![sigma]);

        let success = objective.fitness(&offspring) < objective.fitness(parent);
        self.states[idx] = self.states[idx].observe(success, self.window_size, self.adaptation_factor);

        offspring
    }
}
