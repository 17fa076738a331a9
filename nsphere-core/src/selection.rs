#[cfg(test)]
#[path = "../tests/unit/selection_test.rs"]
mod selection_test;

use crate::objective::SphereObjective;
use crate::solution::Candidate;
use crate::utils::compare_floats;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Specifies a replacement discipline for survivor selection.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ReplacementMode {
    /// Parents and offspring compete together, `(mu+lambda)`.
    #[default]
    Plus,
    /// Offspring replace parents entirely, `(mu,lambda)`. Requires `lambda >= mu`.
    Comma,
}

impl ReplacementMode {
    /// Renders the classical mode notation, e.g. `(1+1)` or `(3,10)`.
    pub fn notation(&self, mu: usize, lambda: usize) -> String {
        match self {
            ReplacementMode::Plus => format!("({mu}+{lambda})"),
            ReplacementMode::Comma => format!("({mu},{lambda})"),
        }
    }
}

impl Display for ReplacementMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ReplacementMode::Plus => write!(f, "plus"),
            ReplacementMode::Comma => write!(f, "comma"),
        }
    }
}

impl FromStr for ReplacementMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plus" => Ok(ReplacementMode::Plus),
            "comma" => Ok(ReplacementMode::Comma),
            _ => Err(format!("unknown replacement mode: '{s}'")),
        }
    }
}

/// A truncation survivor selection: keeps the `mu` best members of the
/// candidate pool, ascending by fitness.
pub struct TruncationSelection {
    mode: ReplacementMode,
    mu: usize,
}

impl TruncationSelection {
    /// Creates a new instance of `TruncationSelection`.
    pub fn new(mode: ReplacementMode, mu: usize) -> Self {
        Self { mode, mu }
    }

    /// Selects the next parent population from current parents and offspring.
    ///
    /// The pool keeps insertion order (parents before offspring in plus mode,
    /// offspring order in comma mode) and the sort is stable, so equal-fitness
    /// members survive in original pool order. Any member without a cached
    /// fitness is evaluated here, in pool order.
    pub fn select(
        &self,
        objective: &SphereObjective,
        parents: Vec<Candidate>,
        offspring: Vec<Candidate>,
    ) -> Vec<Candidate> {
        let mut pool = match self.mode {
            ReplacementMode::Plus => parents.into_iter().chain(offspring).collect::<Vec<_>>(),
            ReplacementMode::Comma => offspring,
        };

        pool.iter().for_each(|member| {
            objective.fitness(member);
        });

        pool.sort_by(|a, b| compare_floats(objective.fitness(a), objective.fitness(b)));
        pool.truncate(self.mu);

        pool
    }
}
