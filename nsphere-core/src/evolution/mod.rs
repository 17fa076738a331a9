//! Contains functionality to run an evolution strategy experiment.

#[cfg(test)]
#[path = "../../tests/unit/evolution/experiment_test.rs"]
mod experiment_test;

mod config;
pub use self::config::*;

mod telemetry;
pub use self::telemetry::*;

use crate::objective::SphereObjective;
use crate::selection::TruncationSelection;
use crate::solution::Candidate;
use crate::strategies::Strategy;
use crate::utils::{Environment, Float, Timer};
use std::sync::Arc;

/// Specifies a terminal state of an experiment run.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RunStatus {
    /// A parent reached the convergence threshold.
    Converged,
    /// The generation cap was reached without convergence.
    CappedOut,
}

/// The outcome of a finished run: terminal state, bookkeeping totals and the
/// per-generation records for the external persistence collaborator.
#[derive(Debug)]
pub struct RunResult {
    /// Terminal state of the run.
    pub status: RunStatus,
    /// Total generations run.
    pub generations: usize,
    /// Total amount of distinct candidates evaluated.
    pub total_evaluations: usize,
    /// One record per generation, in generation order.
    pub records: Vec<GenerationRecord>,
}

/// An experiment: one evolution strategy run over the sphere model. Owns the
/// strategy with its adaptation state, the objective with its evaluation log
/// and the randomization environment; nothing is shared between runs.
pub struct Experiment {
    config: ExperimentConfig,
    strategy: Box<dyn Strategy>,
    selection: TruncationSelection,
    objective: SphereObjective,
    telemetry: Telemetry,
    environment: Arc<Environment>,
}

impl Experiment {
    pub(crate) fn new(
        config: ExperimentConfig,
        strategy: Box<dyn Strategy>,
        telemetry: Telemetry,
        environment: Arc<Environment>,
    ) -> Self {
        let selection = TruncationSelection::new(config.mode, config.mu);

        Self { config, strategy, selection, objective: SphereObjective::new(), telemetry, environment }
    }

    /// Returns a human readable description of the experiment.
    pub fn title(&self) -> String {
        format!(
            "{}-dimensional sphere model: {}, {}",
            self.config.dimension,
            self.strategy.title(),
            self.config.mode.notation(self.config.mu, self.config.lambda)
        )
    }

    /// Returns the experiment configuration.
    pub fn config(&self) -> &ExperimentConfig {
        &self.config
    }

    /// Runs generations until a parent converges or the generation cap is
    /// reached, and returns the collected results.
    pub fn run(&mut self) -> RunResult {
        let timer = Timer::start();
        let random = self.environment.random.clone();

        let mut parents = self.strategy.initial_population();
        let mut generation = 0;

        let status = loop {
            let offspring = (0..self.config.lambda)
                .map(|slot| self.strategy.mutate(parents.as_slice(), slot, &self.objective, random.as_ref()))
                .collect::<Vec<_>>();

            let parent_fitnesses = self.force_evaluate(parents.as_slice());
            let offspring_fitnesses = self.force_evaluate(offspring.as_slice());
            let average_fitness = parent_fitnesses.iter().sum::<Float>() / self.config.mu as Float;

            self.telemetry.on_generation(GenerationRecord {
                generation,
                average_fitness,
                parent_fitnesses,
                offspring_fitnesses,
            });

            parents = self.selection.select(&self.objective, parents, offspring);
            generation += 1;

            if self.strategy.goal_reached(parents.as_slice()) {
                break RunStatus::Converged;
            }

            if generation >= self.config.upper_limit {
                break RunStatus::CappedOut;
            }
        };

        let total_evaluations = self.objective.evaluations();
        (self.environment.logger)(&format!(
            "{}: {status:?} after {generation} generations, {total_evaluations} evaluations, {}",
            self.title(),
            timer.elapsed_display()
        ));

        RunResult { status, generations: generation, total_evaluations, records: self.telemetry.take_records() }
    }

    fn force_evaluate(&self, candidates: &[Candidate]) -> Vec<Float> {
        candidates.iter().map(|candidate| self.objective.fitness(candidate)).collect()
    }
}
