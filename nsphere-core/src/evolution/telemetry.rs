//! A module which provides the logic to collect per-generation records and
//! simple progress logging.

#[cfg(test)]
#[path = "../../tests/unit/evolution/telemetry_test.rs"]
mod telemetry_test;

use crate::utils::{Float, InfoLogger};

/// Represents information about one generation, as consumed by the external
/// persistence collaborator.
#[derive(Clone, Debug, PartialEq)]
pub struct GenerationRecord {
    /// Generation sequence number, starting at 0.
    pub generation: usize,
    /// Average fitness of the parent population before selection.
    pub average_fitness: Float,
    /// Fitness of every parent, in population order.
    pub parent_fitnesses: Vec<Float>,
    /// Fitness of every offspring, in slot order.
    pub offspring_fitnesses: Vec<Float>,
}

/// Specifies a telemetry mode.
#[derive(Clone)]
pub enum TelemetryMode {
    /// No progress logging, records are still collected.
    None,
    /// Logs progress with given cadence.
    OnlyLogging {
        /// A logger type.
        logger: InfoLogger,
        /// Specifies how often a generation is logged.
        log_every: usize,
    },
}

/// Provides a way to collect generation records and write progress into log.
pub struct Telemetry {
    mode: TelemetryMode,
    records: Vec<GenerationRecord>,
}

impl Telemetry {
    /// Creates a new instance of `Telemetry`.
    pub fn new(mode: TelemetryMode) -> Self {
        Self { mode, records: vec![] }
    }

    /// Observes one finished generation.
    pub fn on_generation(&mut self, record: GenerationRecord) {
        if let TelemetryMode::OnlyLogging { logger, log_every } = &self.mode {
            if *log_every > 0 && record.generation % *log_every == 0 {
                (logger)(&format!(
                    "[{}] average fitness: {:.5}, best parent: {:.5}",
                    record.generation,
                    record.average_fitness,
                    record.parent_fitnesses.iter().copied().fold(Float::INFINITY, Float::min),
                ));
            }
        }

        self.records.push(record);
    }

    /// Takes all collected records out of the telemetry.
    pub fn take_records(&mut self) -> Vec<GenerationRecord> {
        std::mem::take(&mut self.records)
    }
}
