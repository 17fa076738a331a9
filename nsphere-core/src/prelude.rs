//! This module reimports commonly used types.

pub use crate::evolution::Experiment;
pub use crate::evolution::ExperimentBuilder;
pub use crate::evolution::GenerationRecord;
pub use crate::evolution::RunResult;
pub use crate::evolution::RunStatus;
pub use crate::evolution::StrategyKind;
pub use crate::evolution::TelemetryMode;

pub use crate::objective::SphereObjective;
pub use crate::selection::ReplacementMode;
pub use crate::solution::Candidate;

pub use crate::strategies::StepSizeScope;
pub use crate::strategies::Strategy;
pub use crate::strategies::CONVERGENCE_THRESHOLD;
pub use crate::strategies::DEFAULT_ADAPTATION_FACTOR;

pub use crate::utils::compare_floats;
pub use crate::utils::Environment;
pub use crate::utils::Float;
pub use crate::utils::GenericError;
pub use crate::utils::GenericResult;
pub use crate::utils::InfoLogger;
pub use crate::utils::RngKind;
pub use crate::utils::SeedableRandom;
pub use crate::utils::Random;
pub use crate::utils::Timer;
