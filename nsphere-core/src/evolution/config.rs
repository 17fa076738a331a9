use super::*;
use crate::selection::ReplacementMode;
use crate::strategies::*;
use crate::utils::{Environment, Float, GenericResult};
use std::sync::Arc;

/// Specifies which strategy variant an experiment runs, together with the
/// variant specific parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum StrategyKind {
    /// Fixed step-size mutation.
    FixedStepSize,
    /// The 1/5 success rule.
    OneFifthRule {
        /// Window length `g`, in mutations.
        window_size: usize,
        /// Adaptation factor `a`.
        adaptation_factor: Float,
        /// Working step-size granularity.
        scope: StepSizeScope,
    },
    /// Uncorrelated n-step-size self-adaptation.
    UncorrelatedNStepSize {
        /// Per-dimension learning rate; derived from the dimensionality when not set.
        tau: Option<Float>,
        /// Global learning rate; derived from the dimensionality when not set.
        tau_prime: Option<Float>,
        /// Lower bound preventing step-size collapse.
        epsilon0: Float,
    },
}

impl StrategyKind {
    /// Returns a short name used in log directory naming.
    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::FixedStepSize => "fss",
            StrategyKind::OneFifthRule { .. } => "onefive",
            StrategyKind::UncorrelatedNStepSize { .. } => "unss",
        }
    }
}

/// A validated configuration which controls a single experiment run.
#[derive(Clone, Debug)]
pub struct ExperimentConfig {
    /// Problem dimensionality.
    pub dimension: usize,
    /// Survivor replacement discipline.
    pub mode: ReplacementMode,
    /// Amount of parents.
    pub mu: usize,
    /// Amount of offspring per generation.
    pub lambda: usize,
    /// Initial mutation step-size.
    pub initial_sigma: Float,
    /// Generation cap.
    pub upper_limit: usize,
}

/// Provides a configurable way to build an experiment using fluent interface style.
/// All parameter validation happens here, before any generation runs.
pub struct ExperimentBuilder {
    dimension: usize,
    mode: ReplacementMode,
    mu: usize,
    lambda: usize,
    initial_sigma: Float,
    strategy: StrategyKind,
    upper_limit: usize,
    telemetry_mode: TelemetryMode,
}

impl Default for ExperimentBuilder {
    fn default() -> Self {
        Self {
            dimension: 10,
            mode: ReplacementMode::Plus,
            mu: 1,
            lambda: 1,
            initial_sigma: 1.,
            strategy: StrategyKind::FixedStepSize,
            upper_limit: 10_000_000,
            telemetry_mode: TelemetryMode::None,
        }
    }
}

impl ExperimentBuilder {
    /// Sets problem dimensionality.
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = dimension;
        self
    }

    /// Sets replacement mode and population sizes.
    pub fn with_selection(mut self, mode: ReplacementMode, mu: usize, lambda: usize) -> Self {
        self.mode = mode;
        self.mu = mu;
        self.lambda = lambda;
        self
    }

    /// Sets the initial mutation step-size.
    pub fn with_initial_sigma(mut self, initial_sigma: Float) -> Self {
        self.initial_sigma = initial_sigma;
        self
    }

    /// Sets the strategy variant to run.
    pub fn with_strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the generation cap. Default is 10,000,000.
    pub fn with_upper_limit(mut self, upper_limit: usize) -> Self {
        self.upper_limit = upper_limit;
        self
    }

    /// Sets a telemetry mode. Default is no telemetry.
    pub fn with_telemetry(mut self, telemetry_mode: TelemetryMode) -> Self {
        self.telemetry_mode = telemetry_mode;
        self
    }

    /// Builds the experiment, failing fast on an invalid configuration.
    pub fn build(self, environment: Arc<Environment>) -> GenericResult<Experiment> {
        if self.dimension < 1 {
            return Err("dimension must be at least 1".into());
        }

        if self.mu < 1 || self.lambda < 1 {
            return Err("mu and lambda must be at least 1".into());
        }

        if self.mode == ReplacementMode::Comma && self.lambda < self.mu {
            return Err(format!(
                "comma replacement requires lambda >= mu, got mu={}, lambda={}",
                self.mu, self.lambda
            )
            .into());
        }

        if !(self.initial_sigma.is_finite() && self.initial_sigma > 0.) {
            return Err(format!("initial sigma must be positive, got {}", self.initial_sigma).into());
        }

        let strategy: Box<dyn Strategy> = match self.strategy {
            StrategyKind::FixedStepSize => {
                Box::new(FixedStepSize::new(self.dimension, self.mu, self.initial_sigma))
            }
            StrategyKind::OneFifthRule { window_size, adaptation_factor, scope } => {
                if window_size < 1 {
                    return Err("window size must be at least 1".into());
                }
                if !(adaptation_factor.is_finite() && adaptation_factor > 0.) {
                    return Err(
                        format!("adaptation factor must be positive, got {adaptation_factor}").into()
                    );
                }

                Box::new(OneFifthRule::new(
                    self.dimension,
                    self.mu,
                    self.lambda,
                    self.initial_sigma,
                    window_size,
                    adaptation_factor,
                    scope,
                ))
            }
            StrategyKind::UncorrelatedNStepSize { tau, tau_prime, epsilon0 } => {
                if !(epsilon0.is_finite() && epsilon0 > 0.) {
                    return Err(format!("epsilon0 must be positive, got {epsilon0}").into());
                }

                Box::new(UncorrelatedNStepSize::new(
                    self.dimension,
                    self.mu,
                    self.initial_sigma,
                    tau.unwrap_or_else(|| derive_tau(self.dimension)),
                    tau_prime.unwrap_or_else(|| derive_tau_prime(self.dimension)),
                    epsilon0,
                ))
            }
        };

        let config = ExperimentConfig {
            dimension: self.dimension,
            mode: self.mode,
            mu: self.mu,
            lambda: self.lambda,
            initial_sigma: self.initial_sigma,
            upper_limit: self.upper_limit,
        };

        Ok(Experiment::new(config, strategy, Telemetry::new(self.telemetry_mode), environment))
    }
}
