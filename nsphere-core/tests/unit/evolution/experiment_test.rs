use super::*;
use crate::helpers::*;
use crate::selection::ReplacementMode;
use crate::strategies::{StepSizeScope, DEFAULT_ADAPTATION_FACTOR};

fn create_fss_experiment(seed: u64, upper_limit: usize) -> Experiment {
    ExperimentBuilder::default()
        .with_dimension(2)
        .with_selection(ReplacementMode::Plus, 1, 1)
        .with_initial_sigma(1.)
        .with_strategy(StrategyKind::FixedStepSize)
        .with_upper_limit(upper_limit)
        .build(create_test_environment(seed))
        .expect("cannot build experiment")
}

#[test]
fn can_reproduce_records_from_seed() {
    let first = create_fss_experiment(42, 100).run();
    let second = create_fss_experiment(42, 100).run();

    assert_eq!(first.generations, second.generations);
    assert_eq!(first.total_evaluations, second.total_evaluations);
    assert_eq!(first.records, second.records);
}

#[test]
fn can_cap_run_at_upper_limit() {
    let result = create_fss_experiment(42, 1).run();

    assert_eq!(result.status, RunStatus::CappedOut);
    assert_eq!(result.generations, 1);
    assert_eq!(result.records.len(), 1);
}

#[test]
fn can_converge_before_upper_limit() {
    let result = create_fss_experiment(42, 1_000_000).run();

    assert_eq!(result.status, RunStatus::Converged);
    assert!(result.generations < 1_000_000);

    let last = result.records.last().expect("no records");
    assert_eq!(result.records.len(), result.generations);
    assert_eq!(last.generation, result.generations - 1);
}

#[test]
fn can_shape_generation_records() {
    let mu = 3;
    let lambda = 5;
    let result = ExperimentBuilder::default()
        .with_dimension(4)
        .with_selection(ReplacementMode::Comma, mu, lambda)
        .with_initial_sigma(0.1)
        .with_strategy(StrategyKind::FixedStepSize)
        .with_upper_limit(10)
        .build(create_test_environment(7))
        .expect("cannot build experiment")
        .run();

    assert_eq!(result.records.len(), 10);
    result.records.iter().enumerate().for_each(|(idx, record)| {
        assert_eq!(record.generation, idx);
        assert_eq!(record.parent_fitnesses.len(), mu);
        assert_eq!(record.offspring_fitnesses.len(), lambda);

        let average = record.parent_fitnesses.iter().sum::<Float>() / mu as Float;
        assert_eq!(record.average_fitness, average);
    });

    // first generation parents are the initial population: all genes at 1.0
    assert_eq!(result.records[0].parent_fitnesses, vec![4.; mu]);
}

#[test]
fn can_count_each_candidate_evaluation_once() {
    let result = create_fss_experiment(42, 5).run();

    // one evaluation for the initial parent, one per offspring
    assert_eq!(result.total_evaluations, 1 + result.generations);
}

#[test]
fn can_run_one_fifth_rule_to_termination() {
    let result = ExperimentBuilder::default()
        .with_dimension(2)
        .with_selection(ReplacementMode::Plus, 1, 1)
        .with_initial_sigma(1.)
        .with_strategy(StrategyKind::OneFifthRule {
            window_size: 10,
            adaptation_factor: DEFAULT_ADAPTATION_FACTOR,
            scope: StepSizeScope::PerSlot,
        })
        .with_upper_limit(1_000_000)
        .build(create_test_environment(42))
        .expect("cannot build experiment")
        .run();

    assert_eq!(result.status, RunStatus::Converged);
}

#[test]
fn can_run_uncorrelated_strategy_to_cap() {
    let result = ExperimentBuilder::default()
        .with_dimension(5)
        .with_selection(ReplacementMode::Plus, 2, 4)
        .with_initial_sigma(0.1)
        .with_strategy(StrategyKind::UncorrelatedNStepSize { tau: None, tau_prime: None, epsilon0: 0.0001 })
        .with_upper_limit(50)
        .build(create_test_environment(42))
        .expect("cannot build experiment")
        .run();

    assert_eq!(result.generations, 50);
    assert_eq!(result.records.len(), 50);
}

#[test]
fn can_reject_invalid_configuration() {
    assert!(ExperimentBuilder::default()
        .with_selection(ReplacementMode::Comma, 2, 1)
        .build(create_test_environment(1))
        .is_err());

    assert!(ExperimentBuilder::default()
        .with_initial_sigma(0.)
        .build(create_test_environment(1))
        .is_err());

    assert!(ExperimentBuilder::default()
        .with_strategy(StrategyKind::OneFifthRule {
            window_size: 0,
            adaptation_factor: DEFAULT_ADAPTATION_FACTOR,
            scope: StepSizeScope::PerSlot,
        })
        .build(create_test_environment(1))
        .is_err());

    assert!(ExperimentBuilder::default()
        .with_strategy(StrategyKind::UncorrelatedNStepSize { tau: None, tau_prime: None, epsilon0: 0. })
        .build(create_test_environment(1))
        .is_err());
}

#[test]
fn can_describe_experiment() {
    let experiment = create_fss_experiment(1, 1);

    assert_eq!(experiment.title(), "2-dimensional sphere model: fixed step-size, sigma=1.00, (1+1)");
}
