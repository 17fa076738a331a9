use super::*;
use crate::utils::{RngKind, SeedableRandom};

fn drive_window(state: WindowState, successes: usize, window_size: usize, factor: Float) -> WindowState {
    (0..window_size).fold(state, |state, trial| state.observe(trial < successes, window_size, factor))
}

#[test]
fn can_increase_step_size_on_high_success_rate() {
    let state = drive_window(WindowState::new(1.), 2, 5, DEFAULT_ADAPTATION_FACTOR);

    assert_eq!(state.sigma, 1. / DEFAULT_ADAPTATION_FACTOR);
    assert_eq!(state.successes, 0);
    assert_eq!(state.trials, 0);
}

#[test]
fn can_decrease_step_size_on_low_success_rate() {
    let state = drive_window(WindowState::new(1.), 0, 5, DEFAULT_ADAPTATION_FACTOR);

    assert_eq!(state.sigma, DEFAULT_ADAPTATION_FACTOR);
}

#[test]
fn can_keep_step_size_on_exact_one_fifth() {
    let state = drive_window(WindowState::new(1.), 1, 5, DEFAULT_ADAPTATION_FACTOR);

    assert_eq!(state.sigma, 1.);
}

#[test]
fn can_keep_step_size_inside_window() {
    let state = WindowState::new(1.).observe(true, 5, DEFAULT_ADAPTATION_FACTOR);

    assert_eq!(state.sigma, 1.);
    assert_eq!(state.successes, 1);
    assert_eq!(state.trials, 1);
}

#[test]
fn can_close_window_on_mutation_count_not_generations() {
    let objective = SphereObjective::new();
    let random = SeedableRandom::new(RngKind::Xoshiro, 42);
    let mut strategy =
        OneFifthRule::new(2, 1, 1, 1., 3, DEFAULT_ADAPTATION_FACTOR, StepSizeScope::PerSlot);
    let mut parents = strategy.initial_population();

    // one mutation per generation with lambda=1: the window must close on the
    // third mutation, not on any generation boundary
    for expected_change in [false, false, true] {
        let offspring = strategy.mutate(parents.as_slice(), 0, &objective, &random);
        parents = vec![offspring];

        if expected_change {
            assert_ne!(strategy.current_sigma(0), 1.);
        } else {
            assert_eq!(strategy.current_sigma(0), 1.);
        }
    }
}

#[test]
fn can_share_window_state_across_slots() {
    let objective = SphereObjective::new();
    let random = SeedableRandom::new(RngKind::Xoshiro, 42);
    let mut strategy = OneFifthRule::new(2, 1, 2, 1., 2, DEFAULT_ADAPTATION_FACTOR, StepSizeScope::Shared);
    let parents = strategy.initial_population();

    // two mutations of one generation close the shared window of size two
    strategy.mutate(parents.as_slice(), 0, &objective, &random);
    assert_eq!(strategy.current_sigma(0), 1.);
    assert_eq!(strategy.current_sigma(1), 1.);

    strategy.mutate(parents.as_slice(), 1, &objective, &random);
    assert_ne!(strategy.current_sigma(0), 1.);
    assert_eq!(strategy.current_sigma(0), strategy.current_sigma(1));
}

#[test]
fn can_keep_slot_states_independent() {
    let objective = SphereObjective::new();
    let random = SeedableRandom::new(RngKind::Xoshiro, 42);
    let mut strategy =
        OneFifthRule::new(2, 1, 2, 1., 1, DEFAULT_ADAPTATION_FACTOR, StepSizeScope::PerSlot);
    let parents = strategy.initial_population();

    strategy.mutate(parents.as_slice(), 0, &objective, &random);

    assert_ne!(strategy.current_sigma(0), 1.);
    assert_eq!(strategy.current_sigma(1), 1.);
}
