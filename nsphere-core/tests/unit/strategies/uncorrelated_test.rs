use super::*;
use crate::utils::{RngKind, SeedableRandom};

#[test]
fn can_create_initial_population_with_per_dimension_sigmas() {
    let strategy = UncorrelatedNStepSize::new_with_defaults(4, 2, 0.5, 0.0001);

    let population = strategy.initial_population();

    assert_eq!(population.len(), 2);
    population.iter().for_each(|candidate| {
        assert_eq!(candidate.chromosome(), &[1., 1., 1., 1.]);
        assert_eq!(candidate.sigmas(), &[0.5, 0.5, 0.5, 0.5]);
    });
}

#[test]
fn can_derive_learning_rates_from_dimensionality() {
    let dimension = 10;

    assert_eq!(derive_tau(dimension), 1e-7 / (2. * (dimension as Float).sqrt()).sqrt());
    assert_eq!(derive_tau_prime(dimension), 1. / (2. * dimension as Float).sqrt());
}

#[test]
fn can_keep_step_sizes_above_floor() {
    let objective = SphereObjective::new();
    let random = SeedableRandom::new(RngKind::Xoshiro, 42);
    let epsilon0 = 1.;
    let mut strategy = UncorrelatedNStepSize::new_with_defaults(8, 1, 0.001, epsilon0);
    let mut parents = strategy.initial_population();

    for _ in 0..25 {
        let offspring = strategy.mutate(parents.as_slice(), 0, &objective, &random);
        offspring.sigmas().iter().for_each(|sigma| assert!(*sigma >= epsilon0));
        parents = vec![offspring];
    }
}

#[test]
fn can_regenerate_sigmas_instead_of_inheriting() {
    let objective = SphereObjective::new();
    let random = SeedableRandom::new(RngKind::Xoshiro, 42);
    let mut strategy = UncorrelatedNStepSize::new_with_defaults(4, 1, 1., 1e-9);
    let parents = strategy.initial_population();

    let offspring = strategy.mutate(parents.as_slice(), 0, &objective, &random);

    assert_eq!(offspring.sigmas().len(), 4);
    offspring.sigmas().iter().for_each(|sigma| assert_ne!(*sigma, 1.));
    assert_eq!(parents[0].sigmas(), &[1., 1., 1., 1.]);
}
