use super::*;
use crate::helpers::*;

#[test]
fn can_evaluate_sphere_at_origin() {
    let objective = SphereObjective::new();

    assert_eq!(objective.evaluate(&[0., 0., 0.]), 0.);
}

#[test]
fn can_evaluate_sphere_at_unit_point() {
    let objective = SphereObjective::new();

    assert_eq!(objective.evaluate(&[1.; 10]), 10.);
}

#[test]
fn can_ignore_gene_signs() {
    let objective = SphereObjective::new();
    let genes = [1.5, -2., 0.25, -0.75];
    let negated = genes.iter().map(|gene| -gene).collect::<Vec<_>>();

    assert_eq!(objective.evaluate(&genes), objective.evaluate(negated.as_slice()));
}

#[test]
fn can_evaluate_candidate_at_most_once() {
    let objective = SphereObjective::new();
    let candidate = create_candidate(&[3., 4.]);

    let values = (0..5).map(|_| objective.fitness(&candidate)).collect::<Vec<_>>();

    assert_eq!(values, vec![25.; 5]);
    assert_eq!(objective.evaluations(), 1);
    assert_eq!(objective.evaluation_log(), vec![25.]);
}

#[test]
fn can_log_evaluations_in_computation_order() {
    let objective = SphereObjective::new();
    let first = create_candidate(&[1.]);
    let second = create_candidate(&[2.]);
    let third = create_candidate(&[3.]);

    objective.fitness(&second);
    objective.fitness(&first);
    objective.fitness(&third);
    objective.fitness(&second);

    assert_eq!(objective.evaluation_log(), vec![4., 1., 9.]);
}
