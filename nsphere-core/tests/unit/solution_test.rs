use super::*;

#[test]
fn can_create_initial_candidate() {
    let candidate = Candidate::initial(4, 0.5, 1);

    assert_eq!(candidate.chromosome(), &[1., 1., 1., 1.]);
    assert_eq!(candidate.sigmas(), &[0.5]);
    assert_eq!(candidate.fitness(), None);
}

#[test]
fn can_broadcast_sigma_across_slots() {
    let candidate = Candidate::initial(3, 0.1, 3);

    assert_eq!(candidate.sigmas(), &[0.1, 0.1, 0.1]);
}

#[test]
fn can_compute_fitness_at_most_once() {
    let candidate = Candidate::new(vec![2., 2.], vec![]);
    let mut calls = 0;

    let first = candidate.fitness_or_init(|chromosome| {
        calls += 1;
        chromosome.iter().sum()
    });
    let second = candidate.fitness_or_init(|_| unreachable!("fitness must be cached"));

    assert_eq!(calls, 1);
    assert_eq!(first, 4.);
    assert_eq!(second, 4.);
    assert_eq!(candidate.fitness(), Some(4.));
}
