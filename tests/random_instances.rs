//! Larger seeded instances exercising every method end to end.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cvrp_tabu::constructive::{trivial, Construction};
use cvrp_tabu::evaluation::{evaluate, is_valid, total_cost};
use cvrp_tabu::models::{Customer, Instance};
use cvrp_tabu::runner::{run_all, Method};
use cvrp_tabu::tabu::{StopReason, TabuConfig, TabuRunner, TabuVariant};

fn random_instance(seed: u64, n: usize, capacity: i32) -> Instance {
    let mut rng = StdRng::seed_from_u64(seed);
    let depot = Customer::depot(50.0, 50.0);
    let customers = (1..=n)
        .map(|id| {
            Customer::new(
                id,
                rng.random_range(0.0..100.0),
                rng.random_range(0.0..100.0),
                rng.random_range(1..=capacity / 3),
            )
        })
        .collect();
    Instance::new(depot, customers, capacity).expect("valid")
}

#[test]
fn constructions_beat_singleton_routes() {
    let instance = random_instance(42, 40, 60);
    let baseline = total_cost(&trivial(&instance), &instance);

    for heuristic in Construction::ALL {
        let solution = heuristic.build(&instance);
        assert!(is_valid(&solution, &instance), "{}", heuristic.name());
        assert!(
            total_cost(&solution, &instance) < baseline,
            "{} did not improve on singleton routes",
            heuristic.name()
        );
    }
}

#[test]
fn savings_uses_fewer_routes_than_customers() {
    let instance = random_instance(7, 30, 100);
    let metrics = evaluate(&Construction::Savings.build(&instance), &instance);
    assert!(metrics.num_routes < 30);
    assert!(metrics.routes.iter().all(|r| r.load <= i64::from(r.capacity)));
}

#[test]
fn tabu_improves_on_seed() {
    let instance = random_instance(3, 15, 40);
    let config = TabuConfig::preset(TabuVariant::Complete)
        .with_time_limit(Duration::from_secs(10))
        .with_max_no_improve(20);
    let result = TabuRunner::run(&instance, &config);

    assert!(is_valid(&result.best, &instance));
    assert!(result.best_cost < total_cost(&trivial(&instance), &instance));
    assert_ne!(result.stop_reason, StopReason::Exhausted);
}

#[test]
fn tabu_respects_time_limit() {
    let instance = random_instance(11, 25, 50);
    let config = TabuConfig::preset(TabuVariant::Complete)
        .with_time_limit(Duration::from_millis(200))
        .with_max_no_improve(usize::MAX);
    let result = TabuRunner::run(&instance, &config);

    assert_eq!(result.stop_reason, StopReason::TimeLimit);
    // one neighborhood scan may run past the deadline
    assert!(result.elapsed < Duration::from_secs(5));
    assert!(is_valid(&result.best, &instance));
}

#[test]
fn run_all_covers_every_method() {
    let instance = random_instance(5, 10, 30);
    let summaries = run_all(&instance, Duration::from_secs(2));

    let methods: Vec<Method> = summaries.iter().map(|s| s.method).collect();
    assert_eq!(methods, Method::all());
    for s in &summaries {
        assert!(is_valid(&s.solution, &instance), "{}", s.method.name());
    }
}
