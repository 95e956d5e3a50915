//! Tabu search runner.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::constructive::trivial;
use crate::evaluation::total_cost;
use crate::models::{Instance, Solution};
use crate::neighborhood::{neighbors, Neighbor};

use super::{TabuConfig, TabuList};

/// Why the search loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StopReason {
    /// The wall-clock budget ran out.
    TimeLimit,
    /// `max_no_improve` consecutive iterations did not beat the best cost.
    NoImprovement,
    /// No admissible neighbor existed and diversification was disabled.
    Exhausted,
}

/// Result of a tabu search run.
#[derive(Debug, Clone)]
pub struct TabuResult {
    /// Best solution found.
    pub best: Solution,
    /// Total cost of `best`.
    pub best_cost: f64,
    /// Completed iterations (accepted moves plus restarts).
    pub iterations: usize,
    /// Diversification restarts performed.
    pub restarts: usize,
    /// Wall-clock time spent.
    pub elapsed: Duration,
    /// Termination cause.
    pub stop_reason: StopReason,
}

/// Executes tabu search over the swap, relocate and (optionally) 2-opt
/// neighborhoods.
///
/// Each iteration moves to the cheapest non-tabu neighbor, even when it is
/// worse than the current solution. The first neighbor in generation order
/// wins ties. The accepted move enters the tabu list. The best solution seen
/// is kept as an independent snapshot.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::tabu::{TabuConfig, TabuRunner, TabuVariant};
/// use cvrp_tabu::evaluation::is_valid;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![
///         Customer::new(1, 1.0, 1.0, 5),
///         Customer::new(2, -1.0, 1.0, 5),
///         Customer::new(3, -1.0, -1.0, 5),
///         Customer::new(4, 1.0, -1.0, 5),
///     ],
///     10,
/// )
/// .unwrap();
///
/// let config = TabuConfig::preset(TabuVariant::Complete)
///     .with_time_limit(Duration::from_secs(2))
///     .with_max_no_improve(10);
/// let result = TabuRunner::run(&instance, &config);
/// assert!(is_valid(&result.best, &instance));
/// assert!(result.best.num_routes() <= 4);
/// ```
pub struct TabuRunner;

impl TabuRunner {
    /// Runs tabu search on `instance` and returns the best solution found.
    #[tracing::instrument(
        level = "debug",
        name = "Tabu Search",
        skip_all,
        fields(customers = instance.num_customers())
    )]
    pub fn run(instance: &Instance, config: &TabuConfig) -> TabuResult {
        let start = Instant::now();

        let mut current = config.seed.build(instance);
        let mut best = current.clone();
        let mut best_cost = total_cost(&best, instance);
        let mut tabu = TabuList::new(config.tabu_size);

        let mut no_improve = 0;
        let mut iterations = 0;
        let mut restarts = 0;

        let stop_reason = loop {
            if start.elapsed() >= config.time_limit {
                break StopReason::TimeLimit;
            }
            if no_improve >= config.max_no_improve {
                break StopReason::NoImprovement;
            }

            match best_admissible(&current, instance, &tabu, config.intensification) {
                None if config.diversification => {
                    trace!(iteration = iterations, "no admissible neighbor, restarting");
                    current = trivial(instance);
                    tabu.clear();
                    no_improve += 1;
                    restarts += 1;
                }
                None => break StopReason::Exhausted,
                Some((neighbor, cost)) => {
                    tabu.push(neighbor.mv);
                    current = neighbor.solution;
                    if cost < best_cost {
                        best = current.clone();
                        best_cost = cost;
                        no_improve = 0;
                        debug!(iteration = iterations, cost, "new best");
                    } else {
                        no_improve += 1;
                    }
                }
            }
            iterations += 1;
        };

        let elapsed = start.elapsed();
        info!(
            best_cost,
            iterations,
            restarts,
            ?stop_reason,
            elapsed_ms = elapsed.as_millis() as u64,
            "tabu search finished"
        );

        TabuResult {
            best,
            best_cost,
            iterations,
            restarts,
            elapsed,
            stop_reason,
        }
    }
}

/// The cheapest neighbor whose move is not tabu, first one on ties.
fn best_admissible(
    current: &Solution,
    instance: &Instance,
    tabu: &TabuList,
    with_two_opt: bool,
) -> Option<(Neighbor, f64)> {
    let mut best: Option<(Neighbor, f64)> = None;
    for neighbor in neighbors(current, instance, with_two_opt).filter(|n| !tabu.contains(&n.mv)) {
        let cost = total_cost(&neighbor.solution, instance);
        if best.as_ref().is_none_or(|(_, b)| cost < *b) {
            best = Some((neighbor, cost));
        }
    }
    best
}
