//! Method dispatch and comparison runs.
//!
//! Runs a construction heuristic or a tabu variant on one instance and
//! reports cost, route count and wall time in a serializable summary.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::constructive::Construction;
use crate::evaluation::{evaluate, SolutionMetrics};
use crate::models::{Instance, Solution};
use crate::tabu::{TabuConfig, TabuRunner, TabuVariant};

/// A solution method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Method {
    /// A single construction heuristic.
    Construction(Construction),
    /// Tabu search with the given flags, seeded from singleton routes.
    Tabu(TabuVariant),
}

impl Method {
    /// The seven reported methods: three constructions then four tabu
    /// variants.
    pub fn all() -> Vec<Method> {
        Construction::ALL
            .into_iter()
            .map(Method::Construction)
            .chain(TabuVariant::ALL.into_iter().map(Method::Tabu))
            .collect()
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Method::Construction(c) => c.name(),
            Method::Tabu(v) => v.name(),
        }
    }
}

/// Outcome of one method on one instance.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// Method that produced the solution.
    pub method: Method,
    /// Total distance of `solution`.
    pub cost: f64,
    /// Wall-clock time of the method alone.
    pub elapsed: Duration,
    /// Number of routes in `solution`.
    pub num_routes: usize,
    /// The returned solution.
    pub solution: Solution,
    /// Per-route breakdown.
    pub metrics: SolutionMetrics,
}

/// Runs `method` on `instance`.
///
/// `time_limit` bounds tabu variants only; constructions ignore it.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use cvrp_tabu::constructive::Construction;
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::runner::{run_method, Method};
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![Customer::new(1, 3.0, 4.0, 2), Customer::new(2, 3.0, -4.0, 2)],
///     10,
/// )
/// .unwrap();
///
/// let summary = run_method(
///     &instance,
///     Method::Construction(Construction::Insertion),
///     Duration::from_secs(1),
/// );
/// assert_eq!(summary.num_routes, 1);
/// assert!((summary.cost - 18.0).abs() < 1e-10);
/// ```
pub fn run_method(instance: &Instance, method: Method, time_limit: Duration) -> RunSummary {
    let start = Instant::now();
    let solution = match method {
        Method::Construction(c) => c.build(instance),
        Method::Tabu(v) => {
            let config = TabuConfig::preset(v).with_time_limit(time_limit);
            TabuRunner::run(instance, &config).best
        }
    };
    let elapsed = start.elapsed();

    let metrics = evaluate(&solution, instance);
    info!(
        method = method.name(),
        cost = metrics.total_cost,
        routes = metrics.num_routes,
        elapsed_ms = elapsed.as_millis() as u64,
        "method finished"
    );

    RunSummary {
        method,
        cost: metrics.total_cost,
        elapsed,
        num_routes: metrics.num_routes,
        solution,
        metrics,
    }
}

/// Runs every method of [`Method::all`] in order.
pub fn run_all(instance: &Instance, time_limit: Duration) -> Vec<RunSummary> {
    Method::all()
        .into_iter()
        .map(|m| run_method(instance, m, time_limit))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{is_valid, total_cost};
    use crate::models::Customer;

    fn instance() -> Instance {
        Instance::new(
            Customer::depot(0.0, 0.0),
            vec![
                Customer::new(1, 2.0, 1.0, 4),
                Customer::new(2, 3.0, -1.0, 3),
                Customer::new(3, -2.0, 2.0, 5),
                Customer::new(4, -3.0, -2.0, 6),
                Customer::new(5, 0.0, 4.0, 2),
            ],
            10,
        )
        .expect("valid")
    }

    #[test]
    fn test_method_order_and_names() {
        let names: Vec<&str> = Method::all().into_iter().map(Method::name).collect();
        assert_eq!(
            names,
            vec![
                "Savings",
                "Insertion",
                "RouteFirstClusterSecond",
                "TabuSearch_Simple",
                "TabuSearch_Intensification",
                "TabuSearch_Diversification",
                "TabuSearch_Complete",
            ]
        );
    }

    #[test]
    fn test_run_all_reports_valid_solutions() {
        let inst = instance();
        let summaries = run_all(&inst, Duration::from_secs(5));
        assert_eq!(summaries.len(), 7);
        for s in &summaries {
            assert!(is_valid(&s.solution, &inst), "{}", s.method.name());
            assert!((s.cost - total_cost(&s.solution, &inst)).abs() < 1e-10);
            assert_eq!(s.num_routes, s.solution.num_routes());
            assert_eq!(s.metrics.routes.len(), s.num_routes);
        }
    }

    #[test]
    fn test_summary_serializes() {
        let inst = instance();
        let s = run_method(
            &inst,
            Method::Construction(Construction::Savings),
            Duration::from_secs(1),
        );
        let json = serde_json::to_value(&s).expect("serialize");
        assert_eq!(json["num_routes"], s.num_routes);
        assert!(json["solution"].is_array());
        assert_eq!(json["method"]["Construction"], "Savings");
    }
}
