//! Feasibility checking and per-route reporting metrics.

use serde::Serialize;

use crate::models::{Instance, Route, Solution, Violation, ViolationType};

use super::cost::{route_cost, total_cost};

/// Lists every constraint a solution breaks.
///
/// Checks that each customer `1..=N` is visited exactly once, that no route
/// mentions a non-customer node, and that each route's load fits the
/// vehicle capacity.
pub fn check(solution: &Solution, instance: &Instance) -> Vec<Violation> {
    let n = instance.num_customers();
    let capacity = instance.capacity();
    let mut seen = vec![false; n + 1];
    let mut violations = Vec::new();

    for (route_index, route) in solution.routes().iter().enumerate() {
        let mut load: i64 = 0;
        for &cid in route.customer_ids() {
            if cid == 0 || cid > n {
                violations.push(Violation::new(ViolationType::UnknownCustomer {
                    customer_id: cid,
                }));
                continue;
            }
            if seen[cid] {
                violations.push(Violation::new(ViolationType::DuplicateCustomer {
                    customer_id: cid,
                }));
            }
            seen[cid] = true;
            load += i64::from(instance.demand(cid));
        }
        if load > i64::from(capacity) {
            violations.push(Violation::new(ViolationType::CapacityExceeded {
                route_index,
                load,
                capacity,
            }));
        }
    }

    for cid in (1..=n).filter(|&c| !seen[c]) {
        violations.push(Violation::new(ViolationType::MissingCustomer { customer_id: cid }));
    }

    violations
}

/// Returns `true` iff every customer is visited exactly once and no route
/// exceeds the vehicle capacity.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance, Solution};
/// use cvrp_tabu::evaluation::is_valid;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![Customer::new(1, 1.0, 0.0, 6), Customer::new(2, 2.0, 0.0, 6)],
///     10,
/// )
/// .unwrap();
/// assert!(is_valid(&Solution::from(vec![vec![1], vec![2]]), &instance));
/// assert!(!is_valid(&Solution::from(vec![vec![1, 2]]), &instance)); // 12 > 10
/// assert!(!is_valid(&Solution::from(vec![vec![1]]), &instance)); // 2 missing
/// ```
pub fn is_valid(solution: &Solution, instance: &Instance) -> bool {
    check(solution, instance).is_empty()
}

/// Reporting figures for one route.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteMetrics {
    /// Number of customers on the route.
    pub len: usize,
    /// Total demand served.
    pub load: i64,
    /// Vehicle capacity.
    pub capacity: i32,
    /// Closed-walk distance.
    pub cost: f64,
}

/// Reporting figures for a whole solution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SolutionMetrics {
    /// Sum of route costs.
    pub total_cost: f64,
    /// Number of routes (vehicles).
    pub num_routes: usize,
    /// One entry per route, in solution order.
    pub routes: Vec<RouteMetrics>,
}

/// Load of a route under `instance`'s demands.
pub fn route_load(route: &Route, instance: &Instance) -> i64 {
    route
        .customer_ids()
        .iter()
        .map(|&c| i64::from(instance.demand(c)))
        .sum()
}

/// Summarises a solution for the reporting layer.
pub fn evaluate(solution: &Solution, instance: &Instance) -> SolutionMetrics {
    let routes = solution
        .routes()
        .iter()
        .map(|r| RouteMetrics {
            len: r.len(),
            load: route_load(r, instance),
            capacity: instance.capacity(),
            cost: route_cost(r, instance),
        })
        .collect();

    SolutionMetrics {
        total_cost: total_cost(solution, instance),
        num_routes: solution.num_routes(),
        routes,
    }
}
