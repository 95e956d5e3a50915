//! Route-first, cluster-second heuristic.
//!
//! # Algorithm
//!
//! 1. **Route first**: build one giant tour over all customers with the
//!    nearest-neighbor rule, starting at the depot.
//! 2. **Cluster second**: walk the tour left to right, closing the current
//!    route whenever the next customer would overflow the vehicle.
//!
//! The split is greedy, not the optimal shortest-path split.
//!
//! # Complexity
//!
//! O(n²) for the tour, O(n) for the split.
//!
//! # Reference
//!
//! Beasley, J.E. (1983). "Route first–cluster second methods for vehicle
//! routing", *Omega* 11(4), 403-408.

use std::collections::BTreeSet;

use crate::models::{Instance, Route, Solution};

use super::validated_or_trivial;

/// Nearest-neighbor giant tour over every customer, starting at the depot.
///
/// Ties go to the smallest customer id.
pub fn giant_tour(instance: &Instance) -> Vec<usize> {
    let mut remaining: BTreeSet<usize> = instance.customer_ids().collect();
    let mut tour = Vec::with_capacity(remaining.len());
    let mut current = instance.depot_id();

    while let Some(next) = instance
        .distances()
        .nearest_neighbor(current, remaining.iter().copied())
    {
        remaining.remove(&next);
        tour.push(next);
        current = next;
    }

    tour
}

/// Cuts a giant tour into capacity-feasible routes, greedily left to right.
pub fn split_tour(tour: &[usize], instance: &Instance) -> Vec<Route> {
    let mut routes = Vec::new();
    let mut current = Route::new();
    let mut load: i64 = 0;

    for &cid in tour {
        let demand = i64::from(instance.demand(cid));
        if load + demand > i64::from(instance.capacity()) && !current.is_empty() {
            routes.push(std::mem::take(&mut current));
            load = 0;
        }
        current.push(cid);
        load += demand;
    }
    if !current.is_empty() {
        routes.push(current);
    }

    routes
}

/// Constructs a solution by splitting a nearest-neighbor giant tour.
///
/// Falls back to one route per customer if the result fails validation.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::constructive::route_first_cluster_second;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![
///         Customer::new(1, 1.0, 0.0, 10),
///         Customer::new(2, 2.0, 0.0, 10),
///         Customer::new(3, 3.0, 0.0, 10),
///     ],
///     20,
/// )
/// .unwrap();
///
/// let solution = route_first_cluster_second(&instance);
/// assert_eq!(solution.to_vecs(), vec![vec![1, 2], vec![3]]);
/// ```
pub fn route_first_cluster_second(instance: &Instance) -> Solution {
    let tour = giant_tour(instance);
    let routes = split_tour(&tour, instance);
    validated_or_trivial(
        "route-first/cluster-second",
        Solution::from_routes(routes),
        instance,
    )
}
