//! Sequential cheapest-insertion heuristic.
//!
//! # Algorithm
//!
//! Routes are built one at a time. Each route is seeded with the unrouted
//! customer nearest to the depot. Then, among all unrouted customers that
//! still fit the remaining capacity, the customer and position (anywhere in
//! the route) giving the cheapest resulting route is inserted. When nobody
//! fits, the route is closed and a new one is seeded.
//!
//! # Complexity
//!
//! O(n³) distance evaluations per route in the worst case.

use std::collections::BTreeSet;

use crate::evaluation::sequence_cost;
use crate::models::{Instance, Route, Solution};

use super::validated_or_trivial;

/// Constructs a solution using sequential cheapest insertion.
///
/// Candidates are scanned in ascending customer id and ascending position;
/// the first strictly cheapest one wins. Falls back to one route per
/// customer if the result fails validation.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::constructive::insertion;
/// use cvrp_tabu::evaluation::total_cost;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![Customer::new(1, 3.0, 4.0, 10)],
///     10,
/// )
/// .unwrap();
///
/// let solution = insertion(&instance);
/// assert_eq!(solution.to_vecs(), vec![vec![1]]);
/// assert!((total_cost(&solution, &instance) - 10.0).abs() < 1e-10);
/// ```
pub fn insertion(instance: &Instance) -> Solution {
    let depot = instance.depot_id();
    let capacity = i64::from(instance.capacity());
    let mut unrouted: BTreeSet<usize> = instance.customer_ids().collect();
    let mut solution = Solution::new();

    while let Some(seed) = instance
        .distances()
        .nearest_neighbor(depot, unrouted.iter().copied())
    {
        unrouted.remove(&seed);
        let mut route = vec![seed];
        let mut load = i64::from(instance.demand(seed));

        loop {
            let mut best: Option<(usize, usize, f64)> = None; // (customer, position, route cost)

            for &cid in unrouted
                .iter()
                .filter(|&&c| load + i64::from(instance.demand(c)) <= capacity)
            {
                for pos in 0..=route.len() {
                    route.insert(pos, cid);
                    let cost = sequence_cost(&route, instance);
                    route.remove(pos);

                    if best.is_none_or(|(_, _, b)| cost < b) {
                        best = Some((cid, pos, cost));
                    }
                }
            }

            match best {
                Some((cid, pos, _)) => {
                    route.insert(pos, cid);
                    load += i64::from(instance.demand(cid));
                    unrouted.remove(&cid);
                }
                None => break,
            }
        }

        solution.add_route(Route::from(route));
    }

    validated_or_trivial("insertion", solution, instance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::{is_valid, total_cost};
    use crate::models::Customer;

    fn instance(customers: Vec<Customer>, capacity: i32) -> Instance {
        Instance::new(Customer::depot(0.0, 0.0), customers, capacity).expect("valid")
    }

    #[test]
    fn test_insertion_single_customer() {
        let inst = instance(vec![Customer::new(1, 6.0, 8.0, 5)], 10);
        let sol = insertion(&inst);
        assert_eq!(sol.to_vecs(), vec![vec![1]]);
        assert!((total_cost(&sol, &inst) - 2.0 * inst.distance(0, 1)).abs() < 1e-10);
    }

    #[test]
    fn test_insertion_empty() {
        let inst = instance(vec![], 10);
        assert_eq!(insertion(&inst).num_routes(), 0);
    }

    #[test]
    fn test_seed_is_nearest_to_depot() {
        let inst = instance(
            vec![
                Customer::new(1, 10.0, 0.0, 6),
                Customer::new(2, 1.0, 0.0, 6),
            ],
            10,
        );
        // Neither pair fits, so each seed stays alone, nearest first.
        assert_eq!(insertion(&inst).to_vecs(), vec![vec![2], vec![1]]);
    }

    #[test]
    fn test_inserts_anywhere_in_route() {
        // Seed is 2 (nearest); 1 joins next, then 3 lands where the loop
        // closes cheapest.
        let inst = instance(
            vec![
                Customer::new(1, 2.0, 1.0, 1),
                Customer::new(2, 1.0, 0.0, 1),
                Customer::new(3, 3.0, 0.0, 1),
            ],
            10,
        );
        let sol = insertion(&inst);
        assert!(is_valid(&sol, &inst));
        assert_eq!(sol.num_routes(), 1);
        let route = &sol.to_vecs()[0];
        assert_eq!(route.len(), 3);
        // optimal loop around the three points
        let best = [vec![2, 1, 3], vec![2, 3, 1], vec![1, 3, 2], vec![3, 1, 2]]
            .iter()
            .map(|r| sequence_cost(r, &inst))
            .fold(f64::INFINITY, f64::min);
        assert!(total_cost(&sol, &inst) <= best + 1e-9);
    }

    #[test]
    fn test_capacity_opens_new_route() {
        let inst = instance(
            vec![
                Customer::new(1, 1.0, 0.0, 10),
                Customer::new(2, 2.0, 0.0, 10),
                Customer::new(3, 3.0, 0.0, 10),
            ],
            20,
        );
        let sol = insertion(&inst);
        assert!(is_valid(&sol, &inst));
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.to_vecs()[0].len(), 2);
        assert!(sol.to_vecs()[0].contains(&1));
    }
}
