//! Clarke-Wright savings algorithm.
//!
//! # Algorithm
//!
//! The savings algorithm (Clarke & Wright, 1964) starts with each customer
//! on its own route (depot → customer → depot). It then merges routes by
//! computing the "savings" of joining the tail of one route to the head of
//! another:
//!
//! ```text
//! s(i, j) = d(0, i) + d(0, j) - d(i, j)
//! ```
//!
//! Pairs with a positive saving are processed in decreasing order. A pair
//! `(i, j)` merges `i`'s route followed by `j`'s route only when `i` is the
//! last customer of its route, `j` is the first customer of a different
//! route, and the combined load fits the vehicle.
//!
//! # Complexity
//!
//! O(n² log n) where n = number of customers (dominated by sorting savings).
//!
//! # Reference
//!
//! Clarke, G. & Wright, J.W. (1964). "Scheduling of Vehicles from a Central
//! Depot to a Number of Delivery Points", *Operations Research* 12(4), 568-581.

use tracing::debug;

use crate::models::{Instance, Route, Solution};

use super::validated_or_trivial;

/// A savings value for merging two customers' routes.
#[derive(Debug)]
struct Saving {
    i: usize,
    j: usize,
    value: f64,
}

/// Constructs a solution using the Clarke-Wright savings algorithm.
///
/// Ties between equal savings keep the pair enumeration order (ascending
/// `i`, then ascending `j`). Falls back to one route per customer if the
/// merged routes fail validation.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::constructive::savings;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![
///         Customer::new(1, 1.0, 0.0, 10),
///         Customer::new(2, 2.0, 0.0, 10),
///         Customer::new(3, 3.0, 0.0, 10),
///     ],
///     30,
/// )
/// .unwrap();
///
/// let solution = savings(&instance);
/// assert_eq!(solution.num_routes(), 1);
/// assert_eq!(solution.num_served(), 3);
/// ```
pub fn savings(instance: &Instance) -> Solution {
    let n = instance.num_customers();
    let depot = instance.depot_id();

    let mut savings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for i in 1..=n {
        for j in (i + 1)..=n {
            let value = instance.distance(depot, i) + instance.distance(depot, j)
                - instance.distance(i, j);
            if value > 0.0 {
                savings.push(Saving { i, j, value });
            }
        }
    }

    // Stable sort: equal savings keep enumeration order.
    savings.sort_by(|a, b| b.value.total_cmp(&a.value));

    // Route records live in an arena; route_of[c] indexes the record that
    // currently holds customer c. Record k starts as the singleton [k + 1].
    let mut arena: Vec<Vec<usize>> = instance.customer_ids().map(|c| vec![c]).collect();
    let mut route_of: Vec<usize> = (0..=n).map(|c| c.saturating_sub(1)).collect();
    // Load markers are only refreshed at route endpoints.
    let mut load_marker: Vec<i64> = (0..=n).map(|c| i64::from(instance.demand(c))).collect();

    let mut merges = 0;
    for saving in &savings {
        let ri = route_of[saving.i];
        let rj = route_of[saving.j];
        if ri == rj {
            continue;
        }

        if arena[ri].last() != Some(&saving.i) || arena[rj].first() != Some(&saving.j) {
            continue;
        }

        let combined_load = load_marker[saving.i] + load_marker[saving.j];
        if combined_load > i64::from(instance.capacity()) {
            continue;
        }

        let tail = std::mem::take(&mut arena[rj]);
        arena[ri].extend(tail);
        for &cid in &arena[ri] {
            route_of[cid] = ri;
        }

        let merged = &arena[ri];
        load_marker[merged[0]] = combined_load;
        load_marker[merged[merged.len() - 1]] = combined_load;
        merges += 1;
    }
    debug!(merges, "savings merge pass finished");

    // Deduplicate by record index, in order of first appearance by customer id.
    let mut taken = vec![false; arena.len()];
    let mut routes = Vec::new();
    for cid in instance.customer_ids() {
        let record = route_of[cid];
        if !taken[record] {
            taken[record] = true;
            routes.push(Route::from(std::mem::take(&mut arena[record])));
        }
    }

    validated_or_trivial("savings", Solution::from_routes(routes), instance)
}
