//! Intra-route 2-opt neighborhood.
//!
//! # Algorithm
//!
//! Reversing the segment `[a, b)` of a route replaces the two edges at its
//! ends by two new ones. Segments shorter than two customers reverse into
//! themselves and are skipped.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::models::{Instance, Solution};

use super::{admit, Move, Neighbor};

/// Enumerates every segment reversal inside a single route.
///
/// For each route and each `a < b` with `b >= a + 2` and `b <= len`, the
/// positions `[a, b)` are reversed; other routes are left as they are.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance, Solution};
/// use cvrp_tabu::neighborhood::{two_opt_neighbors, Move};
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![
///         Customer::new(1, 1.0, 0.0, 1),
///         Customer::new(2, 2.0, 0.0, 1),
///         Customer::new(3, 3.0, 0.0, 1),
///     ],
///     10,
/// )
/// .unwrap();
/// let current = Solution::from(vec![vec![1, 2, 3]]);
///
/// let all: Vec<_> = two_opt_neighbors(&current, &instance).collect();
/// assert_eq!(all.len(), 3);
/// assert_eq!(all[0].mv, Move::TwoOpt { route: 0, pos_a: 0, pos_b: 2 });
/// assert_eq!(all[0].solution.to_vecs(), vec![vec![2, 1, 3]]);
/// ```
pub fn two_opt_neighbors<'a>(
    solution: &'a Solution,
    instance: &'a Instance,
) -> impl Iterator<Item = Neighbor> + 'a {
    let routes = solution.routes();
    (0..routes.len())
        .flat_map(move |r| {
            let n = routes[r].len();
            (0..n).flat_map(move |a| ((a + 2)..=n).map(move |b| (r, a, b)))
        })
        .filter_map(move |(r, a, b)| {
            let mv = Move::TwoOpt {
                route: r,
                pos_a: a,
                pos_b: b,
            };
            admit(reversed(solution, r, a, b), mv, instance)
        })
}

fn reversed(solution: &Solution, r: usize, a: usize, b: usize) -> Solution {
    let mut candidate = solution.clone();
    candidate.route_mut(r).reverse_segment(a, b);
    candidate
}
