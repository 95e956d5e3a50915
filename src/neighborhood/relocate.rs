//! Inter-route relocate neighborhood.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::models::{Instance, Solution};

use super::{admit, Move, Neighbor};

/// Enumerates every move of one customer into a different route.
///
/// For each ordered route pair `(i, j)` with `i != j`, the customer at each
/// position `a` of route `i` is removed and inserted before each position
/// `b` in `0..=len(j)` of route `j` (`b == len(j)` appends). A route left
/// empty by the removal is dropped from the candidate.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance, Solution};
/// use cvrp_tabu::neighborhood::relocate_neighbors;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![Customer::new(1, 1.0, 0.0, 5), Customer::new(2, 2.0, 0.0, 5)],
///     10,
/// )
/// .unwrap();
/// let current = Solution::from(vec![vec![1], vec![2]]);
///
/// let merged: Vec<_> = relocate_neighbors(&current, &instance)
///     .map(|n| n.solution.to_vecs())
///     .collect();
/// assert_eq!(merged[0], vec![vec![1, 2]]);
/// assert_eq!(merged.len(), 4);
/// ```
pub fn relocate_neighbors<'a>(
    solution: &'a Solution,
    instance: &'a Instance,
) -> impl Iterator<Item = Neighbor> + 'a {
    let routes = solution.routes();
    (0..routes.len())
        .flat_map(move |i| (0..routes.len()).filter(move |&j| j != i).map(move |j| (i, j)))
        .flat_map(move |(i, j)| {
            (0..routes[i].len())
                .flat_map(move |a| (0..=routes[j].len()).map(move |b| (i, a, j, b)))
        })
        .filter_map(move |(i, a, j, b)| {
            let mv = Move::Relocate {
                route_i: i,
                pos_i: a,
                route_j: j,
                pos_j: b,
            };
            admit(relocated(solution, i, a, j, b), mv, instance)
        })
}

fn relocated(solution: &Solution, i: usize, a: usize, j: usize, b: usize) -> Solution {
    let mut candidate = solution.clone();
    let customer = candidate.route_mut(i).remove(a);
    candidate.route_mut(j).insert(b, customer);
    candidate.drop_empty_routes();
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;

    fn instance(demands: &[i32], capacity: i32) -> Instance {
        let customers = demands
            .iter()
            .enumerate()
            .map(|(k, &d)| Customer::new(k + 1, (k + 1) as f64, 0.0, d))
            .collect();
        Instance::new(Customer::depot(0.0, 0.0), customers, capacity).expect("valid")
    }

    #[test]
    fn test_relocate_enumeration_order() {
        let inst = instance(&[1, 1, 1], 10);
        let sol = Solution::from(vec![vec![1, 2], vec![3]]);
        let moves: Vec<Move> = relocate_neighbors(&sol, &inst).map(|n| n.mv).collect();
        let expected: Vec<Move> = [
            (0, 0, 1, 0),
            (0, 0, 1, 1),
            (0, 1, 1, 0),
            (0, 1, 1, 1),
            (1, 0, 0, 0),
            (1, 0, 0, 1),
            (1, 0, 0, 2),
        ]
        .into_iter()
        .map(|(route_i, pos_i, route_j, pos_j)| Move::Relocate {
            route_i,
            pos_i,
            route_j,
            pos_j,
        })
        .collect();
        assert_eq!(moves, expected);
    }

    #[test]
    fn test_relocate_drops_emptied_route() {
        let inst = instance(&[1, 1, 1], 10);
        let sol = Solution::from(vec![vec![1, 2], vec![3]]);
        let last = relocate_neighbors(&sol, &inst).last().expect("has neighbors");
        assert_eq!(last.solution.to_vecs(), vec![vec![1, 2, 3]]);
        assert_eq!(last.solution.num_routes(), 1);
    }

    #[test]
    fn test_relocate_respects_capacity() {
        // every route is full: nothing can move
        let inst = instance(&[5, 5, 5], 5);
        let sol = Solution::from(vec![vec![1], vec![2], vec![3]]);
        assert_eq!(relocate_neighbors(&sol, &inst).count(), 0);
    }

    #[test]
    fn test_relocate_single_route() {
        let inst = instance(&[1, 1], 10);
        let sol = Solution::from(vec![vec![1, 2]]);
        assert_eq!(relocate_neighbors(&sol, &inst).count(), 0);
    }

    #[test]
    fn test_relocate_inserts_at_position() {
        let inst = instance(&[1, 1, 1], 10);
        let sol = Solution::from(vec![vec![1], vec![2, 3]]);
        let n = relocate_neighbors(&sol, &inst)
            .find(|n| {
                n.mv == Move::Relocate {
                    route_i: 0,
                    pos_i: 0,
                    route_j: 1,
                    pos_j: 1,
                }
            })
            .expect("move exists");
        assert_eq!(n.solution.to_vecs(), vec![vec![2, 1, 3]]);
    }
}
