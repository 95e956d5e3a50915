//! Inter-route swap neighborhood.

use crate::models::{Instance, Solution};

use super::{admit, Move, Neighbor};

/// Enumerates every exchange of two customers sitting in different routes.
///
/// For route pairs `i < j`, each position `a` of route `i` is swapped with
/// each position `b` of route `j`. Only capacity-feasible results are
/// yielded.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance, Solution};
/// use cvrp_tabu::neighborhood::{swap_neighbors, Move};
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![
///         Customer::new(1, 1.0, 0.0, 5),
///         Customer::new(2, 2.0, 0.0, 5),
///         Customer::new(3, 3.0, 0.0, 5),
///     ],
///     10,
/// )
/// .unwrap();
/// let current = Solution::from(vec![vec![1, 2], vec![3]]);
///
/// let first = swap_neighbors(&current, &instance).next().unwrap();
/// assert_eq!(first.solution.to_vecs(), vec![vec![3, 2], vec![1]]);
/// assert_eq!(
///     first.mv,
///     Move::Swap { route_i: 0, pos_i: 0, route_j: 1, pos_j: 0 }
/// );
/// ```
pub fn swap_neighbors<'a>(
    solution: &'a Solution,
    instance: &'a Instance,
) -> impl Iterator<Item = Neighbor> + 'a {
    let routes = solution.routes();
    (0..routes.len())
        .flat_map(move |i| ((i + 1)..routes.len()).map(move |j| (i, j)))
        .flat_map(move |(i, j)| {
            (0..routes[i].len())
                .flat_map(move |a| (0..routes[j].len()).map(move |b| (i, a, j, b)))
        })
        .filter_map(move |(i, a, j, b)| {
            let mv = Move::Swap {
                route_i: i,
                pos_i: a,
                route_j: j,
                pos_j: b,
            };
            admit(swapped(solution, i, a, j, b), mv, instance)
        })
}

fn swapped(solution: &Solution, i: usize, a: usize, j: usize, b: usize) -> Solution {
    let mut candidate = solution.clone();
    let left = candidate.routes()[i].customer_ids()[a];
    let right = candidate.routes()[j].customer_ids()[b];
    candidate.route_mut(i).customers_mut()[a] = right;
    candidate.route_mut(j).customers_mut()[b] = left;
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
    fn test_swap_enumeration_order() {
        let inst = instance(&[1, 1, 1], 10);
        let sol = Solution::from(vec![vec![1, 2], vec![3]]);
        let moves: Vec<Move> = swap_neighbors(&sol, &inst).map(|n| n.mv).collect();
        assert_eq!(
            moves,
            vec![
                Move::Swap {
                    route_i: 0,
                    pos_i: 0,
                    route_j: 1,
                    pos_j: 0,
                },
                Move::Swap {
                    route_i: 0,
                    pos_i: 1,
                    route_j: 1,
                    pos_j: 0,
                },
            ]
        );
    }

    #[test]
    fn test_swap_needs_two_routes() {
        let inst = instance(&[1, 1, 1], 10);
        let sol = Solution::from(vec![vec![1, 2, 3]]);
        assert_eq!(swap_neighbors(&sol, &inst).count(), 0);
    }

    #[test]
    fn test_swap_filters_capacity() {
        // routes [1, 2] (3 + 3) and [3] (7): swapping 3 in overflows 9
        let inst = instance(&[3, 3, 7], 9);
        let sol = Solution::from(vec![vec![1, 2], vec![3]]);
        assert_eq!(swap_neighbors(&sol, &inst).count(), 0);
    }

    #[test]
    fn test_swap_leaves_source_untouched() {
        let inst = instance(&[1, 1, 1, 1], 10);
        let sol = Solution::from(vec![vec![1, 2], vec![3, 4]]);
        let all: Vec<Neighbor> = swap_neighbors(&sol, &inst).collect();
        assert_eq!(all.len(), 4);
        assert_eq!(sol.to_vecs(), vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(all[3].solution.to_vecs(), vec![vec![1, 4], vec![3, 2]]);
    }
}
