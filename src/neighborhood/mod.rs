//! Neighborhood generators for tabu search.
//!
//! - [`swap_neighbors`] — Exchange two customers between two routes
//! - [`relocate_neighbors`] — Move one customer into another route
//! - [`two_opt_neighbors`] — Reverse a segment inside one route
//!
//! Each generator is a lazy iterator over [`Neighbor`]s: a deep copy of the
//! current solution with one [`Move`] applied, already checked by
//! [`is_valid`]. Infeasible candidates are never yielded. Enumeration order
//! is nested ascending loops over route index, then position, and is the
//! tie-break order of the search.

mod relocate;
mod swap;
mod two_opt;

use crate::evaluation::is_valid;
use crate::models::{Instance, Solution};

pub use relocate::relocate_neighbors;
pub use swap::swap_neighbors;
pub use two_opt::two_opt_neighbors;

/// Identity of a local transformation, compared structurally by the tabu
/// list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Exchange `routes[route_i][pos_i]` with `routes[route_j][pos_j]`.
    Swap {
        route_i: usize,
        pos_i: usize,
        route_j: usize,
        pos_j: usize,
    },
    /// Take `routes[route_i][pos_i]` and insert it before position `pos_j`
    /// of `routes[route_j]`.
    Relocate {
        route_i: usize,
        pos_i: usize,
        route_j: usize,
        pos_j: usize,
    },
    /// Reverse positions `[pos_a, pos_b)` of `routes[route]`.
    TwoOpt {
        route: usize,
        pos_a: usize,
        pos_b: usize,
    },
}

/// A feasible candidate solution together with the move that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    /// The modified solution.
    pub solution: Solution,
    /// Move descriptor.
    pub mv: Move,
}

/// Swap and relocate neighbors, followed by 2-opt neighbors when
/// `with_two_opt` is set.
pub fn neighbors<'a>(
    solution: &'a Solution,
    instance: &'a Instance,
    with_two_opt: bool,
) -> impl Iterator<Item = Neighbor> + 'a {
    swap_neighbors(solution, instance)
        .chain(relocate_neighbors(solution, instance))
        .chain(
            with_two_opt
                .then(|| two_opt_neighbors(solution, instance))
                .into_iter()
                .flatten(),
        )
}

fn admit(candidate: Solution, mv: Move, instance: &Instance) -> Option<Neighbor> {
    is_valid(&candidate, instance).then(|| Neighbor {
        solution: candidate,
        mv,
    })
}
