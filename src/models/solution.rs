//! Solution and violation types.

use serde::{Deserialize, Serialize};

use super::Route;

/// A type of constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViolationType {
    /// Vehicle capacity exceeded.
    CapacityExceeded {
        /// Route index in the solution.
        route_index: usize,
        /// Load that exceeded capacity.
        load: i64,
        /// Vehicle capacity.
        capacity: i32,
    },
    /// A customer is visited more than once.
    DuplicateCustomer {
        /// Customer visited again.
        customer_id: usize,
    },
    /// A route references a node that is not a customer (the depot or an
    /// id beyond `N`).
    UnknownCustomer {
        /// Offending id.
        customer_id: usize,
    },
    /// A customer is not visited by any route.
    MissingCustomer {
        /// Customer left out.
        customer_id: usize,
    },
}

/// A constraint violation in a solution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// The type of violation.
    pub kind: ViolationType,
}

impl Violation {
    /// Creates a new violation.
    pub fn new(kind: ViolationType) -> Self {
        Self { kind }
    }
}

/// A set of routes covering the customers of an instance.
///
/// Empty routes are never retained: every constructor and edit drops them.
/// Whether the routes form a *feasible* solution is decided by
/// [`is_valid`](crate::evaluation::is_valid).
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Route, Solution};
///
/// let sol = Solution::from_routes(vec![
///     Route::from(vec![1, 2]),
///     Route::new(),
///     Route::from(vec![3]),
/// ]);
/// assert_eq!(sol.num_routes(), 2);
/// assert_eq!(sol.num_served(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Solution {
    routes: Vec<Route>,
}

impl Solution {
    /// Creates a solution without routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solution from routes, dropping empty ones.
    pub fn from_routes(routes: Vec<Route>) -> Self {
        let mut solution = Self { routes };
        solution.drop_empty_routes();
        solution
    }

    /// The routes of this solution.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Number of routes (vehicles used).
    pub fn num_routes(&self) -> usize {
        self.routes.len()
    }

    /// Total number of customer visits across all routes.
    pub fn num_served(&self) -> usize {
        self.routes.iter().map(Route::len).sum()
    }

    /// Adds a route unless it is empty.
    pub fn add_route(&mut self, route: Route) {
        if !route.is_empty() {
            self.routes.push(route);
        }
    }

    /// Route ids as plain vectors, convenient for assertions and reporting.
    pub fn to_vecs(&self) -> Vec<Vec<usize>> {
        self.routes
            .iter()
            .map(|r| r.customer_ids().to_vec())
            .collect()
    }

    pub(crate) fn route_mut(&mut self, index: usize) -> &mut Route {
        &mut self.routes[index]
    }

    pub(crate) fn drop_empty_routes(&mut self) {
        self.routes.retain(|r| !r.is_empty());
    }
}

impl From<Vec<Vec<usize>>> for Solution {
    fn from(routes: Vec<Vec<usize>>) -> Self {
        Self::from_routes(routes.into_iter().map(Route::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_empty() {
        let sol = Solution::new();
        assert_eq!(sol.num_routes(), 0);
        assert_eq!(sol.num_served(), 0);
    }

    #[test]
    fn test_from_vecs_drops_empty() {
        let sol = Solution::from(vec![vec![1], vec![], vec![2, 3]]);
        assert_eq!(sol.num_routes(), 2);
        assert_eq!(sol.to_vecs(), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_add_route_skips_empty() {
        let mut sol = Solution::new();
        sol.add_route(Route::new());
        sol.add_route(Route::singleton(4));
        assert_eq!(sol.to_vecs(), vec![vec![4]]);
    }

    #[test]
    fn test_clone_is_deep() {
        let original = Solution::from(vec![vec![1, 2], vec![3]]);
        let mut copy = original.clone();
        copy.route_mut(0).remove(0);
        copy.drop_empty_routes();
        assert_eq!(original.to_vecs(), vec![vec![1, 2], vec![3]]);
        assert_eq!(copy.to_vecs(), vec![vec![2], vec![3]]);
    }

    #[test]
    fn test_violation_types() {
        let v = Violation::new(ViolationType::CapacityExceeded {
            route_index: 0,
            load: 250,
            capacity: 200,
        });
        assert_eq!(
            v.kind,
            ViolationType::CapacityExceeded {
                route_index: 0,
                load: 250,
                capacity: 200,
            }
        );
    }
}
