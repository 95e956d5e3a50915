//! Travel cost of routes and solutions.

use crate::models::{Instance, Route, Solution};

/// Euclidean distance between two nodes of `instance`.
pub fn distance(a: usize, b: usize, instance: &Instance) -> f64 {
    instance.distance(a, b)
}

/// Length of the closed walk `depot → route[0] → … → route[n-1] → depot`.
///
/// An empty route costs nothing.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance, Route};
/// use cvrp_tabu::evaluation::route_cost;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![Customer::new(1, 1.0, 0.0, 1), Customer::new(2, 2.0, 0.0, 1)],
///     10,
/// )
/// .unwrap();
/// assert!((route_cost(&Route::from(vec![1, 2]), &instance) - 4.0).abs() < 1e-10);
/// assert_eq!(route_cost(&Route::new(), &instance), 0.0);
/// ```
pub fn route_cost(route: &Route, instance: &Instance) -> f64 {
    sequence_cost(route.customer_ids(), instance)
}

/// [`route_cost`] over a plain customer slice.
pub(crate) fn sequence_cost(customers: &[usize], instance: &Instance) -> f64 {
    let (Some(&first), Some(&last)) = (customers.first(), customers.last()) else {
        return 0.0;
    };
    let depot = instance.depot_id();
    let inner: f64 = customers
        .windows(2)
        .map(|w| instance.distance(w[0], w[1]))
        .sum();
    instance.distance(depot, first) + inner + instance.distance(last, depot)
}

/// Sum of [`route_cost`] over every route of `solution`.
pub fn total_cost(solution: &Solution, instance: &Instance) -> f64 {
    solution
        .routes()
        .iter()
        .map(|r| route_cost(r, instance))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Customer;

    fn line_instance() -> Instance {
        Instance::new(
            Customer::depot(0.0, 0.0),
            vec![
                Customer::new(1, 1.0, 0.0, 10),
                Customer::new(2, 2.0, 0.0, 10),
                Customer::new(3, 3.0, 0.0, 10),
            ],
            30,
        )
        .expect("valid")
    }

    #[test]
    fn test_distance() {
        let inst = line_instance();
        assert!((distance(0, 3, &inst) - 3.0).abs() < 1e-10);
        assert!((distance(3, 1, &inst) - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_cost_single() {
        let inst = line_instance();
        assert!((route_cost(&Route::singleton(2), &inst) - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_route_cost_order_matters() {
        let inst = line_instance();
        assert!((route_cost(&Route::from(vec![1, 2, 3]), &inst) - 6.0).abs() < 1e-10);
        // 0→1→3→2→0 = 1 + 2 + 1 + 2
        assert!((route_cost(&Route::from(vec![1, 3, 2]), &inst) - 6.0).abs() < 1e-10);
        // 0→3→1→2→0 = 3 + 2 + 1 + 2
        assert!((route_cost(&Route::from(vec![3, 1, 2]), &inst) - 8.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_route_costs_zero() {
        let inst = line_instance();
        assert_eq!(route_cost(&Route::new(), &inst), 0.0);
    }

    #[test]
    fn test_total_cost_is_sum_of_routes() {
        let inst = line_instance();
        let sol = Solution::from(vec![vec![1], vec![3, 2]]);
        let expected: f64 = sol.routes().iter().map(|r| route_cost(r, &inst)).sum();
        assert!((total_cost(&sol, &inst) - expected).abs() < 1e-10);
        assert!((total_cost(&sol, &inst) - 8.0).abs() < 1e-10);
        assert_eq!(total_cost(&Solution::new(), &inst), 0.0);
    }
}
