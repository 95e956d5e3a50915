//! Constructive heuristics for building initial CVRP solutions.
//!
//! - [`trivial`] — One route per customer, always feasible
//! - [`savings`] — Clarke-Wright savings algorithm (1964), O(n² log n)
//! - [`insertion`] — Sequential cheapest insertion, O(n³)
//! - [`route_first_cluster_second`] — Nearest-neighbor giant tour, greedy split, O(n²)
//!
//! Every heuristic returns a solution accepted by
//! [`is_valid`](crate::evaluation::is_valid), substituting [`trivial`] if its
//! own construction does not validate.

mod clarke_wright;
mod insertion;
mod route_first;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::evaluation::is_valid;
use crate::models::{Instance, Route, Solution};

pub use clarke_wright::savings;
pub use insertion::insertion;
pub use route_first::{giant_tour, route_first_cluster_second, split_tour};

/// One singleton route per customer, in ascending id order.
///
/// Feasible for every instance, since no single demand exceeds capacity.
pub fn trivial(instance: &Instance) -> Solution {
    Solution::from_routes(instance.customer_ids().map(Route::singleton).collect())
}

fn validated_or_trivial(heuristic: &str, solution: Solution, instance: &Instance) -> Solution {
    if is_valid(&solution, instance) {
        solution
    } else {
        warn!(heuristic, "construction failed validation, using singleton routes");
        trivial(instance)
    }
}

/// A construction heuristic, selectable by value.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
/// use cvrp_tabu::constructive::Construction;
/// use cvrp_tabu::evaluation::is_valid;
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![Customer::new(1, 1.0, 0.0, 5), Customer::new(2, 0.0, 1.0, 5)],
///     10,
/// )
/// .unwrap();
///
/// for heuristic in Construction::ALL {
///     assert!(is_valid(&heuristic.build(&instance), &instance));
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Construction {
    /// [`trivial`]
    #[default]
    Trivial,
    /// [`savings`]
    Savings,
    /// [`insertion`]
    Insertion,
    /// [`route_first_cluster_second`]
    RouteFirstClusterSecond,
}

impl Construction {
    /// The three constructive heuristics, in reporting order.
    pub const ALL: [Construction; 3] = [
        Construction::Savings,
        Construction::Insertion,
        Construction::RouteFirstClusterSecond,
    ];

    /// Builds a solution for `instance`.
    pub fn build(self, instance: &Instance) -> Solution {
        match self {
            Construction::Trivial => trivial(instance),
            Construction::Savings => savings(instance),
            Construction::Insertion => insertion(instance),
            Construction::RouteFirstClusterSecond => route_first_cluster_second(instance),
        }
    }

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Construction::Trivial => "Trivial",
            Construction::Savings => "Savings",
            Construction::Insertion => "Insertion",
            Construction::RouteFirstClusterSecond => "RouteFirstClusterSecond",
        }
    }
}
