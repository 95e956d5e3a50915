//! Capacitated routing instance.

use crate::distance::DistanceMatrix;
use crate::error::InstanceError;

use super::Customer;

/// An immutable CVRP instance: one depot, `N` customers, one vehicle capacity.
///
/// Nodes are addressed by dense ids. The depot is node 0 and customers are
/// `1..=N`. The Euclidean distance matrix is computed once on construction.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::{Customer, Instance};
///
/// let instance = Instance::new(
///     Customer::depot(0.0, 0.0),
///     vec![Customer::new(1, 3.0, 4.0, 10), Customer::new(2, 6.0, 8.0, 20)],
///     50,
/// )
/// .unwrap();
/// assert_eq!(instance.num_customers(), 2);
/// assert_eq!(instance.depot_id(), 0);
/// assert!((instance.distance(0, 1) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    nodes: Vec<Customer>,
    capacity: i32,
    distances: DistanceMatrix,
}

impl Instance {
    /// Assembles an instance, checking the preconditions every algorithm
    /// relies on.
    ///
    /// `customers[k]` must have id `k + 1`. The depot is renumbered to 0 and
    /// its demand ignored.
    pub fn new(
        depot: Customer,
        customers: Vec<Customer>,
        capacity: i32,
    ) -> Result<Self, InstanceError> {
        if capacity <= 0 {
            return Err(InstanceError::NonPositiveCapacity(capacity));
        }

        let depot = Customer::depot(depot.x(), depot.y());
        let mut nodes = Vec::with_capacity(customers.len() + 1);
        nodes.push(depot);

        for (position, customer) in (1..).zip(customers) {
            if customer.id() != position {
                return Err(InstanceError::NonContiguousId {
                    position,
                    id: customer.id(),
                });
            }
            if customer.demand() < 0 {
                return Err(InstanceError::NegativeDemand {
                    id: position,
                    demand: customer.demand(),
                });
            }
            if customer.demand() > capacity {
                return Err(InstanceError::DemandExceedsCapacity {
                    id: position,
                    demand: customer.demand(),
                    capacity,
                });
            }
            nodes.push(customer);
        }

        if let Some(node) = nodes
            .iter()
            .find(|n| !n.x().is_finite() || !n.y().is_finite())
        {
            return Err(InstanceError::NonFiniteCoordinate(node.id()));
        }

        let distances = DistanceMatrix::from_customers(&nodes);
        Ok(Self {
            nodes,
            capacity,
            distances,
        })
    }

    /// Depot node id (always 0).
    pub fn depot_id(&self) -> usize {
        0
    }

    /// Number of customers `N` (depot excluded).
    pub fn num_customers(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Customer ids `1..=N` in ascending order.
    pub fn customer_ids(&self) -> std::ops::RangeInclusive<usize> {
        1..=self.num_customers()
    }

    /// Vehicle capacity.
    pub fn capacity(&self) -> i32 {
        self.capacity
    }

    /// All nodes, index = node id (index 0 = depot).
    pub fn nodes(&self) -> &[Customer] {
        &self.nodes
    }

    /// Demand of the given node.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not a node of this instance.
    pub fn demand(&self, id: usize) -> i32 {
        self.nodes[id].demand()
    }

    /// Euclidean distance between two nodes.
    pub fn distance(&self, from: usize, to: usize) -> f64 {
        self.distances.get(from, to)
    }

    /// Precomputed distance matrix.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }
}
