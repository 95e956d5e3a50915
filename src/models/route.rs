//! Route type.

use serde::{Deserialize, Serialize};

/// An ordered sequence of customer ids served by one vehicle.
///
/// A route starts and ends at the depot, which is never stored.
///
/// # Examples
///
/// ```
/// use cvrp_tabu::models::Route;
///
/// let route = Route::from(vec![3, 1, 2]);
/// assert_eq!(route.len(), 3);
/// assert_eq!(route.customer_ids(), &[3, 1, 2]);
/// assert_eq!(route.first(), Some(3));
/// assert_eq!(route.last(), Some(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Route {
    customers: Vec<usize>,
}

impl Route {
    /// Creates an empty route.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a route holding a single customer.
    pub fn singleton(customer_id: usize) -> Self {
        Self {
            customers: vec![customer_id],
        }
    }

    /// Customer ids in visiting order.
    pub fn customer_ids(&self) -> &[usize] {
        &self.customers
    }

    /// Number of customers on this route.
    pub fn len(&self) -> usize {
        self.customers.len()
    }

    /// Returns `true` if the route visits nobody.
    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// First customer after leaving the depot.
    pub fn first(&self) -> Option<usize> {
        self.customers.first().copied()
    }

    /// Last customer before returning to the depot.
    pub fn last(&self) -> Option<usize> {
        self.customers.last().copied()
    }

    /// Appends a customer at the tail.
    pub fn push(&mut self, customer_id: usize) {
        self.customers.push(customer_id);
    }

    /// Inserts a customer before position `pos` (`pos == len` appends).
    pub fn insert(&mut self, pos: usize, customer_id: usize) {
        self.customers.insert(pos, customer_id);
    }

    /// Removes and returns the customer at `pos`.
    pub fn remove(&mut self, pos: usize) -> usize {
        self.customers.remove(pos)
    }

    /// Reverses the customers in positions `[a, b)`.
    pub fn reverse_segment(&mut self, a: usize, b: usize) {
        self.customers[a..b].reverse();
    }

    /// Appends every customer of `other`, consuming it.
    pub fn extend(&mut self, other: Route) {
        self.customers.extend(other.customers);
    }

    pub(crate) fn customers_mut(&mut self) -> &mut Vec<usize> {
        &mut self.customers
    }
}

impl From<Vec<usize>> for Route {
    fn from(customers: Vec<usize>) -> Self {
        Self { customers }
    }
}
