//! Domain model types for the capacitated vehicle routing problem.
//!
//! Provides customers with planar locations and demands, the immutable
//! instance that ties them to a vehicle capacity, routes as ordered
//! customer sequences, and solutions as sets of routes.

mod customer;
mod instance;
mod route;
mod solution;

pub use customer::Customer;
pub use instance::Instance;
pub use route::Route;
pub use solution::{Solution, Violation, ViolationType};
