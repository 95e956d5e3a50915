//! Cost computation, feasibility checking and reporting metrics.
//!
//! [`is_valid`] is the single admission gate every constructive heuristic
//! and every neighborhood move goes through.

mod cost;
mod evaluator;

pub use cost::{distance, route_cost, total_cost};
pub(crate) use cost::sequence_cost;
pub use evaluator::{check, evaluate, is_valid, route_load, RouteMetrics, SolutionMetrics};
