//! # cvrp-tabu
//!
//! Capacitated vehicle routing: constructive heuristics and a tabu search
//! improvement phase over a single-depot Euclidean instance.
//!
//! ## Modules
//!
//! - [`models`] — Domain model types (Customer, Instance, Route, Solution)
//! - [`distance`] — Precomputed Euclidean distance matrix
//! - [`evaluation`] — Feasibility checking and cost evaluation
//! - [`constructive`] — Constructive heuristics (Savings, Insertion, Route-first/Cluster-second)
//! - [`neighborhood`] — Swap, relocate and 2-opt neighbor generators
//! - [`tabu`] — Tabu search with optional 2-opt intensification and restarts
//! - [`tsplib`] — TSPLIB95 CVRP instance reader
//! - [`runner`] — Method dispatch and comparison summaries
//! - [`error`] — Error types

pub mod constructive;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod models;
pub mod neighborhood;
pub mod runner;
pub mod tabu;
pub mod tsplib;
