//! Tabu search metaheuristic.
//!
//! - [`TabuConfig`] — Time budget, neighborhood and restart switches
//! - [`TabuList`] — Bounded FIFO of recently accepted moves
//! - [`TabuRunner`] — The search loop
//!
//! # References
//!
//! - Glover, F. (1986), "Future paths for integer programming and links to
//!   artificial intelligence"
//! - Gendreau, Hertz & Laporte (1994), "A Tabu Search Heuristic for the
//!   Vehicle Routing Problem"

mod config;
mod search;
mod tabu_list;

pub use config::{TabuConfig, TabuVariant};
pub use search::{StopReason, TabuResult, TabuRunner};
pub use tabu_list::TabuList;
