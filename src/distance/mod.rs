//! Distance matrix.
//!
//! Provides the dense Euclidean distance matrix shared by every component.

mod matrix;

pub use matrix::DistanceMatrix;
