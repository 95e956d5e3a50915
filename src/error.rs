//! Error types.

use thiserror::Error;

/// A precondition violated while assembling an [`Instance`](crate::models::Instance).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstanceError {
    #[error("vehicle capacity must be positive, got {0}")]
    NonPositiveCapacity(i32),
    #[error("customer at position {position} has id {id}, expected {position}")]
    NonContiguousId { position: usize, id: usize },
    #[error("customer {id} has negative demand {demand}")]
    NegativeDemand { id: usize, demand: i32 },
    #[error("customer {id} demand {demand} exceeds vehicle capacity {capacity}")]
    DemandExceedsCapacity { id: usize, demand: i32, capacity: i32 },
    #[error("node {0} has a non-finite coordinate")]
    NonFiniteCoordinate(usize),
}

/// Failure while reading a TSPLIB instance.
#[derive(Error, Debug)]
pub enum TsplibError {
    #[error("failed to read instance")]
    Io(#[from] std::io::Error),
    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },
    #[error("missing CAPACITY entry")]
    MissingCapacity,
    #[error("DIMENSION is {expected} but {found} nodes have coordinates")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("node {0} has no coordinate")]
    MissingCoordinate(usize),
    #[error("node {0} has no demand")]
    MissingDemand(usize),
    #[error("depot {0} is not a listed node")]
    UnknownDepot(usize),
    #[error(transparent)]
    Instance(#[from] InstanceError),
}
