//! Error type for pool operations

use core::fmt;

/// Result type for pool operations.
pub type PoolResult<T> = Result<T, PoolError>;

/// Errors that can occur while building or driving a [`crate::JobStore`]
/// backed pool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PoolError {
    /// `create` was asked for 0 or more than `MAX_NB_THREADS` workers.
    InvalidThreadCount { requested: usize, max: usize },

    /// A job declared more than `MAX_NB_JOB_DEPENDENCIES` predecessors.
    TooManyPredecessors { requested: usize, max: usize },

    /// The pool has already accepted `MAX_NB_JOBS` jobs.
    CapacityExceeded { max: usize },

    /// `add` was called after `wait` sealed the pool.
    PoolSealed,

    /// A primitive (worker thread) failed to spawn during `create`.
    WorkerSpawnFailed,
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoolError::InvalidThreadCount { requested, max } => write!(
                f,
                "invalid thread count {requested}: must be between 1 and {max}"
            ),
            PoolError::TooManyPredecessors { requested, max } => write!(
                f,
                "job declared {requested} predecessors, max is {max}"
            ),
            PoolError::CapacityExceeded { max } => {
                write!(f, "pool has reached its capacity of {max} jobs")
            }
            PoolError::PoolSealed => write!(f, "add() called after wait() sealed the pool"),
            PoolError::WorkerSpawnFailed => write!(f, "failed to spawn a worker thread"),
        }
    }
}

impl std::error::Error for PoolError {}
