//! Error types for summation strategies

use thiserror::Error;

/// Failure of a single strategy invocation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SumError {
    /// The cancel token fired before every worker finished
    #[error("summation cancelled before all workers completed")]
    Cancelled,

    /// A worker thread panicked inside the scope
    #[error("a worker thread panicked during parallel summation")]
    WorkerPanicked,

    /// Parallel strategy was asked to run with zero workers
    #[error("thread count must be at least 1")]
    InvalidThreadCount,
}
