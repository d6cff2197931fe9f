//! Parallel summation framework
//!
//! This module owns everything about running the sum on more than one thread:
//! how the index range is split, how workers are spawned and joined, and how
//! a run is abandoned.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  spawn T   ┌─────────────────────────┐
//! │ Coordinator  │───────────▶│ worker k: k+1, k+1+T, … │──┐
//! │ (execute)    │            └─────────────────────────┘  │ partial
//! │              │◀──────────────────────────────────────────┘ (channel)
//! │ join, reduce │
//! └──────────────┘
//! ```
//!
//! - **Partitioning**: [`StridedRange`] gives worker `k` the indices
//!   `k+1, k+1+T, k+1+2T, ...`, so the ranges never overlap and always cover
//!   `1..=N`, including when `T > N`.
//! - **Reduction**: workers never touch a shared total. Each sends one partial
//!   through a bounded crossbeam channel; the coordinator sums them after the
//!   crossbeam scope has joined all threads.
//! - **Cancellation**: [`CancelToken`] is polled by the workers. A tripped
//!   token (signal or deadline) turns the whole run into
//!   [`SumError::Cancelled`](crate::error::SumError::Cancelled).
//!
//! # Example
//!
//! ```rust
//! use sumbench::parallel::{CancelToken, ParallelExecutor};
//! use sumbench::sum::SumParams;
//!
//! let executor = ParallelExecutor::new(4).unwrap();
//! let total = executor.execute(SumParams::new(1, 100), &CancelToken::new()).unwrap();
//! assert_eq!(total, 5050);
//! ```

pub mod cancel;
pub mod core;
pub mod partition;

// Re-export main types for easier access
pub use cancel::{CANCEL_CHECK_INTERVAL, CancelToken};
pub use self::core::ParallelExecutor;
pub use partition::StridedRange;
