//! # sumbench - sequential vs parallel summation benchmark
//!
//! Computes `n * (1 + 2 + ... + N)` three ways and times each one:
//!
//! - **Formula**: the closed-form triangular number, O(1)
//! - **Single thread**: a plain loop over `1..=N`
//! - **Parallel**: `T` scoped worker threads, worker `k` summing
//!   `k+1, k+1+T, k+1+2T, ...`, partials reduced after the join
//!
//! ## Quick Start
//!
//! ```bash
//! # Fixed run: n=1, N=100_000_000, threads 2,4,8,16,32
//! sumbench
//!
//! # Smaller run as JSON lines
//! sumbench run --limit 1000000 --threads 1,2,4 --format json
//!
//! # Cross-check every strategy
//! sumbench check
//! ```

pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod parallel;
pub mod sum;

pub use cli::{Cli, Output};
pub use config::BenchConfig;
pub use error::SumError;

/// Result type alias for sumbench operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
