//! Benchmark driver
//!
//! Runs a lineup of [`Strategy`](crate::sum::Strategy) values against one set
//! of parameters, timing each call and handing every [`BenchmarkResult`] to an
//! output sink as soon as it is produced.

pub mod check;
pub mod driver;

pub use check::{CheckOutcome, run_checks};
pub use driver::{Driver, RunSummary, time_strategy};

use serde::Serialize;

/// One timed strategy invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkResult {
    pub label: String,
    #[serde(rename = "result")]
    pub value: i64,
    #[serde(rename = "time_ms")]
    pub elapsed_ms: u64,
}
