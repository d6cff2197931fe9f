//! Summation strategies
//!
//! Every strategy computes `sum_{i=1..N} n*i` for a 32-bit multiplier `n` and a
//! 64-bit limit `N`, and all of them must agree on the result:
//!
//! ```rust
//! use sumbench::parallel::CancelToken;
//! use sumbench::sum::{Strategy, SumParams};
//!
//! let params = SumParams::new(1, 100);
//! let cancel = CancelToken::new();
//! for strategy in [Strategy::Formula, Strategy::Sequential, Strategy::Parallel { threads: 4 }] {
//!     assert_eq!(strategy.calculate(params, &cancel).unwrap(), 5050);
//! }
//! ```

pub mod formula;
pub mod sequential;

use serde::{Deserialize, Serialize};

use crate::error::SumError;
use crate::parallel::{CancelToken, ParallelExecutor};

/// Multiplier used by the default benchmark run
pub const DEFAULT_MULTIPLIER: i32 = 1;

/// Upper bound of the summed range in the default benchmark run
pub const DEFAULT_LIMIT: i64 = 100_000_000;

/// Worker counts exercised by the default benchmark run, in order
pub const DEFAULT_THREAD_COUNTS: [usize; 5] = [2, 4, 8, 16, 32];

/// Inputs shared by every strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SumParams {
    /// `n`
    pub multiplier: i32,
    /// `N`
    pub limit: i64,
}

impl SumParams {
    pub fn new(multiplier: i32, limit: i64) -> Self {
        Self { multiplier, limit }
    }
}

impl Default for SumParams {
    fn default() -> Self {
        Self::new(DEFAULT_MULTIPLIER, DEFAULT_LIMIT)
    }
}

/// Strategy enum for choosing how the sum is computed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Formula,
    Sequential,
    Parallel { threads: usize },
}

impl Strategy {
    /// The default run: formula, single thread, then each parallel width
    pub fn default_lineup() -> Vec<Strategy> {
        Self::lineup(&DEFAULT_THREAD_COUNTS)
    }

    /// Formula and sequential followed by one parallel entry per thread count
    pub fn lineup(thread_counts: &[usize]) -> Vec<Strategy> {
        let mut strategies = vec![Strategy::Formula, Strategy::Sequential];
        strategies.extend(
            thread_counts
                .iter()
                .map(|&threads| Strategy::Parallel { threads }),
        );
        strategies
    }

    /// Human-readable label used as the prefix of every output line
    pub fn label(&self) -> String {
        match self {
            Strategy::Formula => "Formula".to_string(),
            Strategy::Sequential => "Single thread".to_string(),
            Strategy::Parallel { threads } => format!("Parallel with {threads} threads"),
        }
    }

    /// Compute the sum with this strategy.
    ///
    /// Both loop strategies poll `cancel`; the formula is constant time and
    /// ignores it.
    pub fn calculate(&self, params: SumParams, cancel: &CancelToken) -> Result<i64, SumError> {
        match self {
            Strategy::Formula => Ok(formula::calculate(params)),
            Strategy::Sequential => sequential::calculate(params, cancel),
            Strategy::Parallel { threads } => {
                ParallelExecutor::new(*threads)?.execute(params, cancel)
            }
        }
    }
}
