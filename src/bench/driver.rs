use std::time::Instant;

use super::BenchmarkResult;
use crate::config::BenchConfig;
use crate::error::SumError;
use crate::parallel::CancelToken;
use crate::sum::{Strategy, SumParams, formula};

/// Runs each strategy once, in order, with fixed parameters
#[derive(Debug, Clone)]
pub struct Driver {
    params: SumParams,
    strategies: Vec<Strategy>,
}

/// What happened during a completed run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    pub runs: usize,
    /// Strategies whose value differed from the closed form
    pub mismatches: usize,
}

impl Driver {
    pub fn new(params: SumParams, strategies: Vec<Strategy>) -> Self {
        Self { params, strategies }
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        Self::new(config.params(), Strategy::lineup(&config.threads))
    }

    /// Time every strategy and pass each result to `sink` immediately.
    ///
    /// Stops at the first failure; results already passed to `sink` stay
    /// emitted.
    pub fn run<F>(&self, cancel: &CancelToken, mut sink: F) -> Result<RunSummary, SumError>
    where
        F: FnMut(BenchmarkResult),
    {
        let expected = formula::calculate(self.params);
        let mut summary = RunSummary::default();

        for strategy in &self.strategies {
            if cancel.is_cancelled() {
                tracing::warn!("Run cancelled before {}", strategy.label());
                return Err(SumError::Cancelled);
            }

            let result = time_strategy(*strategy, self.params, cancel).inspect_err(|e| {
                tracing::warn!("{} failed: {}", strategy.label(), e);
            })?;

            if result.value != expected {
                tracing::warn!(
                    "{} returned {} but the closed form gives {}",
                    result.label,
                    result.value,
                    expected
                );
                summary.mismatches += 1;
            }

            tracing::debug!("{} finished in {}ms", result.label, result.elapsed_ms);
            summary.runs += 1;
            sink(result);
        }

        Ok(summary)
    }
}

/// Call `strategy` once and measure it with a monotonic clock
pub fn time_strategy(
    strategy: Strategy,
    params: SumParams,
    cancel: &CancelToken,
) -> Result<BenchmarkResult, SumError> {
    let start = Instant::now();
    let value = strategy.calculate(params, cancel)?;
    let elapsed = start.elapsed();

    Ok(BenchmarkResult {
        label: strategy.label(),
        value,
        elapsed_ms: u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX),
    })
}
