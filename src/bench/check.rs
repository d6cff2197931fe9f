//! Cross-checks every strategy against known answers

use super::driver::time_strategy;
use crate::error::SumError;
use crate::parallel::CancelToken;
use crate::sum::{Strategy, SumParams};

/// `(n, N, expected)` triples every strategy must reproduce
pub const SCENARIOS: [(i32, i64, i64); 5] = [
    (1, 100, 5050),
    (3, 10, 165),
    (1, 1, 1),
    (1, 0, 0),
    (7, 1_000_003, 3_500_024_500_042),
];

/// Worker counts checked on top of the machine's core count
pub const CHECK_THREAD_COUNTS: [usize; 7] = [1, 2, 3, 4, 8, 16, 32];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub params: SumParams,
    pub label: String,
    pub expected: i64,
    /// First call
    pub actual: Result<i64, SumError>,
    /// Second call with identical parameters
    pub repeated: Result<i64, SumError>,
}

impl CheckOutcome {
    /// Both calls must return the expected value
    pub fn passed(&self) -> bool {
        self.actual == Ok(self.expected) && self.repeated == Ok(self.expected)
    }

    pub fn is_repeatable(&self) -> bool {
        self.actual == self.repeated
    }
}

/// Run the full scenario grid, twice per strategy to confirm repeat calls agree
pub fn run_checks(cancel: &CancelToken) -> Vec<CheckOutcome> {
    let mut thread_counts = CHECK_THREAD_COUNTS.to_vec();
    let cores = num_cpus::get();
    if !thread_counts.contains(&cores) {
        thread_counts.push(cores);
    }

    let strategies = Strategy::lineup(&thread_counts);
    let mut outcomes = Vec::with_capacity(SCENARIOS.len() * strategies.len());

    for (multiplier, limit, expected) in SCENARIOS {
        let params = SumParams::new(multiplier, limit);

        for strategy in &strategies {
            let actual = time_strategy(*strategy, params, cancel).map(|r| r.value);
            let repeated = match &actual {
                Ok(_) => time_strategy(*strategy, params, cancel).map(|r| r.value),
                Err(e) => Err(e.clone()),
            };

            let outcome = CheckOutcome {
                params,
                label: strategy.label(),
                expected,
                actual,
                repeated,
            };
            if !outcome.is_repeatable() {
                tracing::warn!(
                    "{} is not repeatable: {:?} then {:?}",
                    outcome.label,
                    outcome.actual,
                    outcome.repeated
                );
            }
            outcomes.push(outcome);
        }
    }

    outcomes
}
