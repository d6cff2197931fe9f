//! Single-threaded loop

use std::hint::black_box;

use super::SumParams;
use crate::error::SumError;
use crate::parallel::{CANCEL_CHECK_INTERVAL, CancelToken};

/// Sum `n * i` for `i` in `1..=N` on the calling thread.
///
/// `N <= 0` performs zero iterations. The token is polled every
/// [`CANCEL_CHECK_INTERVAL`] iterations so a long loop can be abandoned.
pub fn calculate(params: SumParams, cancel: &CancelToken) -> Result<i64, SumError> {
    let mut sum: i64 = 0;
    for (step, i) in (1..=params.limit).enumerate() {
        if step % CANCEL_CHECK_INTERVAL == 0 && cancel.is_cancelled() {
            tracing::debug!("Single-thread loop cancelled at i={}", i);
            return Err(SumError::Cancelled);
        }
        // black_box keeps the optimizer from folding the loop into the closed form
        sum = sum.wrapping_add(black_box(i64::from(params.multiplier)).wrapping_mul(i));
    }
    Ok(sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sum::formula;
    use std::time::Duration;

    #[test]
    fn test_matches_formula() {
        let cancel = CancelToken::new();
        for (n, limit) in [(1, 100), (3, 10), (1, 1), (7, 12_345), (-4, 999)] {
            let params = SumParams::new(n, limit);
            assert_eq!(calculate(params, &cancel), Ok(formula::calculate(params)), "n={n} N={limit}");
        }
    }

    #[test]
    fn test_empty_range() {
        let cancel = CancelToken::new();
        assert_eq!(calculate(SumParams::new(1, 0), &cancel), Ok(0));
        assert_eq!(calculate(SumParams::new(5, -3), &cancel), Ok(0));
    }

    #[test]
    fn test_cancelled_token_stops_the_loop() {
        let cancel = CancelToken::new();
        cancel.cancel();
        assert_eq!(calculate(SumParams::default(), &cancel), Err(SumError::Cancelled));
    }

    #[test]
    fn test_deadline_interrupts_long_loop() {
        let cancel = CancelToken::with_timeout(Duration::from_millis(20));
        let huge = SumParams::new(1, i64::MAX / 2);
        assert_eq!(calculate(huge, &cancel), Err(SumError::Cancelled));
    }
}
