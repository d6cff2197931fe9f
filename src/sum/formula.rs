//! Closed-form triangular number

use super::SumParams;

/// Compute `n * N * (N + 1) / 2` in constant time.
///
/// The product `N * (N + 1)` is always even, so the division is exact.
/// Arithmetic wraps on overflow; keeping `N` in range is the caller's job.
pub fn calculate(params: SumParams) -> i64 {
    let limit = params.limit;
    let triangle = limit.wrapping_mul(limit.wrapping_add(1)) / 2;
    triangle.wrapping_mul(i64::from(params.multiplier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_values() {
        assert_eq!(calculate(SumParams::new(1, 100)), 5050);
        assert_eq!(calculate(SumParams::new(3, 10)), 165);
        assert_eq!(calculate(SumParams::new(1, 1)), 1);
        assert_eq!(calculate(SumParams::new(1, 0)), 0);
    }

    #[test]
    fn test_default_run_value() {
        assert_eq!(calculate(SumParams::default()), 5_000_000_050_000_000);
    }

    #[test]
    fn test_negative_multiplier() {
        assert_eq!(calculate(SumParams::new(-2, 4)), -20);
    }
}
