//! Configuration management for sumbench
//!
//! Settings are layered with figment. From lowest to highest priority:
//! the embedded `default-config.toml`, `./sumbench.toml` or the file given
//! with `--config`, `SUMBENCH_*` environment variables, and CLI flags.
//! With no overrides the benchmark runs the fixed parameters
//! `n = 1`, `N = 100_000_000`, threads `2, 4, 8, 16, 32`.

mod core;

pub use self::core::{BenchConfig, CliOverrides, OutputFormat};
