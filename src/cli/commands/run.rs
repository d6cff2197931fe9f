use anyhow::{Context, Result};
use clap::Args;

use crate::bench::Driver;
use crate::cli::Output;
use crate::config::{BenchConfig, CliOverrides, OutputFormat};
use crate::parallel::CancelToken;

#[derive(Args, Debug, Default)]
pub struct RunArgs {
    /// Multiplier n
    #[arg(short = 'n', long)]
    pub multiplier: Option<i32>,

    /// Upper bound N of the summed range
    #[arg(short = 'N', long)]
    pub limit: Option<i64>,

    /// Worker counts for the parallel strategy (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub threads: Option<Vec<usize>>,

    /// Abandon the run after this many milliseconds
    #[arg(long)]
    pub timeout_ms: Option<u64>,

    /// Output format for result lines
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl From<RunArgs> for CliOverrides {
    fn from(args: RunArgs) -> Self {
        Self {
            multiplier: args.multiplier,
            limit: args.limit,
            threads: args.threads,
            timeout_ms: args.timeout_ms,
            format: args.format,
        }
    }
}

pub async fn execute(args: RunArgs, config_path: Option<&str>, quiet: bool) -> Result<()> {
    let config = BenchConfig::load(config_path, Some(args.into()))?;
    let output = Output::new(config.format, quiet);

    let cancel = match config.timeout() {
        Some(timeout) => CancelToken::with_timeout(timeout),
        None => CancelToken::new(),
    };

    tracing::info!(
        "Benchmarking n={} N={} on {} CPU cores, thread counts {:?}",
        config.multiplier,
        config.limit,
        num_cpus::get(),
        config.threads
    );

    // Ctrl-C trips the token instead of killing the process mid-run
    let signal_token = cancel.clone();
    let watcher = tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling benchmark");
            signal_token.cancel();
        }
    });

    let driver = Driver::from_config(&config);
    let outcome = tokio::task::spawn_blocking(move || {
        driver.run(&cancel, |result| output.result(&result))
    })
    .await
    .context("Benchmark task terminated unexpectedly")?;

    watcher.abort();

    let summary = outcome.context("Benchmark run aborted")?;
    if summary.mismatches > 0 {
        output.warning(&format!(
            "{} of {} strategies disagreed with the closed form",
            summary.mismatches, summary.runs
        ));
    }

    Ok(())
}
