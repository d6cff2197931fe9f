//! Command-line interface for sumbench
//!
//! Running `sumbench` with no subcommand is the same as `sumbench run`: the
//! fixed benchmark of every strategy.

use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod commands;
mod output;

pub use output::Output;

use commands::{check, run, version};

#[derive(Parser)]
#[command(
    name = "sumbench",
    version = env!("CARGO_PKG_VERSION"),
    about = "Benchmark closed-form, single-thread and multi-thread summation",
    long_about = "sumbench computes n*(1+2+...+N) with a closed-form formula, a \
                  single-threaded loop and a fixed-stride multi-threaded loop, \
                  and reports each result with its wall-clock time."
)]
pub struct Cli {
    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress logging and decorative output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the benchmark (default)
    Run(run::RunArgs),
    /// Verify that every strategy agrees on known answers
    Check(check::CheckArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub async fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        match self.command {
            Some(Commands::Run(args)) => run::execute(args, self.config.as_deref(), self.quiet).await,
            Some(Commands::Check(args)) => check::execute(args, self.quiet).await,
            Some(Commands::Version(args)) => version::execute(args).await,
            None => run::execute(run::RunArgs::default(), self.config.as_deref(), self.quiet).await,
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout carries only result lines
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
