use anyhow::Result;
use clap::Args;

use crate::bench::{check::SCENARIOS, run_checks};
use crate::cli::Output;
use crate::config::OutputFormat;
use crate::parallel::CancelToken;

#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Only print failures
    #[arg(long)]
    pub failures_only: bool,
}

pub async fn execute(args: CheckArgs, quiet: bool) -> Result<()> {
    let output = Output::new(OutputFormat::Text, quiet || args.failures_only);
    output.header(&format!(
        "Checking all strategies against {} scenarios",
        SCENARIOS.len()
    ));

    let outcomes = run_checks(&CancelToken::new());
    for outcome in &outcomes {
        output.check_outcome(outcome);
    }

    let failed = outcomes.iter().filter(|o| !o.passed()).count();
    if failed > 0 {
        output.error(&format!("{failed} of {} checks failed", outcomes.len()));
        anyhow::bail!("strategy check failed");
    }

    output.success(&format!("All {} checks passed", outcomes.len()));
    Ok(())
}
