use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use crate::sum::SumParams;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Repository-local config file picked up when no `--config` is given
const LOCAL_CONFIG_FILE: &str = "sumbench.toml";

/// Prefix for environment overrides
const ENV_PREFIX: &str = "SUMBENCH_";

/// How result lines are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `<label> result: <value>` / `<label> time: <ms>ms`
    #[default]
    Text,
    /// One JSON object per strategy
    Json,
}

/// Fully resolved benchmark configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Multiplier `n`
    pub multiplier: i32,

    /// Upper bound `N`
    pub limit: i64,

    /// Worker counts for the parallel strategy, in run order
    pub threads: Vec<usize>,

    /// Abandon the run after this many milliseconds
    #[serde(default)]
    pub timeout_ms: Option<u64>,

    #[serde(default)]
    pub format: OutputFormat,
}

/// Values given on the command line; unset fields leave lower layers alone
#[derive(Debug, Clone, Default, Serialize)]
pub struct CliOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplier: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<Vec<usize>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<OutputFormat>,
}

impl BenchConfig {
    /// Load configuration with the standard layering
    pub fn load(custom_config: Option<&str>, cli_overrides: Option<CliOverrides>) -> Result<Self> {
        tracing::trace!("CONFIG LOAD: Starting");

        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG));

        figment = match custom_config {
            Some(path) => {
                if !Path::new(path).exists() {
                    tracing::warn!("Config file {} not found, using defaults", path);
                }
                figment.merge(Toml::file(path))
            }
            None => figment.merge(Toml::file(LOCAL_CONFIG_FILE)),
        };

        figment = figment.merge(Env::prefixed(ENV_PREFIX));

        if let Some(cli) = cli_overrides {
            tracing::trace!("CONFIG LOAD: Applying CLI overrides");
            figment = figment.merge(Serialized::globals(cli));
        }

        let config: BenchConfig = figment
            .extract()
            .context("Failed to parse sumbench configuration")?;

        config.validate()?;
        tracing::debug!("Resolved configuration: {:?}", config);

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.limit < 0 {
            anyhow::bail!("limit cannot be negative (got {})", self.limit);
        }

        if self.threads.is_empty() {
            anyhow::bail!("At least one thread count must be specified");
        }

        if self.threads.contains(&0) {
            anyhow::bail!("Thread counts must be at least 1");
        }

        if self.timeout_ms == Some(0) {
            anyhow::bail!("timeout_ms cannot be 0");
        }

        Ok(())
    }

    pub fn params(&self) -> SumParams {
        SumParams::new(self.multiplier, self.limit)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        let params = SumParams::default();
        Self {
            multiplier: params.multiplier,
            limit: params.limit,
            threads: crate::sum::DEFAULT_THREAD_COUNTS.to_vec(),
            timeout_ms: None,
            format: OutputFormat::Text,
        }
    }
}
