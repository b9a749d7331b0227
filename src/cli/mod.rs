//! Command-line interface of the `modem-snapshot` binary.
//!
//! Parses flags, resolves the effective configuration and renders the
//! snapshot for the terminal.

pub mod formatting;


use std::path::PathBuf;

use clap::Parser;

use crate::{Result, config::Config};

/// Print a snapshot of every cellular modem known to ModemManager.
#[derive(Debug, Parser)]
#[command(name = "modem-snapshot", version, about)]
pub struct Args {
    /// Configuration file to use instead of the default location.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the records as a JSON array.
    #[arg(long)]
    pub json: bool,

    /// Timeout for each remote query of a modem, in milliseconds.
    #[arg(long, value_name = "MS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_ms: Option<u64>,

    /// Number of modems queried at the same time.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub concurrency: Option<u16>,

    /// Print the JSON Schema of the configuration file and exit.
    #[arg(long)]
    pub print_config_schema: bool,
}

impl Args {
    /// Load the configuration file and apply flag overrides on top.
    ///
    /// # Errors
    /// Returns error if the configuration cannot be loaded.
    pub fn resolve_config(&self) -> Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };
        self.apply(&mut config);
        Ok(config)
    }

    /// Override config values with the ones given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(timeout_ms) = self.timeout_ms {
            config.aggregation.sub_query_timeout_ms = timeout_ms;
        }
        if let Some(concurrency) = self.concurrency {
            config.aggregation.max_concurrent_devices = usize::from(concurrency);
        }
    }
}
