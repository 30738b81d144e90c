//! CLI for the cransnap snapshot mirror switcher.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use cransnap_core::config;

use commands::{run_check, run_list, run_reset, run_set, run_show};

/// Top-level CLI for the cransnap snapshot mirror switcher.
#[derive(Debug, Parser)]
#[command(name = "cransnap")]
#[command(about = "Pin the CRAN mirror to a dated snapshot", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Point the CRAN mirror at the snapshot for a date.
    Set {
        /// Snapshot date, YYYY-MM-DD.
        date: String,
        /// Snapshot server base URL (overrides the configured value).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Confirm the date against the server's snapshot listing first.
        #[arg(long)]
        verify: bool,
    },

    /// List the snapshot dates the server exposes.
    List {
        /// Snapshot server base URL (overrides the configured value).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
    },

    /// Validate a snapshot date without changing anything.
    Check {
        /// Snapshot date, YYYY-MM-DD.
        date: String,
        /// Snapshot server base URL (overrides the configured value).
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,
        /// Confirm the date against the server's snapshot listing too.
        #[arg(long)]
        verify: bool,
    },

    /// Show the current mirror configuration.
    Show,

    /// Restore the default CRAN mirror configuration.
    Reset,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Set {
                date,
                base_url,
                verify,
            } => run_set(&date, base_url.as_deref().unwrap_or(cfg.base_url()), verify)?,
            CliCommand::List { base_url } => {
                run_list(base_url.as_deref().unwrap_or(cfg.base_url()))?
            }
            CliCommand::Check {
                date,
                base_url,
                verify,
            } => run_check(&date, base_url.as_deref().unwrap_or(cfg.base_url()), verify)?,
            CliCommand::Show => run_show()?,
            CliCommand::Reset => run_reset()?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
