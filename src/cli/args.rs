//! Shared argument groups for the `mibc-*` tools.

use std::time::Duration;

use clap::{ArgAction, Args};

use crate::config::ManagerConfig;

/// Target and session arguments common to every tool.
#[derive(Debug, Args)]
pub struct CommonArgs {
    /// Agent address (host[:port], or a demo identifier such as
    /// "localhost" for the built-in stand-in agent).
    #[arg(value_name = "AGENT")]
    pub agent: String,

    /// Community string.
    #[arg(short = 'c', long, default_value = "public")]
    pub community: String,

    /// Request timeout in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 5000)]
    pub timeout: u64,

    /// Retry count for timed-out requests.
    #[arg(short = 'r', long, default_value_t = 1)]
    pub retries: u32,
}

impl CommonArgs {
    /// Build the manager config these arguments describe.
    pub fn manager_config(&self) -> ManagerConfig {
        ManagerConfig::default()
            .timeout(Duration::from_millis(self.timeout))
            .retries(self.retries)
    }
}

/// Output-control arguments common to every tool.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Emit JSON instead of human-readable lines.
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v: debug, -vv: trace).
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl OutputArgs {
    /// Initialize tracing to stderr at the requested verbosity.
    /// `RUST_LOG` overrides the flag-derived filter.
    pub fn init_tracing(&self) {
        let default_filter = match self.verbose {
            0 => "warn",
            1 => "mibcore=debug",
            _ => "mibcore=trace",
        };
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    }
}
