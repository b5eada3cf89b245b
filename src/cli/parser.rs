use crate::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for qublog-timer
/// Recomputes running-entry timers and the day summary from page snapshots
#[derive(Parser)]
#[command(
    name = "qublog-timer",
    version = env!("CARGO_PKG_VERSION"),
    about = "Active-timer display refresh for the Qublog journal",
    long_about = None
)]
pub struct Cli {
    /// Override configuration file path
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only log errors
    #[arg(global = true, long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log debug events
    #[arg(global = true, long, short = 'v')]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::config_file)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one refresh tick over a page snapshot
    Refresh {
        /// Page snapshot (JSON)
        file: PathBuf,

        #[arg(
            long = "now",
            value_name = "TIMESTAMP",
            help = "Use this wall-clock time instead of the current time"
        )]
        now: Option<String>,

        #[arg(long = "json", help = "Print the rendered fields as JSON")]
        json: bool,
    },

    /// Re-read a page snapshot and refresh it on a fixed interval
    Watch {
        /// Page snapshot (JSON), re-read on every tick
        file: PathBuf,

        #[arg(
            long = "interval",
            value_name = "SECS",
            value_parser = clap::value_parser!(u64).range(1..),
            help = "Seconds between ticks (default: refresh_interval_secs from config)"
        )]
        interval: Option<u64>,

        /// Milliseconds between ticks, for fast runs in tests
        #[arg(
            long = "interval-ms",
            value_name = "MS",
            hide = true,
            conflicts_with = "interval",
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        interval_ms: Option<u64>,

        #[arg(long = "ticks", value_name = "N", help = "Stop after N ticks")]
        ticks: Option<u64>,

        #[arg(long = "json", help = "Print the rendered fields as JSON")]
        json: bool,
    },

    /// Classify a thingy-button server response
    Button {
        /// Response body from /journal/thingy_button
        response: String,
    },

    /// Show or initialize the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "init", help = "Write a default configuration file")]
        init: bool,

        #[arg(long = "force", requires = "init", help = "Overwrite an existing file")]
        force: bool,
    },
}
