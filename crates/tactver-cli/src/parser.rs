//! Main CLI parser and top-level argument handling.

use clap::Parser;
use tactver_tact::DEFAULT_BASE_URL;

use crate::commands::Commands;

/// Look up current build versions from the TACT HTTP version service.
#[derive(Parser, Debug)]
#[command(name = "tactver")]
#[command(about = "Report current game build versions from TACT version endpoints")]
#[command(version)]
pub struct Cli {
    /// Version server base URL
    #[arg(long = "base-url", env = "TACTVER_BASE_URL", default_value = DEFAULT_BASE_URL, global = true)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..), global = true)]
    pub timeout: u64,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}
