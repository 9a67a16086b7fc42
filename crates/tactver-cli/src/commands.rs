//! Subcommands of the `tactver` tool.

use clap::{Subcommand, ValueEnum};

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current build of a product, per region
    Versions {
        /// Product code (e.g. "wow", "wowt", "wow_classic")
        product: String,
        /// Region code, or "all" for every region
        #[arg(short, long, default_value = "all")]
        region: String,
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },

    /// Print a JSON snapshot of several products' versions
    Snapshot {
        /// Product codes (defaults to wow, wow_classic, wow_classic_era)
        products: Vec<String>,
    },
}

/// How `versions` renders its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// JSON array of records
    Json,
}
