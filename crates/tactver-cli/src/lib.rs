//! Command-line adapter for `tactver-tact`.
//!
//! Parses arguments, composes the client, runs one command and maps the
//! outcome to an exit code. The binary in `main.rs` is a thin wrapper.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by the binary only
use dotenvy as _;
use tokio as _;

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod parser;
pub mod presentation;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap, init_logging};
pub use commands::{Commands, OutputFormat};
pub use error::CliError;
pub use parser::Cli;
