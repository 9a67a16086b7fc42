//! CLI-specific error types and mappings.
//!
//! Maps `TactError` kinds to exit codes and the label printed on stderr.

use tactver_tact::{ErrorKind, TactError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The version service could not be reached or answered with an error.
    #[error("{0}")]
    Transport(String),

    /// The version service answered with a malformed body.
    #[error("{0}")]
    Parse(String),

    /// The requested region is not in the response.
    #[error("{0}")]
    NotFound(String),

    /// Argument validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// - 0: Success (including empty results)
    /// - 2: Misuse (invalid arguments)
    /// - 3: Requested region not found
    /// - 65: Malformed response (`EX_DATAERR`)
    /// - 69: Service unavailable (`EX_UNAVAILABLE`)
    /// - 74: Output error (`EX_IOERR`)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Arguments(_) => 2,
            Self::NotFound(_) => 3,
            Self::Parse(_) => 65,
            Self::Transport(_) => 69,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Short label printed before the message.
    pub const fn kind_label(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Parse(_) => "parse",
            Self::NotFound(_) => "not-found",
            Self::Arguments(_) => "usage",
            Self::Config(_) => "config",
            Self::Io(_) => "io",
        }
    }
}

impl From<TactError> for CliError {
    fn from(err: TactError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::Transport => Self::Transport(message),
            ErrorKind::Parse => Self::Parse(message),
            ErrorKind::NotFound => Self::NotFound(message),
            ErrorKind::Usage => Self::Arguments(message),
            ErrorKind::Config => Self::Config(message),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::Io(format!("failed to encode JSON: {err}"))
    }
}
