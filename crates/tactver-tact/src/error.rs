//! Error types for TACT version queries.
//!
//! Every variant belongs to one [`ErrorKind`] so callers can branch on the
//! failure class without matching individual variants.

use thiserror::Error;

/// Result type alias for TACT operations.
pub type TactResult<T> = Result<T, TactError>;

/// Coarse classification of a [`TactError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Network or HTTP layer failure.
    Transport,
    /// Malformed or unexpected response body.
    Parse,
    /// Well-formed response lacking the requested region.
    NotFound,
    /// Invalid caller input (product code, region).
    Usage,
    /// Invalid client configuration.
    Config,
}

impl ErrorKind {
    /// Short lowercase label for diagnostics.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Transport => "transport",
            Self::Parse => "parse",
            Self::NotFound => "not-found",
            Self::Usage => "usage",
            Self::Config => "config",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errors related to TACT version queries.
#[derive(Debug, Error)]
pub enum TactError {
    /// The endpoint answered with a non-success status.
    #[error("TACT request failed with status {status}: {url}")]
    Http {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The request did not complete within the configured timeout.
    #[error("TACT request timed out: {url}")]
    Timeout {
        /// The URL that was requested
        url: String,
    },

    /// Connection or other HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A response line could not be parsed.
    #[error("Malformed response at line {line}: {reason} (line: {content:?})")]
    Parse {
        /// 1-based line number within the response body
        line: usize,
        /// The offending line as received
        content: String,
        /// What was wrong with it
        reason: String,
    },

    /// The response body contained no header row.
    #[error("Malformed response: missing header row")]
    MissingHeader,

    /// A version name did not have the `major.minor.patch.build` shape.
    #[error("Invalid build version: {value:?}")]
    InvalidBuildVersion {
        /// The version name as received
        value: String,
    },

    /// The requested region is absent from the response.
    #[error("Region '{region}' not found for product '{product}'")]
    RegionNotFound {
        /// Product that was queried
        product: String,
        /// Region that was requested
        region: String,
    },

    /// The product code is empty or contains characters not allowed in a path segment.
    #[error("Invalid product code: {0:?}")]
    InvalidProduct(String),

    /// The region filter is empty.
    #[error("Invalid region: {0:?}")]
    InvalidRegion(String),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl TactError {
    /// Build a parse error for a specific response line.
    pub(crate) fn parse(line: usize, content: &str, reason: impl Into<String>) -> Self {
        Self::Parse {
            line,
            content: content.to_string(),
            reason: reason.into(),
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::Timeout { .. } | Self::Network(_) => ErrorKind::Transport,
            Self::Parse { .. } | Self::MissingHeader | Self::InvalidBuildVersion { .. } => {
                ErrorKind::Parse
            }
            Self::RegionNotFound { .. } => ErrorKind::NotFound,
            Self::InvalidProduct(_) | Self::InvalidRegion(_) => ErrorKind::Usage,
            Self::InvalidUrl(_) => ErrorKind::Config,
        }
    }
}
