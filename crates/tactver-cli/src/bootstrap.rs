//! CLI bootstrap - the composition root.
//!
//! The only place where the reqwest-backed client is constructed and the
//! tracing subscriber is installed. Handlers receive a [`CliContext`].

use std::time::Duration;

use tactver_tact::{DefaultTactClient, HttpBackend, ReqwestBackend, TactClient, TactClientConfig};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Version server base URL.
    pub base_url: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl CliConfig {
    /// Take settings from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            base_url: cli.base_url.clone(),
            timeout: Duration::from_secs(cli.timeout),
        }
    }

    /// The client configuration these settings describe.
    pub fn client_config(&self) -> TactClientConfig {
        TactClientConfig::new()
            .with_base_url(self.base_url.clone())
            .with_timeout(self.timeout)
    }
}

/// Composed dependencies for command handlers.
pub struct CliContext<B: HttpBackend = ReqwestBackend> {
    /// TACT version client.
    pub client: TactClient<B>,
}

impl<B: HttpBackend> CliContext<B> {
    /// Compose a context over a custom backend.
    pub fn with_backend(config: &CliConfig, backend: B) -> Result<Self, CliError> {
        let client = TactClient::with_backend(&config.client_config(), backend)?;
        Ok(Self { client })
    }
}

/// Build the production context.
pub fn bootstrap(config: &CliConfig) -> Result<CliContext, CliError> {
    let client = DefaultTactClient::new(&config.client_config())?;
    tracing::debug!(base_url = %client.base_url(), timeout = ?config.timeout, "client ready");
    Ok(CliContext { client })
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug output for
/// this tool's crates with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default_directives = if verbose {
        "warn,tactver_tact=debug,tactver_cli=debug,tactver=debug"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tactver_tact::testing::FakeBackend;

    #[test]
    fn test_config_from_cli() {
        let cli = Cli::parse_from([
            "tactver",
            "--base-url",
            "http://localhost:1119",
            "--timeout",
            "4",
            "snapshot",
        ]);
        let config = CliConfig::from_cli(&cli);
        assert_eq!(config.base_url, "http://localhost:1119");
        assert_eq!(config.timeout, Duration::from_secs(4));

        let client_config = config.client_config();
        assert_eq!(client_config.base_url(), "http://localhost:1119");
        assert_eq!(client_config.timeout(), Duration::from_secs(4));
    }

    #[test]
    fn test_bootstrap_default() {
        let config = CliConfig {
            base_url: tactver_tact::DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(10),
        };
        let ctx = bootstrap(&config).unwrap();
        assert_eq!(ctx.client.base_url().host_str(), Some("us.patch.battle.net"));
    }

    #[test]
    fn test_bad_base_url_is_config_error() {
        let config = CliConfig {
            base_url: "::nope::".to_string(),
            timeout: Duration::from_secs(10),
        };
        let Err(err) = CliContext::with_backend(&config, FakeBackend::new()) else {
            panic!("expected an error");
        };
        assert_eq!(err.exit_code(), 78);
    }
}
