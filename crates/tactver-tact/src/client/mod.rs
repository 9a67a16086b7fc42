//! TACT client for querying product version tables.

mod versions;

use crate::config::TactClientConfig;
use crate::error::TactResult;
use crate::http::{HttpBackend, ReqwestBackend};
use url::Url;

// ============================================================================
// Type Aliases
// ============================================================================

/// Default TACT client using the reqwest HTTP backend.
pub type DefaultTactClient = TactClient<ReqwestBackend>;

// ============================================================================
// Client
// ============================================================================

/// Client for the TACT `/versions` endpoints.
///
/// Generic over the HTTP backend so the transport can be injected. Use
/// [`DefaultTactClient`] for the reqwest-backed client.
pub struct TactClient<B: HttpBackend> {
    pub(crate) backend: B,
    pub(crate) base_url: Url,
}

impl DefaultTactClient {
    /// Create a new client with the given configuration.
    pub fn new(config: &TactClientConfig) -> TactResult<Self> {
        let backend = ReqwestBackend::new(config)?;
        Self::with_backend(config, backend)
    }

    /// Create a new client with default configuration.
    pub fn default_client() -> TactResult<Self> {
        Self::new(&TactClientConfig::default())
    }
}

impl<B: HttpBackend> TactClient<B> {
    /// Create a client over a custom backend.
    ///
    /// Only the base URL is taken from `config`; timeout and user agent are
    /// the backend's concern.
    pub fn with_backend(config: &TactClientConfig, backend: B) -> TactResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        Ok(Self { backend, base_url })
    }

    /// The base URL requests are built from.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The injected backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }
}
