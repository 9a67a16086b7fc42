//! HTTP backend abstraction for the version endpoint.
//!
//! The client depends on [`HttpBackend`] rather than on reqwest directly,
//! so tests (and embedders with their own transport) can inject one.
//! Failures are surfaced as-is; nothing is retried.

use crate::config::TactClientConfig;
use crate::error::{TactError, TactResult};
use async_trait::async_trait;
use url::Url;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Transport that fetches a URL and returns the body as text.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// GET `url`. Non-2xx statuses, timeouts and connection failures are errors.
    async fn get_text(&self, url: &Url) -> TactResult<String>;
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
pub struct ReqwestBackend {
    client: reqwest::Client,
}

impl ReqwestBackend {
    /// Create a backend honouring the configured timeout and user agent.
    pub fn new(config: &TactClientConfig) -> TactResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn get_text(&self, url: &Url) -> TactResult<String> {
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(url.as_str())
            .send()
            .await
            .map_err(|e| classify(e, url))?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "non-success status");
            return Err(TactError::Http {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        response.text().await.map_err(|e| classify(e, url))
    }
}

/// Map a reqwest failure onto the transport variants.
fn classify(err: reqwest::Error, url: &Url) -> TactError {
    if err.is_timeout() {
        TactError::Timeout {
            url: url.to_string(),
        }
    } else {
        TactError::Network(err)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================

#[cfg(any(test, feature = "test-utils"))]
pub mod testing {
    use super::*;
    use std::sync::{Arc, Mutex};

    /// Canned outcome for the fake backend.
    #[derive(Debug, Clone)]
    pub enum CannedResponse {
        /// 200 with this body
        Body(String),
        /// Non-success status
        Status(u16),
        /// The request times out
        Timeout,
    }

    impl CannedResponse {
        /// A 200 response with `body`.
        pub fn body(body: impl Into<String>) -> Self {
            Self::Body(body.into())
        }
    }

    /// A fake HTTP backend that returns canned responses and records requests.
    #[derive(Clone, Default)]
    pub struct FakeBackend {
        responses: Vec<(String, CannedResponse)>,
        default_response: Option<CannedResponse>,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl FakeBackend {
        /// Create a new fake backend.
        pub fn new() -> Self {
            Self::default()
        }

        /// Add a canned response for URLs containing `url_contains`.
        /// Patterns are tried in insertion order.
        #[must_use]
        pub fn with_response(mut self, url_contains: &str, response: CannedResponse) -> Self {
            self.responses.push((url_contains.to_string(), response));
            self
        }

        /// Set a default response for URLs that don't match any pattern.
        #[must_use]
        pub fn with_default(mut self, response: CannedResponse) -> Self {
            self.default_response = Some(response);
            self
        }

        /// URLs requested so far, in order.
        pub fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn find_response(&self, url: &str) -> Option<CannedResponse> {
            self.responses
                .iter()
                .find(|(pattern, _)| url.contains(pattern.as_str()))
                .map(|(_, response)| response.clone())
                .or_else(|| self.default_response.clone())
        }
    }

    #[async_trait]
    impl HttpBackend for FakeBackend {
        async fn get_text(&self, url: &Url) -> TactResult<String> {
            self.requests.lock().unwrap().push(url.to_string());

            match self.find_response(url.as_str()) {
                Some(CannedResponse::Body(body)) => Ok(body),
                Some(CannedResponse::Status(status)) => Err(TactError::Http {
                    status,
                    url: url.to_string(),
                }),
                Some(CannedResponse::Timeout) => Err(TactError::Timeout {
                    url: url.to_string(),
                }),
                None => Err(TactError::Http {
                    status: 404,
                    url: url.to_string(),
                }),
            }
        }
    }
}
