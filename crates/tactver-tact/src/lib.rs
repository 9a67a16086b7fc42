//! Client for the TACT HTTP version endpoints.
//!
//! Fetches `{base}/{product}/versions`, parses the pipe-separated (BPSV)
//! body, and exposes one [`VersionRecord`] per region. The transport is
//! injected through [`HttpBackend`]; [`DefaultTactClient`] wires in reqwest.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod http;
mod models;
mod parsing;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::{DefaultTactClient, TactClient};

// Configuration
pub use config::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, TactClientConfig};

// Errors
pub use error::{ErrorKind, TactError, TactResult};

// Transport
pub use http::{HttpBackend, ReqwestBackend};

#[cfg(any(test, feature = "test-utils"))]
pub use http::testing;

// Domain types
pub use models::{BuildVersion, DEFAULT_PRODUCTS, Product, ProductVersions, RegionFilter, VersionRecord};

// BPSV parsing
pub use parsing::{Column, ColumnType, Document, Row, parse_document, parse_versions};

// Silence unused dev-dependency warnings
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tokio as _;
#[cfg(test)]
use tokio_test as _;
