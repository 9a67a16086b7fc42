//! Domain types for version queries.

use crate::error::{TactError, TactResult};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Product
// ============================================================================

/// Products queried when the caller does not name any.
pub const DEFAULT_PRODUCTS: &[&str] = &["wow", "wow_classic", "wow_classic_era"];

/// A validated product code (e.g. `wow`, `wowt`).
///
/// The code becomes a URL path segment, so only ASCII letters, digits, `_`
/// and `-` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Product(String);

impl Product {
    /// Validate a product code.
    pub fn parse(code: &str) -> TactResult<Self> {
        let valid = !code.is_empty()
            && code
                .bytes()
                .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-');
        if valid {
            Ok(Self(code.to_string()))
        } else {
            Err(TactError::InvalidProduct(code.to_string()))
        }
    }

    /// The default product set.
    pub fn defaults() -> Vec<Self> {
        DEFAULT_PRODUCTS
            .iter()
            .map(|code| Self((*code).to_string()))
            .collect()
    }

    /// The raw product code.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Product {
    type Err = TactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Region Filter
// ============================================================================

/// Which regions to keep from a response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RegionFilter {
    /// Every record, unfiltered.
    #[default]
    All,
    /// Exactly the record for this region code.
    Only(String),
}

impl RegionFilter {
    /// Sentinel string meaning "all regions".
    pub const ALL: &'static str = "all";

    /// Parse `"all"` or a region code.
    pub fn parse(value: &str) -> TactResult<Self> {
        match value {
            "" => Err(TactError::InvalidRegion(value.to_string())),
            Self::ALL => Ok(Self::All),
            region => Ok(Self::Only(region.to_string())),
        }
    }
}

impl FromStr for RegionFilter {
    type Err = TactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for RegionFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(Self::ALL),
            Self::Only(region) => f.write_str(region),
        }
    }
}

// ============================================================================
// Version Records
// ============================================================================

/// One region's row from a `/versions` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionRecord {
    /// Region code (`us`, `eu`, ...)
    pub region: String,
    /// Build config hash
    pub build_config: String,
    /// CDN config hash
    pub cdn_config: String,
    /// Build number
    pub build_id: u64,
    /// Human-readable version (`1.2.3.45678`)
    pub versions_name: String,
    /// Product config hash
    pub product_config: String,
}

impl VersionRecord {
    /// Split `versions_name` into version and build.
    pub fn build_version(&self) -> TactResult<BuildVersion> {
        BuildVersion::parse(&self.versions_name)
    }
}

/// Everything one `/versions` fetch returned for a product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductVersions {
    /// Product that was queried
    pub product: Product,
    /// `## seqn` value, when the response carried one
    pub sequence_number: Option<u64>,
    /// Records in response order
    pub records: Vec<VersionRecord>,
}

// ============================================================================
// Build Version
// ============================================================================

/// A `major.minor.patch.build` version name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildVersion {
    pub major: String,
    pub minor: String,
    pub patch: String,
    pub build: String,
}

impl BuildVersion {
    /// Parse a four-part dotted version name.
    pub fn parse(value: &str) -> TactResult<Self> {
        let parts: Vec<&str> = value.split('.').collect();
        match parts.as_slice() {
            [major, minor, patch, build] if parts.iter().all(|p| !p.is_empty()) => Ok(Self {
                major: (*major).to_string(),
                minor: (*minor).to_string(),
                patch: (*patch).to_string(),
                build: (*build).to_string(),
            }),
            _ => Err(TactError::InvalidBuildVersion {
                value: value.to_string(),
            }),
        }
    }

    /// The `major.minor.patch` part.
    pub fn version(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// The build component.
    pub fn build(&self) -> &str {
        &self.build
    }
}
