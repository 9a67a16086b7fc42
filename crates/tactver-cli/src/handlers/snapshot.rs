//! `snapshot` handler: several products as one JSON document.

use std::io::Write;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use tactver_tact::{HttpBackend, Product, ProductVersions, TactError};

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// Timestamp layout of `retrieval_datetime`.
const RETRIEVAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Top-level snapshot document. Products keep the order they were requested in.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    pub retrieval_datetime: String,
    pub products: IndexMap<String, ProductSnapshot>,
}

/// One product in a snapshot.
#[derive(Debug, Serialize)]
pub struct ProductSnapshot {
    pub name: String,
    pub sequence_number: Option<u64>,
    pub versions: Vec<RegionVersion>,
}

/// One region's version, split into version and build.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RegionVersion {
    pub region: String,
    pub version: String,
    pub build: String,
}

/// Shape fetched version tables into a snapshot.
///
/// Fails when a version name is not `major.minor.patch.build`.
pub fn build_snapshot(
    retrieved_at: DateTime<Utc>,
    results: &[ProductVersions],
) -> Result<Snapshot, TactError> {
    let mut products = IndexMap::with_capacity(results.len());

    for result in results {
        let versions = result
            .records
            .iter()
            .map(|record| -> Result<RegionVersion, TactError> {
                let parsed = record.build_version()?;
                Ok(RegionVersion {
                    region: record.region.clone(),
                    version: parsed.version(),
                    build: parsed.build().to_string(),
                })
            })
            .collect::<Result<Vec<_>, TactError>>()?;

        let name = result.product.to_string();
        products.insert(
            name.clone(),
            ProductSnapshot {
                name,
                sequence_number: result.sequence_number,
                versions,
            },
        );
    }

    Ok(Snapshot {
        retrieval_datetime: retrieved_at.format(RETRIEVAL_FORMAT).to_string(),
        products,
    })
}

/// Execute the snapshot command.
///
/// With no products given, the default set is queried. Repeated products
/// are fetched once, at their first position.
pub async fn execute<B: HttpBackend>(
    ctx: &CliContext<B>,
    products: &[String],
    out: &mut impl Write,
) -> Result<(), CliError> {
    let products = if products.is_empty() {
        Product::defaults()
    } else {
        let mut unique: Vec<Product> = Vec::with_capacity(products.len());
        for code in products {
            let product = Product::parse(code)?;
            if !unique.contains(&product) {
                unique.push(product);
            }
        }
        unique
    };

    let results = ctx.client.fetch_all(&products).await?;
    let snapshot = build_snapshot(Utc::now(), &results)?;

    writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
    Ok(())
}
