//! Version queries for the TACT client.

use futures_util::future::try_join_all;

use crate::error::{TactError, TactResult};
use crate::http::HttpBackend;
use crate::models::{Product, ProductVersions, RegionFilter, VersionRecord};
use crate::parsing::parse_versions;
use crate::url::build_versions_url;

use super::TactClient;

impl<B: HttpBackend> TactClient<B> {
    /// Fetch and parse the full version table of one product.
    pub async fn fetch_product_versions(&self, product: &Product) -> TactResult<ProductVersions> {
        let url = build_versions_url(&self.base_url, product);
        let body = self.backend.get_text(&url).await?;
        let (sequence_number, records) = parse_versions(&body)?;

        tracing::debug!(
            product = %product,
            records = records.len(),
            sequence_number = ?sequence_number,
            "parsed version table"
        );

        Ok(ProductVersions {
            product: product.clone(),
            sequence_number,
            records,
        })
    }

    /// Fetch the version records of `product`, narrowed by `region`.
    ///
    /// With [`RegionFilter::All`] every record is returned in response order
    /// (possibly none). With [`RegionFilter::Only`] the result holds exactly
    /// the matching record, or the call fails with
    /// [`TactError::RegionNotFound`].
    pub async fn fetch_versions(
        &self,
        product: &Product,
        region: &RegionFilter,
    ) -> TactResult<Vec<VersionRecord>> {
        let versions = self.fetch_product_versions(product).await?;
        filter_region(product, versions.records, region)
    }

    /// Fetch several products concurrently.
    ///
    /// Results come back in input order. The first failure fails the whole
    /// call.
    pub async fn fetch_all(&self, products: &[Product]) -> TactResult<Vec<ProductVersions>> {
        tracing::info!(count = products.len(), "fetching version tables");
        try_join_all(
            products
                .iter()
                .map(|product| self.fetch_product_versions(product)),
        )
        .await
    }
}

fn filter_region(
    product: &Product,
    records: Vec<VersionRecord>,
    region: &RegionFilter,
) -> TactResult<Vec<VersionRecord>> {
    match region {
        RegionFilter::All => Ok(records),
        RegionFilter::Only(code) => records
            .into_iter()
            .find(|record| &record.region == code)
            .map(|record| vec![record])
            .ok_or_else(|| TactError::RegionNotFound {
                product: product.to_string(),
                region: code.clone(),
            }),
    }
}
