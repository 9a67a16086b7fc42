//! `versions` handler: one product, optionally one region.

use std::io::Write;

use tactver_tact::{HttpBackend, Product, RegionFilter};

use crate::bootstrap::CliContext;
use crate::commands::OutputFormat;
use crate::error::CliError;
use crate::presentation::render_versions_table;

/// Execute the versions command.
pub async fn execute<B: HttpBackend>(
    ctx: &CliContext<B>,
    product: &str,
    region: &str,
    format: OutputFormat,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let product = Product::parse(product)?;
    let region = RegionFilter::parse(region)?;

    let records = ctx.client.fetch_versions(&product, &region).await?;
    tracing::info!(product = %product, region = %region, records = records.len(), "versions fetched");

    match format {
        OutputFormat::Table if records.is_empty() => {
            writeln!(out, "No versions published for '{product}'")?;
        }
        OutputFormat::Table => {
            write!(out, "{}", render_versions_table(&records))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        }
    }

    Ok(())
}
