use anyhow::Result;
use tracing::info;

use crate::config::Config;
use crate::fetch::Fetcher;
use crate::scrapers;
use crate::storage::validate_sites;
use crate::types::{RunSummary, SiteDescriptor};
use crate::workbook::write_workbook;

/// Scrape every site in order, then write all sheets to `config.output`.
///
/// A failing site contributes an empty sheet; only configuration and
/// workbook errors abort the run.
pub fn run(config: &Config, sites: &[SiteDescriptor], fetcher: &dyn Fetcher) -> Result<RunSummary> {
    validate_sites(sites)?;

    let results: Vec<_> = sites
        .iter()
        .map(|site| scrapers::extract(site, fetcher))
        .collect();

    write_workbook(&config.output, &results)?;

    let summary = RunSummary {
        output_path: config.output.clone(),
        results,
    };
    info!(
        path = ?summary.output_path,
        sheets = summary.results.len(),
        records = summary.total_records(),
        failed = summary.failed().count(),
        "Workbook written"
    );

    Ok(summary)
}
