mod credential_bios;
mod department_json;
mod employee_directory;

pub use credential_bios::parse_credential_bios;
pub use department_json::parse_department_json;
pub use employee_directory::parse_employee_directory;

use scraper::Selector;
use thiserror::Error;
use tracing::{info, warn};

use crate::fetch::{FetchFailure, Fetcher};
use crate::types::{Extractor, FacultyRecord, SiteDescriptor, SiteResult, SiteStatus};

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("request failed: {0}")]
    Transport(#[from] FetchFailure),
    #[error("unexpected document shape: {0}")]
    Shape(String),
    #[error("invalid selector {0}")]
    Selector(String),
}

impl ExtractError {
    fn summary(&self) -> &'static str {
        match self {
            ExtractError::Transport(_) => "Failed to fetch data",
            ExtractError::Shape(_) | ExtractError::Selector(_) => "Failed to extract records",
        }
    }

    fn status(&self) -> SiteStatus {
        match self {
            ExtractError::Transport(f) => f.status,
            ExtractError::Shape(_) | ExtractError::Selector(_) => SiteStatus::ParseError,
        }
    }

    fn http_code(&self) -> Option<u16> {
        match self {
            ExtractError::Transport(f) => f.http_code,
            ExtractError::Shape(_) | ExtractError::Selector(_) => Some(200),
        }
    }
}

pub(crate) fn selector(css: &str) -> Result<Selector, ExtractError> {
    Selector::parse(css).map_err(|e| ExtractError::Selector(format!("{:?}: {}", css, e)))
}

/// Fetch and parse one site, returning its records or the reason there are none
pub fn extract_records(
    site: &SiteDescriptor,
    fetcher: &dyn Fetcher,
) -> Result<Vec<FacultyRecord>, ExtractError> {
    let body = fetcher.get(&site.url)?;

    match &site.extractor {
        Extractor::DepartmentJson { department_filter } => {
            parse_department_json(&body, department_filter)
        }
        Extractor::EmployeeDirectory { email_domain } => {
            parse_employee_directory(&body, email_domain)
        }
        Extractor::CredentialBios => parse_credential_bios(&body),
    }
}

/// Run one site's extractor. Failures never escape: they become an empty
/// `SiteResult` carrying the classified status and reason.
pub fn extract(site: &SiteDescriptor, fetcher: &dyn Fetcher) -> SiteResult {
    info!(sheet = %site.sheet_name, url = %site.url, extractor = site.extractor.kind(), "Scraping site");

    match extract_records(site, fetcher) {
        Ok(records) => {
            if records.is_empty() {
                warn!(
                    sheet = %site.sheet_name,
                    url = %site.url,
                    "No records extracted from a successful response; page structure may have changed"
                );
            } else {
                info!(sheet = %site.sheet_name, count = records.len(), "Extracted records");
            }
            SiteResult::ok(&site.sheet_name, records)
        }
        Err(e) => {
            warn!(sheet = %site.sheet_name, url = %site.url, status = %e.status(), "{}: {}", e.summary(), e);
            SiteResult {
                sheet_name: site.sheet_name.clone(),
                records: vec![],
                status: e.status(),
                http_code: e.http_code(),
                error_message: Some(e.to_string()),
            }
        }
    }
}
