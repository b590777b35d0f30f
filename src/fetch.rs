//! HTTP Fetch Module
//!
//! One blocking GET per site. Non-success responses and transport errors are
//! classified into a `SiteStatus` so the runner can report them per site.

use std::time::Duration;

use anyhow::Result;
use thiserror::Error;

use crate::types::SiteStatus;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (compatible; FacultyListsBot/0.1)";

/// A fetch that did not produce a usable body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{status}: {message}")]
pub struct FetchFailure {
    pub status: SiteStatus,
    pub http_code: Option<u16>,
    pub message: String,
}

impl FetchFailure {
    pub fn http(code: u16) -> Self {
        let status = match SiteStatus::from_http_code(code) {
            SiteStatus::Ok => SiteStatus::Unknown,
            other => other,
        };
        FetchFailure {
            status,
            http_code: Some(code),
            message: format!("HTTP {}", code),
        }
    }
}

/// Source of page bodies. `HttpFetcher` talks to the network; tests
/// substitute canned responses.
pub trait Fetcher {
    fn get(&self, url: &str) -> Result<String, FetchFailure>;
}

pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()?;
        Ok(HttpFetcher { client })
    }
}

impl Fetcher for HttpFetcher {
    fn get(&self, url: &str) -> Result<String, FetchFailure> {
        let resp = self.client.get(url).send().map_err(|e| classify_error(&e))?;

        // Only a plain 200 counts; other 2xx codes carry no directory body
        let code = resp.status().as_u16();
        if code != 200 {
            return Err(FetchFailure::http(code));
        }

        resp.text().map_err(|e| FetchFailure {
            status: SiteStatus::NetworkError,
            http_code: Some(code),
            message: format!("failed to read body: {}", e),
        })
    }
}

fn classify_error(e: &reqwest::Error) -> FetchFailure {
    let message = e.to_string();
    let status = if e.is_timeout() {
        SiteStatus::Timeout
    } else if e.is_redirect() {
        SiteStatus::TooManyRedirects
    } else if message.contains("SSL") || message.contains("certificate") {
        SiteStatus::SslError
    } else {
        SiteStatus::NetworkError
    };

    FetchFailure {
        status,
        http_code: e.status().map(|s| s.as_u16()),
        message,
    }
}
